use std::io::Write;

use crate::application::runner::{emit, emit_all, separator, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::ui::{MacUiFactory, UiFactory, WindowsUiFactory};
use crate::domain::PatternType;

pub struct AbstractFactoryRunner;

impl AbstractFactoryRunner {
    fn demonstrate_ui(&self, factory: &dyn UiFactory, out: &mut dyn Write) -> ApplicationResult<()> {
        emit(out, format!("Creating UI using {}", factory.theme()))?;

        let button = factory.create_button();
        let mut text_box = factory.create_text_box();

        emit(out, "\nButton Demo:")?;
        emit_all(out, button.render())?;
        emit(out, button.handle_click())?;

        emit(out, "\nTextBox Demo:")?;
        emit_all(out, text_box.render())?;
        emit(out, text_box.handle_input("Hello World!"))?;
        emit_all(out, text_box.render())
    }
}

impl PatternRunner for AbstractFactoryRunner {
    fn pattern(&self) -> PatternType {
        PatternType::AbstractFactory
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        self.demonstrate_ui(&WindowsUiFactory, out)?;
        separator(out)?;
        self.demonstrate_ui(&MacUiFactory, out)
    }
}
