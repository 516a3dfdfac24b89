//! Platform UI widget families (Abstract Factory).

pub trait Button {
    fn render(&self) -> Vec<String>;
    fn handle_click(&self) -> String;
}

pub trait TextBox {
    fn render(&self) -> Vec<String>;
    fn handle_input(&mut self, text: &str) -> String;
    fn value(&self) -> &str;
}

/// Creates widgets that belong to the same platform family.
pub trait UiFactory {
    fn theme(&self) -> &'static str;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_box(&self) -> Box<dyn TextBox>;
}

fn boxed(top: &str, side: char, bottom: &str, value: &str) -> Vec<String> {
    vec![
        top.to_string(),
        format!("{side} {value:<14} {side}"),
        bottom.to_string(),
    ]
}

// Windows family

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> Vec<String> {
        vec![
            "Rendering a button in Windows style".to_string(),
            "╔════════╗".to_string(),
            "║ Button ║".to_string(),
            "╚════════╝".to_string(),
        ]
    }

    fn handle_click(&self) -> String {
        "Windows button click handled with ripple effect".to_string()
    }
}

#[derive(Default)]
pub struct WindowsTextBox {
    current_value: String,
}

impl TextBox for WindowsTextBox {
    fn render(&self) -> Vec<String> {
        let mut lines = vec!["Rendering a textbox in Windows style".to_string()];
        lines.extend(boxed(
            "┌──────────────────┐",
            '│',
            "└──────────────────┘",
            &self.current_value,
        ));
        lines
    }

    fn handle_input(&mut self, text: &str) -> String {
        self.current_value = text.to_string();
        format!("Windows textbox handling input: {text}")
    }

    fn value(&self) -> &str {
        &self.current_value
    }
}

pub struct WindowsUiFactory;

impl UiFactory for WindowsUiFactory {
    fn theme(&self) -> &'static str {
        "Windows 11 Light"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(WindowsTextBox::default())
    }
}

// macOS family

pub struct MacButton;

impl Button for MacButton {
    fn render(&self) -> Vec<String> {
        vec![
            "Rendering a button in macOS style".to_string(),
            "╭────────╮".to_string(),
            "│ Button │".to_string(),
            "╰────────╯".to_string(),
        ]
    }

    fn handle_click(&self) -> String {
        "macOS button click handled with smooth animation".to_string()
    }
}

#[derive(Default)]
pub struct MacTextBox {
    current_value: String,
}

impl TextBox for MacTextBox {
    fn render(&self) -> Vec<String> {
        let mut lines = vec!["Rendering a textbox in macOS style".to_string()];
        lines.extend(boxed(
            "╭──────────────────╮",
            '│',
            "╰──────────────────╯",
            &self.current_value,
        ));
        lines
    }

    fn handle_input(&mut self, text: &str) -> String {
        self.current_value = text.to_string();
        format!("macOS textbox handling input: {text}")
    }

    fn value(&self) -> &str {
        &self.current_value
    }
}

pub struct MacUiFactory;

impl UiFactory for MacUiFactory {
    fn theme(&self) -> &'static str {
        "macOS Monterey"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_text_box(&self) -> Box<dyn TextBox> {
        Box::new(MacTextBox::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_box_keeps_input() {
        let mut text_box = WindowsUiFactory.create_text_box();
        assert_eq!(text_box.value(), "");
        text_box.handle_input("Hello World!");
        assert_eq!(text_box.value(), "Hello World!");
        assert_eq!(text_box.render()[2], "│ Hello World!   │");
    }

    #[test]
    fn test_families_do_not_mix() {
        let windows = WindowsUiFactory.create_button().render();
        let mac = MacUiFactory.create_button().render();
        assert!(windows[0].contains("Windows"));
        assert!(mac[0].contains("macOS"));
        assert_ne!(windows[1], mac[1]);
    }
}
