use std::io::Write;

use crate::application::runner::{emit, emit_all, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::document::{Document, HtmlExportVisitor, StatisticsVisitor};
use crate::domain::PatternType;

pub struct VisitorRunner;

impl PatternRunner for VisitorRunner {
    fn pattern(&self) -> PatternType {
        PatternType::Visitor
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let document = Document::sample();

        emit(out, "HTML Export:")?;
        let mut html = HtmlExportVisitor::new();
        document.accept(&mut html);
        emit_all(out, html.lines())?;

        emit(out, "\nDocument Statistics:")?;
        let mut stats = StatisticsVisitor::default();
        document.accept(&mut stats);
        emit(out, stats)
    }
}
