//! Pattern runners: one per demonstration, selected by [`PatternType`].

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, instrument};

use crate::application::runners::{
    AbstractFactoryRunner, BridgeRunner, BuilderRunner, FactoryMethodRunner, PrototypeRunner,
    VisitorRunner,
};
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{DomainError, PatternType};

/// Separator printed between the parts of a demonstration.
pub const SEPARATOR: &str = "-------------------";

pub trait PatternRunner {
    fn pattern(&self) -> PatternType;

    /// Pattern-specific body of the demonstration.
    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()>;

    /// Print the pattern header, then run the demonstration.
    fn execute(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let pattern = self.pattern();
        debug!("executing {} demo", pattern);
        emit(
            out,
            format!("Demonstrating Pattern #{}: {}", pattern.number(), pattern),
        )?;
        emit(out, format!("Category: {}", pattern.category()))?;
        emit(out, format!("Description: {}", pattern.description()))?;
        emit(out, "\n------- Demo Output -------\n")?;
        self.run_pattern(out)
    }
}

/// Resolve the runner for `pattern`; patterns without a demo are rejected
/// before anything is printed.
#[instrument(level = "debug", skip(settings))]
pub fn runner_for(
    pattern: PatternType,
    settings: &Settings,
) -> ApplicationResult<Box<dyn PatternRunner>> {
    let runner: Box<dyn PatternRunner> = match pattern {
        PatternType::AbstractFactory => Box::new(AbstractFactoryRunner),
        PatternType::Builder => Box::new(BuilderRunner::default()),
        PatternType::FactoryMethod => Box::new(FactoryMethodRunner),
        PatternType::Prototype => Box::new(PrototypeRunner),
        PatternType::Bridge => Box::new(BridgeRunner::new(settings.indent.clone())),
        PatternType::Visitor => Box::new(VisitorRunner),
        other => return Err(DomainError::UnsupportedPattern(other).into()),
    };
    Ok(runner)
}

/// Write one line of demo output.
pub fn emit(out: &mut dyn Write, line: impl Display) -> ApplicationResult<()> {
    writeln!(out, "{}", line).with_context("write demo output")
}

/// Write several lines of demo output.
pub fn emit_all<I>(out: &mut dyn Write, lines: I) -> ApplicationResult<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    for line in lines {
        emit(out, line)?;
    }
    Ok(())
}

/// Print the separator framed by blank lines.
pub fn separator(out: &mut dyn Write) -> ApplicationResult<()> {
    emit(out, format!("\n{}\n", SEPARATOR))
}
