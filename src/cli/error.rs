//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::Domain(e).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(InfraError::Io { .. }) => exitcode::IOERR,
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::Domain(d) => domain_exit_code(d),
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::HierarchyRead { .. } => exitcode::NOINPUT,
                ApplicationError::InvalidHierarchy { .. } => exitcode::DATAERR,
                ApplicationError::OperationFailed { .. } => exitcode::IOERR,
            },
        }
    }
}

fn domain_exit_code(e: &DomainError) -> i32 {
    match e {
        DomainError::UnknownPattern(_) | DomainError::UnsupportedPattern(_) => exitcode::CONFIG,
        DomainError::UnknownCategory(_) | DomainError::UnknownView(_) => exitcode::USAGE,
        DomainError::NodeNotFound(_)
        | DomainError::TemplateNotFound(_)
        | DomainError::EmptyTemplateKey
        | DomainError::DuplicateNode(_)
        | DomainError::UnknownParent { .. }
        | DomainError::MultipleRoots(_)
        | DomainError::EmptyHierarchy
        | DomainError::CycleDetected(_) => exitcode::DATAERR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PatternType;

    #[test]
    fn test_exit_codes() {
        let unsupported = CliError::from(DomainError::UnsupportedPattern(PatternType::Singleton));
        assert_eq!(unsupported.exit_code(), exitcode::CONFIG);

        let lookup = CliError::from(DomainError::NodeNotFound("x".into()));
        assert_eq!(lookup.exit_code(), exitcode::DATAERR);

        let read = CliError::from(ApplicationError::HierarchyRead {
            path: "org.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(read.exit_code(), exitcode::NOINPUT);

        let io = CliError::from(InfraError::io("flush", std::io::Error::from(std::io::ErrorKind::BrokenPipe)));
        assert_eq!(io.exit_code(), exitcode::IOERR);
    }
}
