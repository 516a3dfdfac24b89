//! Infrastructure layer: I/O implementations and service wiring
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod container;
pub mod error;
pub mod traits;

pub use container::ServiceContainer;
pub use error::{InfraError, InfraResult};
