//! One runner per demonstrated pattern.

pub mod abstract_factory;
pub mod bridge;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod visitor;

pub use abstract_factory::AbstractFactoryRunner;
pub use bridge::BridgeRunner;
pub use builder::BuilderRunner;
pub use factory_method::FactoryMethodRunner;
pub use prototype::PrototypeRunner;
pub use visitor::VisitorRunner;
