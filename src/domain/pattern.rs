//! Catalogue of the 23 Gang-of-Four patterns.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// GoF pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternCategory::Creational => "Creational",
            PatternCategory::Structural => "Structural",
            PatternCategory::Behavioral => "Behavioral",
        };
        f.write_str(name)
    }
}

/// All 23 GoF patterns, numbered in catalogue order.
///
/// Creational patterns are 1-5, structural 6-12, behavioral 13-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternType {
    AbstractFactory = 1,
    Builder = 2,
    FactoryMethod = 3,
    Prototype = 4,
    Singleton = 5,
    Adapter = 6,
    Bridge = 7,
    Composite = 8,
    Decorator = 9,
    Facade = 10,
    Flyweight = 11,
    Proxy = 12,
    ChainOfResponsibility = 13,
    Command = 14,
    Interpreter = 15,
    Iterator = 16,
    Mediator = 17,
    Memento = 18,
    Observer = 19,
    State = 20,
    Strategy = 21,
    TemplateMethod = 22,
    Visitor = 23,
}

impl PatternType {
    pub const ALL: [PatternType; 23] = [
        PatternType::AbstractFactory,
        PatternType::Builder,
        PatternType::FactoryMethod,
        PatternType::Prototype,
        PatternType::Singleton,
        PatternType::Adapter,
        PatternType::Bridge,
        PatternType::Composite,
        PatternType::Decorator,
        PatternType::Facade,
        PatternType::Flyweight,
        PatternType::Proxy,
        PatternType::ChainOfResponsibility,
        PatternType::Command,
        PatternType::Interpreter,
        PatternType::Iterator,
        PatternType::Mediator,
        PatternType::Memento,
        PatternType::Observer,
        PatternType::State,
        PatternType::Strategy,
        PatternType::TemplateMethod,
        PatternType::Visitor,
    ];

    /// Position in the GoF catalogue (1-23).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.number() == number)
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternType::AbstractFactory => "AbstractFactory",
            PatternType::Builder => "Builder",
            PatternType::FactoryMethod => "FactoryMethod",
            PatternType::Prototype => "Prototype",
            PatternType::Singleton => "Singleton",
            PatternType::Adapter => "Adapter",
            PatternType::Bridge => "Bridge",
            PatternType::Composite => "Composite",
            PatternType::Decorator => "Decorator",
            PatternType::Facade => "Facade",
            PatternType::Flyweight => "Flyweight",
            PatternType::Proxy => "Proxy",
            PatternType::ChainOfResponsibility => "ChainOfResponsibility",
            PatternType::Command => "Command",
            PatternType::Interpreter => "Interpreter",
            PatternType::Iterator => "Iterator",
            PatternType::Mediator => "Mediator",
            PatternType::Memento => "Memento",
            PatternType::Observer => "Observer",
            PatternType::State => "State",
            PatternType::Strategy => "Strategy",
            PatternType::TemplateMethod => "TemplateMethod",
            PatternType::Visitor => "Visitor",
        }
    }

    pub fn category(self) -> PatternCategory {
        match self.number() {
            1..=5 => PatternCategory::Creational,
            6..=12 => PatternCategory::Structural,
            _ => PatternCategory::Behavioral,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PatternType::AbstractFactory => "Creates an instance of several families of classes",
            PatternType::Builder => "Separates object construction from its representation",
            PatternType::FactoryMethod => "Creates an instance of several derived classes",
            PatternType::Prototype => "A fully initialized instance to be copied or cloned",
            PatternType::Singleton => "Ensures a class has only one instance with global access",
            PatternType::Adapter => "Match interfaces of different classes",
            PatternType::Bridge => "Separates an object's interface from its implementation",
            PatternType::Composite => "A tree structure of simple and composite objects",
            PatternType::Decorator => "Add responsibilities to objects dynamically",
            PatternType::Facade => "A single class that represents an entire subsystem",
            PatternType::Flyweight => "A fine-grained instance used for efficient sharing",
            PatternType::Proxy => "An object representing another object",
            PatternType::ChainOfResponsibility => {
                "A way of passing a request between a chain of objects"
            }
            PatternType::Command => "Encapsulate a command request as an object",
            PatternType::Interpreter => "A way to include language elements in a program",
            PatternType::Iterator => "Sequentially access the elements of a collection",
            PatternType::Mediator => "Defines simplified communication between classes",
            PatternType::Memento => "Capture and restore an object's internal state",
            PatternType::Observer => "A way of notifying change to a number of classes",
            PatternType::State => "Alter an object's behavior when its state changes",
            PatternType::Strategy => "Encapsulates an algorithm inside a class",
            PatternType::TemplateMethod => "Defer the exact steps of an algorithm to a subclass",
            PatternType::Visitor => "Defines a new operation to a class without change",
        }
    }

    /// Whether this crate ships a runnable demonstration for the pattern.
    pub fn has_demo(self) -> bool {
        matches!(
            self,
            PatternType::AbstractFactory
                | PatternType::Builder
                | PatternType::FactoryMethod
                | PatternType::Prototype
                | PatternType::Bridge
                | PatternType::Visitor
        )
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop separators so `factory-method`, `Factory Method`
/// and `FactoryMethod` compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for PatternType {
    type Err = DomainError;

    /// Accepts a pattern name in any case/separator style, or its catalogue number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number)
                .ok_or_else(|| DomainError::UnknownPattern(trimmed.to_string()));
        }
        let wanted = normalize(trimmed);
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownPattern(trimmed.to_string()))
    }
}
