//! gof-demo: Gang-of-Four design pattern demonstrations.
//!
//! The Bridge demonstration is the core: an arena-backed organisation tree
//! queried through interchangeable views.
//!
//! # Architecture
//!
//! - `domain`: pattern catalogue, tree, views and demo object models (no I/O)
//! - `application`: pattern runners and the hierarchy service
//! - `infrastructure`: filesystem boundary and service wiring
//! - `cli`: argument parsing and command dispatch
//! - `config`: layered settings

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
