//! Strain server
//!
//! Wires configuration, logging, the compute pool and the REST router into
//! a single HTTP service.

pub mod cli;
pub mod startup;

pub use cli::Cli;
pub use startup::{shutdown_signal, Server};
