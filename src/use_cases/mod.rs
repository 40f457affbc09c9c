// Use cases layer: command descriptors and the generic executor.

pub mod commands;
pub mod envelope;
pub mod executor;
pub mod request;

pub use executor::{classify, execute};
pub use request::{ErrorTable, Request};
