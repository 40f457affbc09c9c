// Framework bootstrap: env configuration, tracing and the smoke run.

pub mod config;
pub mod probe;
pub mod telemetry;
