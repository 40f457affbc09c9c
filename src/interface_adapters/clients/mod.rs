// Outbound clients for the remote lobby server.

pub mod http;
