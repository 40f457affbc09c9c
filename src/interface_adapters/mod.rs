// Interface adapters: wire DTOs, the HTTP transport and the typed client facade.

pub mod client;
pub mod clients;
pub mod protocol;
