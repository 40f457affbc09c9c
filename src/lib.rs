pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    AddDeckError, ChooseError, CommandFailure, LobbyCode, NewGameError, NewPlayerError,
    NoKnownError, PlayError, PlayerId, PlayerSecret, SkipError, UnknownFailure,
};
pub use frameworks::config::ClientSettings;
pub use interface_adapters::client::LobbyClient;
pub use interface_adapters::clients::http::HttpTransport;
