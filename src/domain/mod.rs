// Domain layer: lobby snapshots, per-command errors and the transport port.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{Card, Hand, Lobby, LobbyAndHand, LobbyCode, Player, PlayerId, PlayerSecret};
pub use errors::{
    AddDeckError, ChooseError, CommandFailure, NewGameError, NewPlayerError, NoKnownError,
    PlayError, SkipError, UnknownFailure,
};
pub use ports::{Method, OutgoingRequest, RawResponse, Transport, TransportError};
