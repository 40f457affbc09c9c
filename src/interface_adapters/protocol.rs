// Wire DTOs for the lobby server's JSON bodies that are not domain snapshots.

use serde::Deserialize;

// Every non-2xx body is expected to carry the machine-readable tag in `error`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// Extra fields sent with (400, "not-enough-players").
#[derive(Debug, Deserialize)]
pub struct NotEnoughPlayersBody {
    pub required: u32,
}

// Extra fields sent with (400, "wrong-number-of-cards-played").
#[derive(Debug, Deserialize)]
pub struct WrongNumberOfCardsBody {
    pub got: u32,
    pub expected: u32,
}
