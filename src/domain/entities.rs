use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// Short code the server hands out when a lobby is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyCode(String);

impl LobbyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LobbyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LobbyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// Server-assigned player id, unique within one lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credential issued when a player joins a lobby.
///
/// The token is opaque to this crate: it is decoded from the join response and
/// serialized back into command envelopes, nothing else reads it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSecret {
    id: PlayerId,
    secret: String,
}

impl PlayerSecret {
    pub fn new(id: PlayerId, secret: impl Into<String>) -> Self {
        Self {
            id,
            secret: secret.into(),
        }
    }

    pub fn player_id(&self) -> PlayerId {
        self.id
    }
}

impl fmt::Debug for PlayerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSecret")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Lobby snapshot as the server reports it.
///
/// Only the fields this client reasons about are typed; everything else the
/// server sends (config, round state, ...) is kept in `rest` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    pub game_code: LobbyCode,
    pub owner: PlayerId,
    pub players: Vec<Player>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub hand: Vec<Card>,
}

// State returned by every in-lobby command: the lobby plus the caller's hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LobbyAndHand {
    pub lobby: Lobby,
    pub hand: Option<Hand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn when_secret_is_debug_printed_then_token_is_redacted() {
        let secret = PlayerSecret::new(PlayerId(2), "hunter2");

        let printed = format!("{secret:?}");

        assert!(printed.contains("PlayerId(2)"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn when_secret_is_serialized_then_wire_shape_is_id_and_secret() {
        let secret = PlayerSecret::new(PlayerId(2), "hunter2");

        let value = serde_json::to_value(&secret).expect("expected secret to encode");

        assert_eq!(value, json!({ "id": 2, "secret": "hunter2" }));
    }

    #[test]
    fn when_lobby_has_unknown_fields_then_they_are_kept_in_rest() {
        let lobby: Lobby = serde_json::from_value(json!({
            "gameCode": "ABCD",
            "owner": 0,
            "players": [{ "id": 0, "name": "Host" }],
            "round": { "czar": 0 }
        }))
        .expect("expected lobby to decode");

        assert_eq!(lobby.game_code.as_str(), "ABCD");
        assert_eq!(lobby.players[0].score, 0);
        assert_eq!(lobby.rest.get("round"), Some(&json!({ "czar": 0 })));
    }

    #[test]
    fn when_hand_is_absent_then_lobby_and_hand_decodes_without_it() {
        let state: LobbyAndHand = serde_json::from_value(json!({
            "lobby": { "gameCode": "ABCD", "owner": 0, "players": [] }
        }))
        .expect("expected state to decode");

        assert!(state.hand.is_none());
    }

    #[test]
    fn when_lobby_lacks_game_code_then_decode_fails() {
        let result = serde_json::from_value::<Lobby>(json!({ "owner": 0, "players": [] }));

        assert!(result.is_err());
    }
}
