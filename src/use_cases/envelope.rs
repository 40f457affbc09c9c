// Shared builder for state-changing lobby commands.
//
// Wire shape: {"command": <name>, "secret": <PlayerSecret>, ...args}.
// Arguments are merged at the top level; `command` and `secret` are reserved.

use crate::domain::{LobbyCode, Method, PlayerSecret};
use crate::use_cases::request::{Request, decode_json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

const COMMAND_FIELD: &str = "command";
const SECRET_FIELD: &str = "secret";

pub type CommandArgs = Map<String, Value>;

// Collects named arguments in declaration order.
pub fn args<const N: usize>(pairs: [(&str, Value); N]) -> CommandArgs {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

pub fn command_body(name: &str, secret: &PlayerSecret, args: CommandArgs) -> Value {
    let mut body = Map::new();
    body.insert(COMMAND_FIELD.to_string(), json!(name));
    body.insert(SECRET_FIELD.to_string(), json!(secret));
    for (field, value) in args {
        debug_assert!(
            field != COMMAND_FIELD && field != SECRET_FIELD,
            "command argument uses reserved field {field}"
        );
        body.entry(field).or_insert(value);
    }
    Value::Object(body)
}

// Path of the lobby endpoint. The code stays one segment whatever it contains.
pub fn lobby_segments(code: &LobbyCode) -> [&str; 2] {
    ["lobbies", code.as_str()]
}

/// Descriptor for a command POSTed to the lobby endpoint.
pub fn command_request<T: DeserializeOwned, E>(
    code: &LobbyCode,
    name: &str,
    secret: &PlayerSecret,
    args: CommandArgs,
) -> Request<T, E> {
    Request::new(Method::Post, lobby_segments(code), decode_json::<T>)
        .with_body(command_body(name, secret, args))
}
