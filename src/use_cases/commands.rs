// One pure function per server action. Nothing here performs I/O; each function
// only describes the call and the exact error vocabulary it can produce.

use crate::domain::{
    AddDeckError, ChooseError, Lobby, LobbyAndHand, LobbyCode, Method, NewGameError,
    NewPlayerError, NoKnownError, PlayError, PlayerId, PlayerSecret, SkipError,
};
use crate::interface_adapters::protocol::{NotEnoughPlayersBody, WrongNumberOfCardsBody};
use crate::use_cases::envelope::{CommandArgs, args, command_request, lobby_segments};
use crate::use_cases::request::{ErrorTable, Request, decode_json, fields, ignore_body};
use serde_json::{Value, json};

pub fn create_lobby() -> Request<Lobby, NoKnownError> {
    Request::new(Method::Post, ["lobbies"], decode_json::<Lobby>)
}

pub fn new_player(code: &LobbyCode, name: &str) -> Request<PlayerSecret, NewPlayerError> {
    Request::new(
        Method::Post,
        players_segments(code),
        decode_json::<PlayerSecret>,
    )
    .with_body(json!({ "name": name }))
    .with_known_errors(
        ErrorTable::new()
            .on(400, "name-in-use", NewPlayerError::NameInUse)
            .on(404, "lobby-not-found", NewPlayerError::LobbyNotFound),
    )
}

pub fn get_lobby_and_hand(
    code: &LobbyCode,
    secret: &PlayerSecret,
) -> Request<LobbyAndHand, NoKnownError> {
    command_request(code, "getLobbyAndHand", secret, CommandArgs::new())
}

pub fn add_deck(
    code: &LobbyCode,
    secret: &PlayerSecret,
    deck_id: &str,
) -> Request<LobbyAndHand, AddDeckError> {
    command_request(code, "addDeck", secret, args([("deckId", json!(deck_id))]))
        .with_known_errors(
            ErrorTable::new()
                .on(502, "cardcast-timeout", AddDeckError::CardcastTimeout)
                .on(400, "deck-not-found", AddDeckError::DeckNotFound),
        )
}

// Success carries no payload; the body only has to be empty or JSON.
pub fn new_ai(code: &LobbyCode) -> Request<(), NoKnownError> {
    let mut segments = players_segments(code);
    segments.push("newAi");
    Request::new(Method::Post, segments, ignore_body)
}

pub fn new_game(code: &LobbyCode, secret: &PlayerSecret) -> Request<LobbyAndHand, NewGameError> {
    command_request(code, "newGame", secret, CommandArgs::new()).with_known_errors(
        ErrorTable::new()
            .on(400, "game-in-progress", NewGameError::GameInProgress)
            .on_fields(400, "not-enough-players", not_enough_players),
    )
}

pub fn choose(
    code: &LobbyCode,
    secret: &PlayerSecret,
    winner: u32,
) -> Request<LobbyAndHand, ChooseError> {
    command_request(code, "choose", secret, args([("winner", json!(winner))]))
        .with_known_errors(ErrorTable::new().on(400, "not-czar", ChooseError::NotCzar))
}

/// Plays the cards at `ids` (indices into the caller's hand).
pub fn play(
    code: &LobbyCode,
    secret: &PlayerSecret,
    ids: &[u32],
) -> Request<LobbyAndHand, PlayError> {
    command_request(code, "play", secret, args([("ids", json!(ids))])).with_known_errors(
        ErrorTable::new()
            .on(400, "not-in-round", PlayError::NotInRound)
            .on(400, "already-played", PlayError::AlreadyPlayed)
            .on(400, "already-judging", PlayError::AlreadyJudging)
            .on_fields(400, "wrong-number-of-cards-played", wrong_number_of_cards),
    )
}

pub fn skip(
    code: &LobbyCode,
    secret: &PlayerSecret,
    players: &[PlayerId],
) -> Request<LobbyAndHand, SkipError> {
    command_request(code, "skip", secret, args([("players", json!(players))]))
        .with_known_errors(
            ErrorTable::new()
                .on(400, "not-enough-players-to-skip", SkipError::NotEnoughPlayersToSkip)
                .on(400, "players-must-be-skippable", SkipError::PlayersMustBeSkippable),
        )
}

// Un-skips the caller.
pub fn back(code: &LobbyCode, secret: &PlayerSecret) -> Request<LobbyAndHand, NoKnownError> {
    command_request(code, "back", secret, CommandArgs::new())
}

fn players_segments(code: &LobbyCode) -> Vec<&str> {
    let mut segments = lobby_segments(code).to_vec();
    segments.push("players");
    segments
}

fn not_enough_players(body: &Value) -> Option<NewGameError> {
    fields::<NotEnoughPlayersBody>(body).map(|payload| NewGameError::NotEnoughPlayers {
        required: payload.required,
    })
}

fn wrong_number_of_cards(body: &Value) -> Option<PlayError> {
    fields::<WrongNumberOfCardsBody>(body).map(|payload| PlayError::WrongNumberOfCards {
        got: payload.got,
        expected: payload.expected,
    })
}
