// Stub lobby server shared by the integration tests, started once per test binary.
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use lobby_client::{ClientSettings, LobbyClient, LobbyCode, PlayerId, PlayerSecret};
use serde_json::{Value, json};
use std::{sync::OnceLock, time::Duration};
use url::Url;

pub const LOBBY: &str = "ABCD";
pub const PLAYER_ID: u32 = 1;
pub const SECRET: &str = "s3cr3t";

static SERVER_URL: OnceLock<Url> = OnceLock::new();

pub fn lobby_code() -> LobbyCode {
    LobbyCode::new(LOBBY)
}

pub fn secret() -> PlayerSecret {
    PlayerSecret::new(PlayerId(PLAYER_ID), SECRET)
}

pub fn lobby_json() -> Value {
    json!({
        "gameCode": LOBBY,
        "owner": 0,
        "players": [
            { "id": 0, "name": "Host", "score": 0 },
            { "id": PLAYER_ID, "name": "Alice", "score": 0 }
        ],
        "config": { "decks": [], "handSize": 10 }
    })
}

pub fn lobby_and_hand_json() -> Value {
    json!({
        "lobby": lobby_json(),
        "hand": {
            "hand": [
                { "id": "r1", "text": "A windmill full of corpses." },
                { "id": "r2", "text": "Being on fire." }
            ]
        }
    })
}

// Client pointed at the stub server.
pub fn client() -> LobbyClient {
    let settings = ClientSettings::new(server_url().as_str(), Duration::from_secs(2))
        .expect("stub url should parse");
    LobbyClient::from_settings(&settings).expect("client should build")
}

pub fn server_url() -> &'static Url {
    SERVER_URL.get_or_init(|| {
        // Bound on the caller's thread: connects queue in the backlog until axum accepts.
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
        listener
            .set_nonblocking(true)
            .expect("tokio listeners must be nonblocking");
        let addr = listener.local_addr().expect("get local addr");

        // Own runtime on an OS thread so the stub outlives each #[tokio::test] runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt test listener");
                axum::serve(listener, app()).await.expect("stub server failed");
            });
        });

        Url::parse(&format!("http://{addr}")).expect("stub url should parse")
    })
}

fn app() -> Router {
    Router::new()
        .route("/lobbies", post(create_lobby))
        .route("/lobbies/{code}", post(command))
        .route("/lobbies/{code}/players", post(new_player))
        .route("/lobbies/{code}/players/newAi", post(new_ai))
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn state() -> Response {
    Json(lobby_and_hand_json()).into_response()
}

async fn create_lobby() -> Json<Value> {
    Json(lobby_json())
}

async fn new_player(Path(code): Path<String>, Json(body): Json<Value>) -> Response {
    if code != LOBBY {
        return error(StatusCode::NOT_FOUND, json!({ "error": "lobby-not-found" }));
    }
    if body["name"] == "Taken" {
        return error(StatusCode::BAD_REQUEST, json!({ "error": "name-in-use" }));
    }
    Json(json!({ "id": PLAYER_ID, "secret": SECRET })).into_response()
}

async fn new_ai(Path(code): Path<String>) -> Response {
    if code != LOBBY {
        return error(StatusCode::NOT_FOUND, json!({ "error": "lobby-not-found" }));
    }
    StatusCode::OK.into_response()
}

async fn command(Path(code): Path<String>, Json(body): Json<Value>) -> Response {
    if code != LOBBY {
        return error(StatusCode::NOT_FOUND, json!({ "error": "lobby-not-found" }));
    }
    if body["secret"] != json!({ "id": PLAYER_ID, "secret": SECRET }) {
        return error(StatusCode::FORBIDDEN, json!({ "error": "not-authenticated" }));
    }

    match body["command"].as_str() {
        Some("getLobbyAndHand") | Some("back") => state(),
        Some("addDeck") => match body["deckId"].as_str() {
            Some("missing") => error(StatusCode::BAD_REQUEST, json!({ "error": "deck-not-found" })),
            Some("slow") => error(StatusCode::BAD_GATEWAY, json!({ "error": "cardcast-timeout" })),
            Some(_) => state(),
            None => error(StatusCode::BAD_REQUEST, json!({ "error": "bad-request" })),
        },
        Some("newGame") => error(
            StatusCode::BAD_REQUEST,
            json!({ "error": "not-enough-players", "required": 3 }),
        ),
        Some("choose") => match body["winner"].as_u64() {
            Some(0) => error(StatusCode::BAD_REQUEST, json!({ "error": "not-czar" })),
            Some(1) => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
            _ => state(),
        },
        Some("play") => {
            let ids = body["ids"].as_array().cloned().unwrap_or_default();
            if ids == vec![json!(9)] {
                return error(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "wrong-number-of-cards-played" }),
                );
            }
            if ids.len() != 1 {
                return error(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "wrong-number-of-cards-played", "got": ids.len(), "expected": 1 }),
                );
            }
            state()
        }
        Some("skip") => {
            let players = body["players"].as_array().map_or(0, Vec::len);
            if players == 0 {
                return error(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "not-enough-players-to-skip" }),
                );
            }
            state()
        }
        _ => error(StatusCode::BAD_REQUEST, json!({ "error": "unknown-command" })),
    }
}
