// Smoke run against a live lobby server: create, join, add an AI, read state.

use crate::frameworks::config::{self, ClientSettings};
use crate::frameworks::telemetry::init_tracing;
use crate::interface_adapters::client::LobbyClient;
use std::io::{Error, Result};

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = ClientSettings::from_env()
        .map_err(|e| Error::other(format!("invalid LOBBY_SERVER_URL: {e}")))?;
    tracing::debug!(
        base_url = %settings.base_url,
        timeout_ms = settings.timeout.as_millis(),
        "lobby client configured"
    );

    let client = LobbyClient::from_settings(&settings)
        .map_err(|e| Error::other(format!("failed to initialize http client: {e}")))?;

    run(&client, &config::player_name()).await
}

pub async fn run(client: &LobbyClient, player_name: &str) -> Result<()> {
    let lobby = client
        .create_lobby()
        .await
        .map_err(|e| Error::other(format!("create lobby: {e}")))?;
    tracing::info!(lobby = %lobby.game_code, "lobby created");

    let secret = client
        .new_player(&lobby.game_code, player_name)
        .await
        .map_err(|e| Error::other(format!("join lobby: {e}")))?;
    tracing::info!(player = %secret.player_id(), "joined lobby");

    client
        .new_ai(&lobby.game_code)
        .await
        .map_err(|e| Error::other(format!("add ai: {e}")))?;

    let state = client
        .get_lobby_and_hand(&lobby.game_code, &secret)
        .await
        .map_err(|e| Error::other(format!("read state: {e}")))?;
    tracing::info!(
        lobby = %state.lobby.game_code,
        players = state.lobby.players.len(),
        hand = state.hand.as_ref().map_or(0, |hand| hand.hand.len()),
        "lobby state"
    );

    Ok(())
}
