use crate::domain::{
    AddDeckError, ChooseError, CommandFailure, Lobby, LobbyAndHand, LobbyCode, NewGameError,
    NewPlayerError, NoKnownError, PlayError, PlayerId, PlayerSecret, SkipError, Transport,
};
use crate::frameworks::config::ClientSettings;
use crate::interface_adapters::clients::http::HttpTransport;
use crate::use_cases::{commands, execute};
use std::sync::Arc;

/// Typed entry point for every lobby action.
///
/// Each method builds the action's request descriptor and runs it through the
/// shared executor. Calls are independent of each other: the client holds no
/// state besides the transport, so clones can be used from many tasks at once.
#[derive(Clone)]
pub struct LobbyClient {
    // Arc<dyn Trait> so tests can swap the HTTP transport for a fake.
    transport: Arc<dyn Transport>,
}

impl LobbyClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::from_settings(settings)?;
        Ok(Self::new(Arc::new(transport)))
    }

    #[tracing::instrument(name = "create_lobby", skip_all)]
    pub async fn create_lobby(&self) -> Result<Lobby, CommandFailure<NoKnownError>> {
        execute(self.transport.as_ref(), commands::create_lobby()).await
    }

    #[tracing::instrument(name = "new_player", skip_all, fields(lobby = %code))]
    pub async fn new_player(
        &self,
        code: &LobbyCode,
        name: &str,
    ) -> Result<PlayerSecret, CommandFailure<NewPlayerError>> {
        execute(self.transport.as_ref(), commands::new_player(code, name)).await
    }

    #[tracing::instrument(
        name = "get_lobby_and_hand",
        skip_all,
        fields(lobby = %code, player = %secret.player_id())
    )]
    pub async fn get_lobby_and_hand(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
    ) -> Result<LobbyAndHand, CommandFailure<NoKnownError>> {
        execute(
            self.transport.as_ref(),
            commands::get_lobby_and_hand(code, secret),
        )
        .await
    }

    #[tracing::instrument(
        name = "add_deck",
        skip_all,
        fields(lobby = %code, player = %secret.player_id(), deck_id = %deck_id)
    )]
    pub async fn add_deck(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
        deck_id: &str,
    ) -> Result<LobbyAndHand, CommandFailure<AddDeckError>> {
        execute(
            self.transport.as_ref(),
            commands::add_deck(code, secret, deck_id),
        )
        .await
    }

    #[tracing::instrument(name = "new_ai", skip_all, fields(lobby = %code))]
    pub async fn new_ai(&self, code: &LobbyCode) -> Result<(), CommandFailure<NoKnownError>> {
        execute(self.transport.as_ref(), commands::new_ai(code)).await
    }

    #[tracing::instrument(
        name = "new_game",
        skip_all,
        fields(lobby = %code, player = %secret.player_id())
    )]
    pub async fn new_game(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
    ) -> Result<LobbyAndHand, CommandFailure<NewGameError>> {
        execute(self.transport.as_ref(), commands::new_game(code, secret)).await
    }

    #[tracing::instrument(
        name = "choose",
        skip_all,
        fields(lobby = %code, player = %secret.player_id(), winner = winner)
    )]
    pub async fn choose(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
        winner: u32,
    ) -> Result<LobbyAndHand, CommandFailure<ChooseError>> {
        execute(
            self.transport.as_ref(),
            commands::choose(code, secret, winner),
        )
        .await
    }

    #[tracing::instrument(
        name = "play",
        skip_all,
        fields(lobby = %code, player = %secret.player_id(), ids = ?ids)
    )]
    pub async fn play(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
        ids: &[u32],
    ) -> Result<LobbyAndHand, CommandFailure<PlayError>> {
        execute(self.transport.as_ref(), commands::play(code, secret, ids)).await
    }

    #[tracing::instrument(
        name = "skip",
        skip_all,
        fields(lobby = %code, player = %secret.player_id(), players = ?players)
    )]
    pub async fn skip(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
        players: &[PlayerId],
    ) -> Result<LobbyAndHand, CommandFailure<SkipError>> {
        execute(self.transport.as_ref(), commands::skip(code, secret, players)).await
    }

    #[tracing::instrument(
        name = "back",
        skip_all,
        fields(lobby = %code, player = %secret.player_id())
    )]
    pub async fn back(
        &self,
        code: &LobbyCode,
        secret: &PlayerSecret,
    ) -> Result<LobbyAndHand, CommandFailure<NoKnownError>> {
        execute(self.transport.as_ref(), commands::back(code, secret)).await
    }
}
