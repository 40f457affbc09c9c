use std::fmt;

// Recoverable failures, one closed set per command. Callers match on these.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewPlayerError {
    NameInUse,
    LobbyNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDeckError {
    CardcastTimeout,
    DeckNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewGameError {
    GameInProgress,
    NotEnoughPlayers { required: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooseError {
    NotCzar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    NotInRound,
    AlreadyPlayed,
    AlreadyJudging,
    WrongNumberOfCards { got: u32, expected: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipError {
    NotEnoughPlayersToSkip,
    PlayersMustBeSkippable,
}

/// Error vocabulary of commands the server never rejects with a known tag.
///
/// Uninhabited, so `CommandFailure<NoKnownError>` can only ever be `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoKnownError {}

impl fmt::Display for NewPlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewPlayerError::NameInUse => write!(f, "name is already in use"),
            NewPlayerError::LobbyNotFound => write!(f, "lobby not found"),
        }
    }
}

impl fmt::Display for AddDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddDeckError::CardcastTimeout => write!(f, "deck source timed out"),
            AddDeckError::DeckNotFound => write!(f, "deck not found"),
        }
    }
}

impl fmt::Display for NewGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewGameError::GameInProgress => write!(f, "a game is already in progress"),
            NewGameError::NotEnoughPlayers { required } => {
                write!(f, "not enough players: {required} required")
            }
        }
    }
}

impl fmt::Display for ChooseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChooseError::NotCzar => write!(f, "only the czar can choose a winner"),
        }
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::NotInRound => write!(f, "player is not in the current round"),
            PlayError::AlreadyPlayed => write!(f, "cards already played this round"),
            PlayError::AlreadyJudging => write!(f, "round is already being judged"),
            PlayError::WrongNumberOfCards { got, expected } => {
                write!(f, "wrong number of cards: got {got}, expected {expected}")
            }
        }
    }
}

impl fmt::Display for SkipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipError::NotEnoughPlayersToSkip => write!(f, "not enough players to skip"),
            SkipError::PlayersMustBeSkippable => write!(f, "players must be skippable"),
        }
    }
}

impl fmt::Display for NoKnownError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NewPlayerError {}
impl std::error::Error for AddDeckError {}
impl std::error::Error for NewGameError {}
impl std::error::Error for ChooseError {}
impl std::error::Error for PlayError {}
impl std::error::Error for SkipError {}
impl std::error::Error for NoKnownError {}

/// Anything that went wrong that no command anticipated.
///
/// Carries enough of the response to log, but no meaning a caller should
/// branch on beyond "show a generic failure".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownFailure {
    // No response was received.
    Transport { message: String },
    // 2xx whose body the success decoder rejected.
    MalformedBody {
        status: u16,
        body: String,
        reason: String,
    },
    // Non-2xx with no matching (status, tag) entry, or no readable tag.
    UnrecognisedError { status: u16, body: String },
    // Matching (status, tag) entry whose structured fields were missing.
    MalformedError {
        status: u16,
        tag: String,
        body: String,
    },
}

impl fmt::Display for UnknownFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownFailure::Transport { message } => write!(f, "transport error: {message}"),
            UnknownFailure::MalformedBody {
                status, reason, ..
            } => write!(f, "malformed response body (status {status}): {reason}"),
            UnknownFailure::UnrecognisedError { status, body } => {
                write!(f, "unrecognised error response {status}: {body}")
            }
            UnknownFailure::MalformedError { status, tag, body } => {
                write!(f, "malformed {tag} error (status {status}): {body}")
            }
        }
    }
}

impl std::error::Error for UnknownFailure {}

/// Failure half of a command result: an anticipated domain error or anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure<E> {
    Known(E),
    Unknown(UnknownFailure),
}

impl<E> CommandFailure<E> {
    pub fn known(&self) -> Option<&E> {
        match self {
            CommandFailure::Known(error) => Some(error),
            CommandFailure::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CommandFailure::Unknown(_))
    }
}

impl<E: fmt::Display> fmt::Display for CommandFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFailure::Known(error) => write!(f, "{error}"),
            CommandFailure::Unknown(failure) => write!(f, "{failure}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for CommandFailure<E> {}
