// Generic request executor: one transport call, one classified result.

use crate::domain::{CommandFailure, RawResponse, Transport, UnknownFailure};
use crate::interface_adapters::protocol::ErrorBody;
use crate::use_cases::request::{Lookup, Request, ResponseDecoder};
use serde::Deserialize;
use serde_json::Value;

/// Sends `request` once and classifies whatever comes back.
///
/// Never retries. A transport failure, a body the success decoder rejects and
/// a non-2xx the request did not anticipate all end up as
/// `CommandFailure::Unknown`.
pub async fn execute<T, E>(
    transport: &dyn Transport,
    request: Request<T, E>,
) -> Result<T, CommandFailure<E>> {
    let (outgoing, decoder) = request.into_parts();
    tracing::debug!(
        method = ?outgoing.method,
        segments = ?outgoing.segments,
        "dispatching request"
    );

    let response = match transport.send(outgoing).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(error = %error, "request failed before a response arrived");
            return Err(CommandFailure::Unknown(UnknownFailure::Transport {
                message: error.message,
            }));
        }
    };

    classify(decoder, response)
}

/// Synchronous half of `execute`: maps a received response onto the three-way result.
pub fn classify<T, E>(
    decoder: ResponseDecoder<T, E>,
    response: RawResponse,
) -> Result<T, CommandFailure<E>> {
    let success = response.is_success();
    let RawResponse { status, body } = response;

    if success {
        return (decoder.decode)(&body).map_err(|err| {
            tracing::warn!(status, error = %err, "success body did not decode");
            CommandFailure::Unknown(UnknownFailure::MalformedBody {
                status,
                body,
                reason: err.to_string(),
            })
        });
    }

    // Both an unparseable body and a body without a tag are unrecognised.
    let Ok(json) = serde_json::from_str::<Value>(&body) else {
        tracing::warn!(status, "error body is not json");
        return Err(CommandFailure::Unknown(UnknownFailure::UnrecognisedError {
            status,
            body,
        }));
    };
    let Ok(ErrorBody { error: tag }) = ErrorBody::deserialize(&json) else {
        tracing::warn!(status, "error body has no tag");
        return Err(CommandFailure::Unknown(UnknownFailure::UnrecognisedError {
            status,
            body,
        }));
    };

    match decoder.known_errors.lookup(status, &tag, &json) {
        Lookup::Matched(error) => {
            tracing::debug!(status, tag = %tag, "known error");
            Err(CommandFailure::Known(error))
        }
        Lookup::MissingFields => {
            tracing::warn!(status, tag = %tag, "known error body is missing fields");
            Err(CommandFailure::Unknown(UnknownFailure::MalformedError {
                status,
                tag,
                body,
            }))
        }
        Lookup::NoMatch => {
            tracing::warn!(status, tag = %tag, "unrecognised error");
            Err(CommandFailure::Unknown(UnknownFailure::UnrecognisedError {
                status,
                body,
            }))
        }
    }
}
