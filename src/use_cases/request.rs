// Request descriptors: everything one call needs, built before any I/O happens.

use crate::domain::{Method, OutgoingRequest};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

/// Turns a 2xx body into the command's success value.
pub type SuccessDecoder<T> = fn(&str) -> Result<T, serde_json::Error>;

/// Reads the structured fields of a known error body, `None` when they are missing.
pub type FieldsDecoder<E> = fn(&Value) -> Option<E>;

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(body)
}

// For commands whose success carries no payload: an empty body or any JSON value.
pub fn ignore_body(body: &str) -> Result<(), serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<IgnoredAny>(body).map(|_| ())
}

/// Deserializes an error body into a payload struct for a structured variant.
pub fn fields<P: DeserializeOwned>(body: &Value) -> Option<P> {
    P::deserialize(body).ok()
}

enum ErrorDecoder<E> {
    Fixed(E),
    Fields(FieldsDecoder<E>),
}

struct KnownError<E> {
    status: u16,
    tag: &'static str,
    decoder: ErrorDecoder<E>,
}

// Outcome of looking a non-2xx response up in an error table.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<E> {
    Matched(E),
    MissingFields,
    NoMatch,
}

/// Ordered `(status, tag)` table of the errors one command anticipates.
///
/// Entries are tried in declaration order and the first exact match wins.
/// There is no status-only or tag-only matching: a pair the table does not
/// name is never classified as known.
pub struct ErrorTable<E> {
    entries: Vec<KnownError<E>>,
}

impl<E> ErrorTable<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // Entry for a variant that carries fields decoded from the error body.
    pub fn on_fields(self, status: u16, tag: &'static str, decode: FieldsDecoder<E>) -> Self {
        self.push(status, tag, ErrorDecoder::Fields(decode))
    }

    // Entry for a payload-free variant.
    pub fn on(self, status: u16, tag: &'static str, error: E) -> Self {
        self.push(status, tag, ErrorDecoder::Fixed(error))
    }

    fn push(mut self, status: u16, tag: &'static str, decoder: ErrorDecoder<E>) -> Self {
        debug_assert!(
            !self
                .entries
                .iter()
                .any(|entry| entry.status == status && entry.tag == tag),
            "duplicate known error entry ({status}, {tag})"
        );
        self.entries.push(KnownError {
            status,
            tag,
            decoder,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.entries.iter().map(|entry| (entry.status, entry.tag))
    }

    /// Consumes the table, resolving `(status, tag)` against the error body.
    pub fn lookup(self, status: u16, tag: &str, body: &Value) -> Lookup<E> {
        let Some(entry) = self
            .entries
            .into_iter()
            .find(|entry| entry.status == status && entry.tag == tag)
        else {
            return Lookup::NoMatch;
        };

        match entry.decoder {
            ErrorDecoder::Fixed(error) => Lookup::Matched(error),
            ErrorDecoder::Fields(decode) => match decode(body) {
                Some(error) => Lookup::Matched(error),
                None => Lookup::MissingFields,
            },
        }
    }
}

impl<E> Default for ErrorTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// One call, fully described: where it goes, what it sends, and how to read
/// every response it may get back.
///
/// Consumed by value on dispatch, so a descriptor is never sent twice.
pub struct Request<T, E> {
    method: Method,
    segments: Vec<String>,
    body: Option<Value>,
    known_errors: ErrorTable<E>,
    decode: SuccessDecoder<T>,
}

// The half of a request kept back while the transport call is in flight.
pub struct ResponseDecoder<T, E> {
    pub(crate) known_errors: ErrorTable<E>,
    pub(crate) decode: SuccessDecoder<T>,
}

impl<T, E> Request<T, E> {
    /// `segments` are the unencoded path segments, e.g. `["lobbies", code]`.
    pub fn new<S: Into<String>>(
        method: Method,
        segments: impl IntoIterator<Item = S>,
        decode: SuccessDecoder<T>,
    ) -> Self {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
            known_errors: ErrorTable::new(),
            decode,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_known_errors(mut self, known_errors: ErrorTable<E>) -> Self {
        self.known_errors = known_errors;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn known_errors(&self) -> &ErrorTable<E> {
        &self.known_errors
    }

    pub fn into_parts(self) -> (OutgoingRequest, ResponseDecoder<T, E>) {
        (
            OutgoingRequest {
                method: self.method,
                segments: self.segments,
                body: self.body,
            },
            ResponseDecoder {
                known_errors: self.known_errors,
                decode: self.decode,
            },
        )
    }
}
