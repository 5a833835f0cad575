//! Error types for reading documents and performing actions.

use mime::Mime;
use thiserror::Error;

/// Error while reading a wire document into the document model.
///
/// Reading fails fast: the first structural violation is returned and no
/// partial entity is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    #[error("{context}: missing required key `{key}`")]
    MissingKey {
        context: &'static str,
        key: &'static str,
    },

    #[error("{context}: key `{key}` must be {expected}")]
    UnexpectedKind {
        context: &'static str,
        key: &'static str,
        expected: &'static str,
    },

    #[error("{context}: expected a JSON object")]
    NotAnObject { context: &'static str },

    #[error("{context}: rel must contain at least one relation")]
    EmptyRels { context: &'static str },

    #[error("{context}: invalid href: {source}")]
    InvalidHref {
        context: &'static str,
        source: url::ParseError,
    },

    #[error("{context}: invalid media type `{value}`")]
    InvalidMediaType {
        context: &'static str,
        value: String,
    },

    #[error("property `{name}` must be a string, number, or boolean")]
    UnsupportedProperty { name: String },
}

/// Error while navigating an entity or performing one of its actions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("no action named `{name}` in entity")]
    ActionNotFound { name: String },

    #[error("no link with rel `{rel}` in entity")]
    LinkNotFound { rel: String },

    #[error("action type `{media_type}` is not compatible with application/json")]
    UnsupportedActionType { media_type: Mime },

    #[error("required field `{name}` not provided")]
    MissingRequiredField { name: String },

    #[error("action failed with HTTP status {status}")]
    ActionFailed { status: u16 },

    /// Failure inside the transport collaborator, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the JSON the exchange promised.
    #[error("could not parse response body: {0}")]
    BodyParse(String),

    #[error(transparent)]
    Read(#[from] ReadError),
}
