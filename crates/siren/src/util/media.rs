//! Media type helpers shared by the reader and the client.

use mime::Mime;

/// Parses a media type string, returning `None` when malformed.
pub fn parse_media_type(value: &str) -> Option<Mime> {
    value.parse::<Mime>().ok()
}

/// Formats a media type back to its wire string.
pub fn format_media_type(media_type: &Mime) -> String {
    media_type.to_string()
}

/// Returns true if a request body of the given media type can be encoded as
/// JSON.
///
/// Compatible types are `application/json` itself and any `application/*`
/// type with a `+json` structured-syntax suffix, such as
/// `application/vnd.siren+json`.
pub fn is_json_compatible(media_type: &Mime) -> bool {
    media_type.type_() == mime::APPLICATION
        && (media_type.subtype() == mime::JSON || media_type.suffix() == Some(mime::JSON))
}
