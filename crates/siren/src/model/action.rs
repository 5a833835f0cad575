//! Actions and their field schemas.

use std::collections::BTreeSet;
use std::fmt;

use mime::Mime;
use url::Url;

/// Input type of an action field.
///
/// The tokens mirror the HTML input type vocabulary. Every variant has a
/// lower-case wire token; `DatetimeLocal` is the only one whose token is not
/// simply its name (`datetime-local`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Number,
    Hidden,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Datetime,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 19] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Hidden,
        FieldType::Search,
        FieldType::Tel,
        FieldType::Url,
        FieldType::Email,
        FieldType::Password,
        FieldType::Datetime,
        FieldType::Date,
        FieldType::Month,
        FieldType::Week,
        FieldType::Time,
        FieldType::DatetimeLocal,
        FieldType::Range,
        FieldType::Color,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::File,
    ];

    /// Returns the wire token for this field type.
    pub fn token(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Hidden => "hidden",
            FieldType::Search => "search",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Datetime => "datetime",
            FieldType::Date => "date",
            FieldType::Month => "month",
            FieldType::Week => "week",
            FieldType::Time => "time",
            FieldType::DatetimeLocal => "datetime-local",
            FieldType::Range => "range",
            FieldType::Color => "color",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::File => "file",
        }
    }

    /// Looks up a field type by its wire token, ignoring ASCII case.
    ///
    /// Returns `None` for tokens outside the closed vocabulary.
    pub fn from_token(token: &str) -> Option<FieldType> {
        match token.to_ascii_lowercase().as_str() {
            "text" => Some(FieldType::Text),
            "number" => Some(FieldType::Number),
            "hidden" => Some(FieldType::Hidden),
            "search" => Some(FieldType::Search),
            "tel" => Some(FieldType::Tel),
            "url" => Some(FieldType::Url),
            "email" => Some(FieldType::Email),
            "password" => Some(FieldType::Password),
            "datetime" => Some(FieldType::Datetime),
            "date" => Some(FieldType::Date),
            "month" => Some(FieldType::Month),
            "week" => Some(FieldType::Week),
            "time" => Some(FieldType::Time),
            "datetime-local" => Some(FieldType::DatetimeLocal),
            "range" => Some(FieldType::Range),
            "color" => Some(FieldType::Color),
            "checkbox" => Some(FieldType::Checkbox),
            "radio" => Some(FieldType::Radio),
            "file" => Some(FieldType::File),
            _ => None,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single input in an action's field schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Classes describing the field.
    pub classes: BTreeSet<String>,
    /// Optional human-readable label.
    pub title: Option<String>,
    /// Field name, unique within the action.
    pub name: String,
    /// Input type of the field.
    pub field_type: FieldType,
    /// Optional pre-assigned value.
    pub value: Option<String>,
    /// Whether a value must be supplied when the action is performed.
    pub required: bool,
}

/// An operation the server offers on an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Classes describing the action.
    pub classes: BTreeSet<String>,
    /// Optional human-readable label.
    pub title: Option<String>,
    /// Action name, unique within the entity.
    pub name: String,
    /// HTTP method, upper-case by convention.
    pub method: String,
    /// Absolute request target.
    pub href: Url,
    /// Media type of the request body the action expects.
    pub media_type: Option<Mime>,
    /// Declared inputs, in schema order.
    pub fields: Vec<Field>,
}

impl Action {
    /// Returns the field with the given name, if declared.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
