//! Reading wire documents into the document model.
//!
//! [`read`] walks a parsed JSON document and produces an immutable
//! [`Entity`], applying the format's validation and defaulting rules:
//!
//! - `link` objects must carry a non-empty `rel` array and a parsable
//!   `href`; `action` objects must carry `name` and a parsable `href`;
//!   `field` objects must carry `name`.
//! - `method` defaults to `GET`, field `type` defaults to `text` (also for
//!   unrecognized tokens), `required` defaults to false.
//! - Property values must be strings, numbers, or booleans. Integral
//!   numbers decode to `i64`, fractional ones to `f64`.
//! - Unknown keys are ignored. Duplicate `class` entries collapse.
//!
//! Reading fails fast: the first violation aborts with a [`ReadError`] and
//! no partial entity escapes.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use mime::Mime;
use serde_json::{Map, Value};
use url::Url;

use crate::error::ReadError;
use crate::model::{Action, Entity, Field, FieldType, Link, PropertyValue, SubEntity};
use crate::util::media;

/// Reads a Siren document into an [`Entity`].
pub fn read(document: &Value) -> Result<Entity, ReadError> {
    let object = as_object(document, "entity")?;
    read_entity(object, "entity")
}

// ============================================================================
// Object readers
// ============================================================================

fn read_entity(object: &Map<String, Value>, context: &'static str) -> Result<Entity, ReadError> {
    let mut entity = Entity {
        classes: string_set(object, "class", context)?,
        title: opt_string(object, "title", context)?,
        properties: read_properties(object, context)?,
        ..Entity::default()
    };
    for value in opt_array(object, "entities", context)? {
        entity.entities.push(read_sub_entity(value)?);
    }
    for value in opt_array(object, "links", context)? {
        entity.links.push(read_link(value)?);
    }
    for value in opt_array(object, "actions", context)? {
        entity.actions.push(read_action(value)?);
    }
    Ok(entity)
}

fn read_sub_entity(value: &Value) -> Result<SubEntity, ReadError> {
    let object = as_object(value, "sub-entity")?;
    // An absent href key means an embedded representation. A present key
    // must parse, even though the field itself is optional.
    let href = if object.contains_key("href") {
        Some(read_href(object, "sub-entity")?)
    } else {
        None
    };
    Ok(SubEntity {
        rels: string_set(object, "rel", "sub-entity")?,
        href,
        media_type: read_media_type(object, "sub-entity")?,
        entity: read_entity(object, "sub-entity")?,
    })
}

fn read_link(value: &Value) -> Result<Link, ReadError> {
    let object = as_object(value, "link")?;
    let rels = string_set(object, "rel", "link")?;
    if rels.is_empty() {
        return Err(ReadError::EmptyRels { context: "link" });
    }
    Ok(Link {
        classes: string_set(object, "class", "link")?,
        title: opt_string(object, "title", "link")?,
        rels,
        href: read_href(object, "link")?,
        media_type: read_media_type(object, "link")?,
    })
}

fn read_action(value: &Value) -> Result<Action, ReadError> {
    let object = as_object(value, "action")?;
    let mut action = Action {
        classes: string_set(object, "class", "action")?,
        title: opt_string(object, "title", "action")?,
        name: req_string(object, "name", "action")?,
        method: opt_string(object, "method", "action")?.unwrap_or_else(|| "GET".to_string()),
        href: read_href(object, "action")?,
        media_type: read_media_type(object, "action")?,
        fields: Vec::new(),
    };
    for value in opt_array(object, "fields", "action")? {
        action.fields.push(read_field(value)?);
    }
    Ok(action)
}

fn read_field(value: &Value) -> Result<Field, ReadError> {
    let object = as_object(value, "field")?;
    let field_type = match opt_string(object, "type", "field")? {
        Some(token) => FieldType::from_token(&token).unwrap_or_default(),
        None => FieldType::default(),
    };
    Ok(Field {
        classes: string_set(object, "class", "field")?,
        title: opt_string(object, "title", "field")?,
        name: req_string(object, "name", "field")?,
        field_type,
        value: opt_string(object, "value", "field")?,
        required: opt_bool(object, "required", "field")?.unwrap_or(false),
    })
}

fn read_properties(
    object: &Map<String, Value>,
    context: &'static str,
) -> Result<IndexMap<String, PropertyValue>, ReadError> {
    match object.get("properties") {
        None => Ok(IndexMap::new()),
        Some(Value::Object(entries)) => {
            let mut properties = IndexMap::with_capacity(entries.len());
            for (name, value) in entries {
                match PropertyValue::from_json(value) {
                    Some(property) => {
                        properties.insert(name.clone(), property);
                    }
                    None => return Err(ReadError::UnsupportedProperty { name: name.clone() }),
                }
            }
            Ok(properties)
        }
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key: "properties",
            expected: "an object",
        }),
    }
}

fn read_href(object: &Map<String, Value>, context: &'static str) -> Result<Url, ReadError> {
    let href = req_string(object, "href", context)?;
    Url::parse(&href).map_err(|source| ReadError::InvalidHref { context, source })
}

fn read_media_type(
    object: &Map<String, Value>,
    context: &'static str,
) -> Result<Option<Mime>, ReadError> {
    match opt_string(object, "type", context)? {
        None => Ok(None),
        Some(value) => match media::parse_media_type(&value) {
            Some(media_type) => Ok(Some(media_type)),
            None => Err(ReadError::InvalidMediaType { context, value }),
        },
    }
}

// ============================================================================
// Key access
// ============================================================================

fn as_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Map<String, Value>, ReadError> {
    value
        .as_object()
        .ok_or(ReadError::NotAnObject { context })
}

fn opt_string(
    object: &Map<String, Value>,
    key: &'static str,
    context: &'static str,
) -> Result<Option<String>, ReadError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key,
            expected: "a string",
        }),
    }
}

fn req_string(
    object: &Map<String, Value>,
    key: &'static str,
    context: &'static str,
) -> Result<String, ReadError> {
    match object.get(key) {
        None => Err(ReadError::MissingKey { context, key }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key,
            expected: "a string",
        }),
    }
}

fn opt_bool(
    object: &Map<String, Value>,
    key: &'static str,
    context: &'static str,
) -> Result<Option<bool>, ReadError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key,
            expected: "a boolean",
        }),
    }
}

fn string_set(
    object: &Map<String, Value>,
    key: &'static str,
    context: &'static str,
) -> Result<BTreeSet<String>, ReadError> {
    match object.get(key) {
        None => Ok(BTreeSet::new()),
        Some(Value::Array(items)) => {
            let mut set = BTreeSet::new();
            for item in items {
                match item {
                    Value::String(text) => {
                        set.insert(text.clone());
                    }
                    _ => {
                        return Err(ReadError::UnexpectedKind {
                            context,
                            key,
                            expected: "an array of strings",
                        })
                    }
                }
            }
            Ok(set)
        }
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key,
            expected: "an array of strings",
        }),
    }
}

fn opt_array<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
    context: &'static str,
) -> Result<&'a [Value], ReadError> {
    match object.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ReadError::UnexpectedKind {
            context,
            key,
            expected: "an array",
        }),
    }
}
