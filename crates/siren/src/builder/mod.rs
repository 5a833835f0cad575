//! Fluent construction of outgoing Siren documents.
//!
//! Builders accumulate state through chained setters and emit a
//! [`serde_json::Value`] from [`build`](EntityBuilder::build). Emission
//! follows a fixed key order per object kind, and keys that were never set
//! are omitted entirely, so the output is stable enough to compare against
//! literal documents.
//!
//! Attaching a child builder to a parent snapshots the child at that moment.
//! Changes made to the child afterwards do not show up in the parent.
//!
//! ```
//! use siren::builder::entity;
//!
//! let document = entity()
//!     .class("order")
//!     .property("status", "pending")
//!     .link_rel("self", "https://api.example.com/orders/42")
//!     .build();
//!
//! assert_eq!(document["class"][0], "order");
//! assert_eq!(document["links"][0]["href"], "https://api.example.com/orders/42");
//! ```

use serde_json::Value;

mod action;
mod entity;
mod link;

pub use action::{ActionBuilder, FieldBuilder};
pub use entity::EntityBuilder;
pub use link::LinkBuilder;

/// Starts a new entity document.
pub fn entity() -> EntityBuilder {
    EntityBuilder::new()
}

/// Starts a new link object.
pub fn link() -> LinkBuilder {
    LinkBuilder::new()
}

/// Starts a new action object.
pub fn action() -> ActionBuilder {
    ActionBuilder::new()
}

/// Starts a new field object.
pub fn field() -> FieldBuilder {
    FieldBuilder::new()
}

pub(crate) fn string_array(values: &[String]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|value| Value::String(value.clone()))
            .collect(),
    )
}
