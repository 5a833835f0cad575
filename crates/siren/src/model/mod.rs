//! The Siren document model.
//!
//! An [`Entity`] is an immutable snapshot of a resource: its classes and
//! properties, embedded [`SubEntity`] children, navigational [`Link`]s, and
//! the [`Action`]s the server offers on it. Values of these types come out of
//! [`crate::reader::read`] or are assembled directly in tests; the builder
//! module produces wire documents without going through them.

pub mod action;
pub mod entity;
pub mod link;
pub mod property;

pub use action::{Action, Field, FieldType};
pub use entity::{Entity, SubEntity};
pub use link::Link;
pub use property::PropertyValue;
