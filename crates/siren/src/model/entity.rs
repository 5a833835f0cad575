//! Entities and embedded sub-entities.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use mime::Mime;
use url::Url;

use crate::model::action::Action;
use crate::model::link::Link;
use crate::model::property::PropertyValue;

/// A Siren entity: the resource snapshot a server returns, together with the
/// links and actions available from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    /// Classes describing the nature of the entity.
    pub classes: BTreeSet<String>,
    /// Optional human-readable label.
    pub title: Option<String>,
    /// Scalar state of the entity, in wire order.
    pub properties: IndexMap<String, PropertyValue>,
    /// Embedded sub-entities, in wire order.
    pub entities: Vec<SubEntity>,
    /// Navigational links, in wire order.
    pub links: Vec<Link>,
    /// Available operations, in wire order.
    pub actions: Vec<Action>,
}

impl Entity {
    /// Returns the first link carrying the given relation.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.has_rel(rel))
    }

    /// Returns the action with the given name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Returns the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// An entity embedded within a parent, plus its position in the parent.
///
/// A sub-entity with an `href` is an embedded link: a pointer whose full
/// representation must be fetched separately. One without an `href` is an
/// embedded representation carrying its state inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubEntity {
    /// How the sub-entity relates to its parent.
    pub rels: BTreeSet<String>,
    /// Target of an embedded link. Absent for embedded representations.
    pub href: Option<Url>,
    /// Optional media type hint for an embedded link.
    pub media_type: Option<Mime>,
    /// The embedded entity itself.
    pub entity: Entity,
}

impl SubEntity {
    /// Returns true if this sub-entity is an embedded link rather than an
    /// embedded representation.
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}
