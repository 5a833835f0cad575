//! Navigational links between entities.

use std::collections::BTreeSet;

use mime::Mime;
use url::Url;

/// A navigational link from an entity to a related resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Classes describing the nature of the linked resource.
    pub classes: BTreeSet<String>,
    /// Optional human-readable label.
    pub title: Option<String>,
    /// Link relations. Always contains at least one relation.
    pub rels: BTreeSet<String>,
    /// Absolute target of the link.
    pub href: Url,
    /// Optional media type hint for the linked resource.
    pub media_type: Option<Mime>,
}

impl Link {
    /// Returns true if this link carries the given relation.
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rels.contains(rel)
    }
}
