//! Builder for link objects.

use serde_json::{Map, Value};

use crate::builder::string_array;

/// Fluent builder for a link object.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    classes: Vec<String>,
    rels: Vec<String>,
    href: Option<String>,
    title: Option<String>,
    media_type: Option<String>,
}

impl LinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds a link relation.
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rels.push(rel.into());
        self
    }

    /// Sets the target URI.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the media type hint.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Emits the link object. The builder stays usable afterwards.
    ///
    /// Key order: `class`, `rel`, `href`, `title`, `type`.
    pub fn build(&self) -> Value {
        let mut object = Map::new();
        if !self.classes.is_empty() {
            object.insert("class".to_string(), string_array(&self.classes));
        }
        if !self.rels.is_empty() {
            object.insert("rel".to_string(), string_array(&self.rels));
        }
        if let Some(href) = &self.href {
            object.insert("href".to_string(), Value::String(href.clone()));
        }
        if let Some(title) = &self.title {
            object.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(media_type) = &self.media_type {
            object.insert("type".to_string(), Value::String(media_type.clone()));
        }
        Value::Object(object)
    }
}
