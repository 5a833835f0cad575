//! Builder for entity documents and embedded sub-entities.

use serde_json::{Map, Value};

use crate::builder::{string_array, ActionBuilder, LinkBuilder};
use crate::model::PropertyValue;

/// Fluent builder for an entity document.
///
/// The same builder serves root documents and sub-entities: [`rel`],
/// [`href`], and [`media_type`] only matter when the built object is
/// attached inside a parent's `entities` array.
///
/// [`rel`]: EntityBuilder::rel
/// [`href`]: EntityBuilder::href
/// [`media_type`]: EntityBuilder::media_type
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    classes: Vec<String>,
    title: Option<String>,
    rels: Vec<String>,
    media_type: Option<String>,
    href: Option<String>,
    properties: Map<String, Value>,
    entities: Vec<Value>,
    links: Vec<Value>,
    actions: Vec<Value>,
}

impl EntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a relation to the parent. Sub-entity position only.
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rels.push(rel.into());
        self
    }

    /// Sets the target URI. Sub-entity position only, and makes the built
    /// object an embedded link.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the media type hint. Sub-entity position only.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Adds a scalar property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into().to_json());
        self
    }

    /// Attaches a sub-entity, snapshotting the child builder now.
    pub fn entity(mut self, child: &EntityBuilder) -> Self {
        self.entities.push(child.build());
        self
    }

    /// Attaches an already-built sub-entity object.
    pub fn entity_value(mut self, child: Value) -> Self {
        self.entities.push(child);
        self
    }

    /// Attaches a link, snapshotting the child builder now.
    pub fn link(mut self, link: &LinkBuilder) -> Self {
        self.links.push(link.build());
        self
    }

    /// Attaches an already-built link object.
    pub fn link_value(mut self, link: Value) -> Self {
        self.links.push(link);
        self
    }

    /// Attaches a link with a single relation.
    pub fn link_rel(self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.link(&LinkBuilder::new().rel(rel).href(href))
    }

    /// Attaches a link with several relations.
    pub fn link_rels<I, S>(self, rels: I, href: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut link = LinkBuilder::new();
        for rel in rels {
            link = link.rel(rel);
        }
        self.link(&link.href(href))
    }

    /// Attaches an action, snapshotting the child builder now.
    pub fn action(mut self, action: &ActionBuilder) -> Self {
        self.actions.push(action.build());
        self
    }

    /// Attaches an already-built action object.
    pub fn action_value(mut self, action: Value) -> Self {
        self.actions.push(action);
        self
    }

    /// Emits the document. The builder stays usable afterwards.
    ///
    /// Key order: `class`, `title`, `rel`, `type`, `href`, `properties`,
    /// `entities`, `links`, `actions`.
    pub fn build(&self) -> Value {
        let mut object = Map::new();
        if !self.classes.is_empty() {
            object.insert("class".to_string(), string_array(&self.classes));
        }
        if let Some(title) = &self.title {
            object.insert("title".to_string(), Value::String(title.clone()));
        }
        if !self.rels.is_empty() {
            object.insert("rel".to_string(), string_array(&self.rels));
        }
        if let Some(media_type) = &self.media_type {
            object.insert("type".to_string(), Value::String(media_type.clone()));
        }
        if let Some(href) = &self.href {
            object.insert("href".to_string(), Value::String(href.clone()));
        }
        if !self.properties.is_empty() {
            object.insert(
                "properties".to_string(),
                Value::Object(self.properties.clone()),
            );
        }
        if !self.entities.is_empty() {
            object.insert("entities".to_string(), Value::Array(self.entities.clone()));
        }
        if !self.links.is_empty() {
            object.insert("links".to_string(), Value::Array(self.links.clone()));
        }
        if !self.actions.is_empty() {
            object.insert("actions".to_string(), Value::Array(self.actions.clone()));
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::entity;
    use serde_json::json;

    #[test]
    fn test_empty_entity_builds_empty_object() {
        assert_eq!(entity().build().to_string(), "{}");
    }

    #[test]
    fn test_build_books_collection_document() {
        let document = entity()
            .class("books")
            .entity(
                &entity()
                    .class("book")
                    .rel("item")
                    .property("name", "Java")
                    .property("author", "Duke")
                    .link_rel("self", "https://api.example.com/books/1"),
            )
            .link_rel("self", "https://api.example.com/books")
            .build();

        assert_eq!(
            document.to_string(),
            r#"{"class":["books"],"entities":[{"class":["book"],"rel":["item"],"properties":{"name":"Java","author":"Duke"},"links":[{"rel":["self"],"href":"https://api.example.com/books/1"}]}],"links":[{"rel":["self"],"href":"https://api.example.com/books"}]}"#
        );
    }

    #[test]
    fn test_sub_entity_position_key_order() {
        let document = entity()
            .class("book")
            .title("A Book")
            .rel("item")
            .media_type("application/vnd.siren+json")
            .href("https://api.example.com/books/1")
            .property("isbn", "1-56619-909-3")
            .build();

        assert_eq!(
            document.to_string(),
            r#"{"class":["book"],"title":"A Book","rel":["item"],"type":"application/vnd.siren+json","href":"https://api.example.com/books/1","properties":{"isbn":"1-56619-909-3"}}"#
        );
    }

    #[test]
    fn test_property_kinds() {
        let document = entity()
            .property("name", "Java")
            .property("pages", 652)
            .property("rating", 4.5)
            .property("in_print", true)
            .build();

        assert_eq!(
            document.to_string(),
            r#"{"properties":{"name":"Java","pages":652,"rating":4.5,"in_print":true}}"#
        );
    }

    #[test]
    fn test_link_rels_emits_all_relations() {
        let document = entity()
            .link_rels(["self", "canonical"], "https://api.example.com/books")
            .build();

        assert_eq!(
            document["links"][0],
            json!({"rel": ["self", "canonical"], "href": "https://api.example.com/books"})
        );
    }

    #[test]
    fn test_attached_child_is_a_snapshot() {
        let child = entity().class("book");
        let parent = entity().entity(&child);
        let child = child.class("paperback");

        // The parent kept the state the child had at attach time.
        assert_eq!(parent.build()["entities"][0]["class"], json!(["book"]));
        assert_eq!(child.build()["class"], json!(["book", "paperback"]));
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = entity().class("book").title("A Book");
        assert_eq!(builder.build(), builder.build());

        let extended = builder.class("hardcover");
        assert_eq!(
            extended.build()["class"],
            json!(["book", "hardcover"])
        );
    }

    #[test]
    fn test_entity_value_attaches_raw_object() {
        let document = entity()
            .entity_value(json!({"rel": ["item"], "href": "https://api.example.com/books/2"}))
            .build();

        assert_eq!(
            document["entities"][0]["href"],
            "https://api.example.com/books/2"
        );
    }
}
