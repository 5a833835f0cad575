//! Builders for action objects and their field schemas.

use serde_json::{Map, Value};

use crate::builder::string_array;
use crate::model::FieldType;

/// Fluent builder for an action object.
#[derive(Debug, Clone, Default)]
pub struct ActionBuilder {
    classes: Vec<String>,
    name: Option<String>,
    title: Option<String>,
    method: Option<String>,
    href: Option<String>,
    media_type: Option<String>,
    fields: Vec<Value>,
}

impl ActionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the action name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the request target URI.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the media type of the request body the action expects.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Attaches a field, snapshotting the child builder now.
    pub fn field(mut self, field: &FieldBuilder) -> Self {
        self.fields.push(field.build());
        self
    }

    /// Attaches an already-built field object.
    pub fn field_value(mut self, field: Value) -> Self {
        self.fields.push(field);
        self
    }

    /// Attaches a field with just a name and type.
    pub fn field_named(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field(&FieldBuilder::new().name(name).field_type(field_type))
    }

    /// Emits the action object. The builder stays usable afterwards.
    ///
    /// Key order: `class`, `name`, `title`, `method`, `href`, `type`,
    /// `fields`.
    pub fn build(&self) -> Value {
        let mut object = Map::new();
        if !self.classes.is_empty() {
            object.insert("class".to_string(), string_array(&self.classes));
        }
        if let Some(name) = &self.name {
            object.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(title) = &self.title {
            object.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(method) = &self.method {
            object.insert("method".to_string(), Value::String(method.clone()));
        }
        if let Some(href) = &self.href {
            object.insert("href".to_string(), Value::String(href.clone()));
        }
        if let Some(media_type) = &self.media_type {
            object.insert("type".to_string(), Value::String(media_type.clone()));
        }
        if !self.fields.is_empty() {
            object.insert("fields".to_string(), Value::Array(self.fields.clone()));
        }
        Value::Object(object)
    }
}

/// Fluent builder for one field of an action's schema.
#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    classes: Vec<String>,
    name: Option<String>,
    field_type: Option<FieldType>,
    value: Option<String>,
    title: Option<String>,
    required: bool,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the input type.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Sets the suggested value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks the field required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Emits the field object. The builder stays usable afterwards.
    ///
    /// Key order: `class`, `name`, `type`, `value`, `title`, `required`.
    /// The `required` key only appears when set to true.
    pub fn build(&self) -> Value {
        let mut object = Map::new();
        if !self.classes.is_empty() {
            object.insert("class".to_string(), string_array(&self.classes));
        }
        if let Some(name) = &self.name {
            object.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(field_type) = self.field_type {
            object.insert(
                "type".to_string(),
                Value::String(field_type.token().to_string()),
            );
        }
        if let Some(value) = &self.value {
            object.insert("value".to_string(), Value::String(value.clone()));
        }
        if let Some(title) = &self.title {
            object.insert("title".to_string(), Value::String(title.clone()));
        }
        if self.required {
            object.insert("required".to_string(), Value::Bool(true));
        }
        Value::Object(object)
    }
}
