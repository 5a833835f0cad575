//! Reads a Siren document and prints its structure.
//!
//! Pass a path to a JSON file, or run without arguments to use a built-in
//! sample:
//!
//! ```sh
//! cargo run --example read_document -- document.json
//! ```

use std::env;
use std::fs;

use siren::{Entity, SubEntity};

const SAMPLE: &str = r#"{
  "class": ["books", "collection"],
  "title": "All books",
  "properties": {"total": 2},
  "entities": [
    {
      "class": ["book"],
      "rel": ["item"],
      "properties": {"name": "Java", "author": "Duke"},
      "links": [{"rel": ["self"], "href": "https://api.example.com/books/1"}]
    },
    {
      "class": ["book"],
      "rel": ["item"],
      "href": "https://api.example.com/books/2",
      "type": "application/vnd.siren+json"
    }
  ],
  "links": [{"rel": ["self"], "href": "https://api.example.com/books"}],
  "actions": [
    {
      "name": "add-book",
      "title": "Add a book",
      "method": "POST",
      "href": "https://api.example.com/books",
      "type": "application/json",
      "fields": [
        {"name": "name", "type": "text", "required": true},
        {"name": "author", "type": "text", "required": true},
        {"name": "published", "type": "datetime-local"}
      ]
    }
  ]
}"#;

fn main() {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).expect("could not read document file"),
        None => SAMPLE.to_string(),
    };

    let document: serde_json::Value = serde_json::from_str(&text).expect("document is not JSON");
    let entity = siren::read(&document).expect("document is not a valid Siren entity");

    print_entity(&entity, 0);
}

fn print_entity(entity: &Entity, indent: usize) {
    let pad = "  ".repeat(indent);
    println!("{pad}entity {:?} title={:?}", entity.classes, entity.title);
    for (name, value) in &entity.properties {
        println!("{pad}  property {name} = {value:?}");
    }
    for link in &entity.links {
        println!("{pad}  link {:?} -> {}", link.rels, link.href);
    }
    for action in &entity.actions {
        println!("{pad}  action {} {} {}", action.name, action.method, action.href);
        for field in &action.fields {
            let required = if field.required { " required" } else { "" };
            println!("{pad}    field {} ({}){}", field.name, field.field_type, required);
        }
    }
    for child in &entity.entities {
        print_sub_entity(child, indent + 1);
    }
}

fn print_sub_entity(sub_entity: &SubEntity, indent: usize) {
    let pad = "  ".repeat(indent);
    match &sub_entity.href {
        Some(href) => println!("{pad}embedded link {:?} -> {}", sub_entity.rels, href),
        None => {
            println!("{pad}embedded {:?}", sub_entity.rels);
            print_entity(&sub_entity.entity, indent + 1);
        }
    }
}
