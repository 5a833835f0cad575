//! Implementation of the [Siren] hypermedia format.
//!
//! Siren documents couple a resource's data ("properties"), nested
//! resources ("sub-entities"), navigational links, and state transitions
//! ("actions") in one JSON object. This crate covers the whole exchange:
//!
//! - [`builder`]: fluent construction of outgoing documents with a stable
//!   key order.
//! - [`reader`]: validated reading of incoming documents into the
//!   immutable [document model](model).
//! - [`client`]: a blocking client that follows links and performs
//!   actions, discovering method, target, and payload shape from the
//!   document at runtime.
//!
//! [Siren]: https://github.com/kevinswiber/siren
//!
//! # Building and reading
//!
//! ```
//! use siren::{action, entity, field};
//!
//! let document = entity()
//!     .class("book")
//!     .property("name", "Java")
//!     .link_rel("self", "https://api.example.com/books/1")
//!     .action(
//!         &action()
//!             .name("modify")
//!             .method("PUT")
//!             .href("https://api.example.com/books/1")
//!             .field(&field().name("test").required(true)),
//!     )
//!     .build();
//!
//! let entity = siren::read(&document)?;
//! assert_eq!(entity.action("modify").unwrap().method, "PUT");
//! # Ok::<(), siren::ReadError>(())
//! ```
//!
//! # Talking to a server
//!
//! ```no_run
//! use serde_json::json;
//! use siren::SirenClient;
//! use url::Url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SirenClient::new();
//! let books = client.retrieve_entity(&Url::parse("https://api.example.com/books")?)?;
//! let first = client.follow_link(&books, "first")?;
//!
//! let mut values = siren::FieldValues::new();
//! values.insert("test".to_string(), json!("Y"));
//! client.perform_action(&first, "modify", Some(&values))?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod model;
pub mod reader;
pub mod util;

pub use builder::{
    action, entity, field, link, ActionBuilder, EntityBuilder, FieldBuilder, LinkBuilder,
};
pub use client::{
    ActionResponse, FieldValues, HttpTransport, SirenClient, Transport, TransportRequest,
};
pub use error::{ClientError, ReadError};
pub use model::{Action, Entity, Field, FieldType, Link, PropertyValue, SubEntity};
pub use reader::read;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The registered Siren media type.
pub const MEDIA_TYPE: &str = "application/vnd.siren+json";
