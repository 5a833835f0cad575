//! Blocking client that navigates entities and performs their actions.
//!
//! [`SirenClient`] drives requests whose method, target, and payload shape
//! are discovered at runtime from a read entity rather than known
//! statically. Performing an action runs through a fixed sequence: resolve
//! the action by name, check its declared media type against JSON, assemble
//! the payload from the field schema and the caller's values, dispatch, and
//! treat any non-2xx status as failure.
//!
//! The client talks to the network through the [`Transport`] trait, a single
//! "send request, get status and body" primitive. [`HttpTransport`] is the
//! reqwest-backed implementation; tests substitute their own.

use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::ClientError;
use crate::model::{Action, Entity};
use crate::reader;
use crate::util::media;

/// Caller-supplied values for an action's fields, keyed by field name.
pub type FieldValues = Map<String, Value>;

/// One request handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method, as declared by the action.
    pub method: String,
    /// Absolute request target.
    pub href: Url,
    /// Value for the Accept header.
    pub accept: &'static str,
    /// JSON body. Present only when the performed action declares fields.
    pub body: Option<Value>,
}

/// Status and raw body of one transport exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ActionResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Result<Value, ClientError> {
        serde_json::from_slice(&self.body).map_err(|err| ClientError::BodyParse(err.to_string()))
    }
}

/// The one blocking HTTP primitive the client needs.
pub trait Transport {
    fn send(&self, request: &TransportRequest) -> Result<ActionResponse, ClientError>;
}

/// [`Transport`] backed by a blocking reqwest client.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-configured reqwest client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &TransportRequest) -> Result<ActionResponse, ClientError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            ClientError::Transport(format!("invalid HTTP method `{}`", request.method))
        })?;
        let mut outgoing = self
            .client
            .request(method, request.href.clone())
            .header(reqwest::header::ACCEPT, request.accept);
        if let Some(body) = &request.body {
            outgoing = outgoing.json(body);
        }
        let response = outgoing
            .send()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| ClientError::Transport(err.to_string()))?
            .to_vec();
        Ok(ActionResponse { status, body })
    }
}

/// Blocking Siren client.
///
/// Generic over its [`Transport`] so exchanges can be faked in tests. The
/// default transport speaks HTTP through reqwest.
#[derive(Debug, Default)]
pub struct SirenClient<T = HttpTransport> {
    transport: T,
}

impl SirenClient<HttpTransport> {
    /// Creates a client with the default HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> SirenClient<T> {
    /// Creates a client on top of a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches the entity at `uri` and reads it into the document model.
    pub fn retrieve_entity(&self, uri: &Url) -> Result<Entity, ClientError> {
        debug!(%uri, "retrieving entity");
        let request = TransportRequest {
            method: "GET".to_string(),
            href: uri.clone(),
            accept: "application/json",
            body: None,
        };
        let response = self.transport.send(&request)?;
        if !response.is_success() {
            warn!(%uri, status = response.status, "entity retrieval failed");
            return Err(ClientError::ActionFailed {
                status: response.status,
            });
        }
        let document = response.json()?;
        Ok(reader::read(&document)?)
    }

    /// Follows the first link of `entity` carrying `rel`.
    pub fn follow_link(&self, entity: &Entity, rel: &str) -> Result<Entity, ClientError> {
        match entity.link(rel) {
            Some(link) => self.retrieve_entity(&link.href),
            None => Err(ClientError::LinkNotFound {
                rel: rel.to_string(),
            }),
        }
    }

    /// Performs the named action of `entity`.
    pub fn perform_action(
        &self,
        entity: &Entity,
        name: &str,
        values: Option<&FieldValues>,
    ) -> Result<ActionResponse, ClientError> {
        match entity.action(name) {
            Some(action) => self.perform(action, values),
            None => Err(ClientError::ActionNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Performs an action directly.
    ///
    /// The action's declared media type, if any, must be JSON-compatible.
    /// The body is assembled from the field schema in declared order: a
    /// supplied value is copied verbatim, a missing optional field is
    /// skipped, a missing required field aborts before anything is sent.
    /// Values for names the action does not declare are dropped. Actions
    /// without fields send no body at all.
    pub fn perform(
        &self,
        action: &Action,
        values: Option<&FieldValues>,
    ) -> Result<ActionResponse, ClientError> {
        if let Some(media_type) = &action.media_type {
            if !media::is_json_compatible(media_type) {
                return Err(ClientError::UnsupportedActionType {
                    media_type: media_type.clone(),
                });
            }
        }
        let body = if action.fields.is_empty() {
            None
        } else {
            Some(Value::Object(assemble_payload(action, values)?))
        };
        debug!(name = %action.name, method = %action.method, href = %action.href, "dispatching action");
        let request = TransportRequest {
            method: action.method.clone(),
            href: action.href.clone(),
            accept: "*/*",
            body,
        };
        let response = self.transport.send(&request)?;
        if !response.is_success() {
            warn!(name = %action.name, status = response.status, "action failed");
            return Err(ClientError::ActionFailed {
                status: response.status,
            });
        }
        debug!(name = %action.name, status = response.status, "action succeeded");
        Ok(response)
    }
}

fn assemble_payload(
    action: &Action,
    values: Option<&FieldValues>,
) -> Result<Map<String, Value>, ClientError> {
    let mut payload = Map::new();
    for field in &action.fields {
        match values.and_then(|values| values.get(&field.name)) {
            Some(value) => {
                payload.insert(field.name.clone(), value.clone());
            }
            None if field.required => {
                return Err(ClientError::MissingRequiredField {
                    name: field.name.clone(),
                });
            }
            None => {}
        }
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type RequestLog = Rc<RefCell<Vec<TransportRequest>>>;

    struct FakeTransport {
        status: u16,
        body: Vec<u8>,
        log: RequestLog,
    }

    impl FakeTransport {
        fn new(status: u16, body: &str) -> (Self, RequestLog) {
            let log = RequestLog::default();
            let transport = Self {
                status,
                body: body.as_bytes().to_vec(),
                log: Rc::clone(&log),
            };
            (transport, log)
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, request: &TransportRequest) -> Result<ActionResponse, ClientError> {
            self.log.borrow_mut().push(request.clone());
            Ok(ActionResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&self, _request: &TransportRequest) -> Result<ActionResponse, ClientError> {
            Err(ClientError::Transport("connection refused".to_string()))
        }
    }

    fn book_entity() -> Entity {
        reader::read(&json!({
            "class": ["book"],
            "links": [
                {"rel": ["self"], "href": "https://api.example.com/books/1"},
                {"rel": ["collection"], "href": "https://api.example.com/books"},
            ],
            "actions": [
                {
                    "name": "modify",
                    "method": "PUT",
                    "href": "https://api.example.com/books/1",
                    "fields": [
                        {"name": "name", "type": "text"},
                        {"name": "test", "type": "text", "required": true},
                    ],
                },
                {
                    "name": "delete",
                    "method": "DELETE",
                    "href": "https://api.example.com/books/1",
                },
                {
                    "name": "annotate",
                    "method": "POST",
                    "href": "https://api.example.com/books/1/notes",
                    "fields": [{"name": "note", "type": "text"}],
                },
            ],
        }))
        .unwrap()
    }

    fn field_values(value: Value) -> FieldValues {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_retrieve_entity() {
        let (transport, log) = FakeTransport::new(
            200,
            r#"{"class":["books"],"links":[{"rel":["self"],"href":"https://api.example.com/books"}]}"#,
        );
        let client = SirenClient::with_transport(transport);
        let uri = Url::parse("https://api.example.com/books").unwrap();

        let entity = client.retrieve_entity(&uri).unwrap();

        assert_eq!(entity.classes, ["books".to_string()].into());
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].method, "GET");
        assert_eq!(log[0].href, uri);
        assert_eq!(log[0].accept, "application/json");
        assert_eq!(log[0].body, None);
    }

    #[test]
    fn test_retrieve_entity_error_status() {
        let (transport, _log) = FakeTransport::new(500, "");
        let client = SirenClient::with_transport(transport);
        let uri = Url::parse("https://api.example.com/books").unwrap();

        assert_eq!(
            client.retrieve_entity(&uri),
            Err(ClientError::ActionFailed { status: 500 })
        );
    }

    #[test]
    fn test_retrieve_entity_unparsable_body() {
        let (transport, _log) = FakeTransport::new(200, "not json");
        let client = SirenClient::with_transport(transport);
        let uri = Url::parse("https://api.example.com/books").unwrap();

        assert!(matches!(
            client.retrieve_entity(&uri),
            Err(ClientError::BodyParse(_))
        ));
    }

    #[test]
    fn test_follow_link() {
        let (transport, log) = FakeTransport::new(200, r#"{"class":["books"]}"#);
        let client = SirenClient::with_transport(transport);

        let entity = client.follow_link(&book_entity(), "collection").unwrap();

        assert_eq!(entity.classes, ["books".to_string()].into());
        assert_eq!(
            log.borrow()[0].href.as_str(),
            "https://api.example.com/books"
        );
    }

    #[test]
    fn test_follow_link_unknown_rel() {
        let (transport, log) = FakeTransport::new(200, "{}");
        let client = SirenClient::with_transport(transport);

        assert_eq!(
            client.follow_link(&book_entity(), "missing"),
            Err(ClientError::LinkNotFound {
                rel: "missing".to_string()
            })
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_perform_action_sends_declared_fields_only() {
        let (transport, log) = FakeTransport::new(200, "");
        let client = SirenClient::with_transport(transport);
        let values = field_values(json!({"test": "foobar", "hello": "world"}));

        client
            .perform_action(&book_entity(), "modify", Some(&values))
            .unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].method, "PUT");
        assert_eq!(log[0].href.as_str(), "https://api.example.com/books/1");
        assert_eq!(log[0].accept, "*/*");
        // `test` is declared and supplied; `hello` is undeclared and dropped;
        // `name` is declared, optional, and not supplied.
        assert_eq!(log[0].body, Some(json!({"test": "foobar"})));
    }

    #[test]
    fn test_perform_action_missing_required_field() {
        let (transport, log) = FakeTransport::new(200, "");
        let client = SirenClient::with_transport(transport);
        let values = field_values(json!({"name": "Modern Java"}));

        assert_eq!(
            client.perform_action(&book_entity(), "modify", Some(&values)),
            Err(ClientError::MissingRequiredField {
                name: "test".to_string()
            })
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_perform_action_unknown_name() {
        let (transport, log) = FakeTransport::new(200, "");
        let client = SirenClient::with_transport(transport);

        assert_eq!(
            client.perform_action(&book_entity(), "publish", None),
            Err(ClientError::ActionNotFound {
                name: "publish".to_string()
            })
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_action_without_fields_sends_no_body() {
        let (transport, log) = FakeTransport::new(204, "");
        let client = SirenClient::with_transport(transport);
        let values = field_values(json!({"test": "ignored"}));

        client
            .perform_action(&book_entity(), "delete", Some(&values))
            .unwrap();

        let log = log.borrow();
        assert_eq!(log[0].method, "DELETE");
        assert_eq!(log[0].body, None);
    }

    #[test]
    fn test_action_with_only_optional_fields_sends_empty_object() {
        let (transport, log) = FakeTransport::new(201, "");
        let client = SirenClient::with_transport(transport);

        client
            .perform_action(&book_entity(), "annotate", None)
            .unwrap();

        assert_eq!(log.borrow()[0].body, Some(json!({})));
    }

    #[test]
    fn test_incompatible_action_type_is_rejected_before_dispatch() {
        let (transport, log) = FakeTransport::new(200, "");
        let client = SirenClient::with_transport(transport);
        let entity = reader::read(&json!({
            "actions": [{
                "name": "import",
                "method": "POST",
                "href": "https://api.example.com/books",
                "type": "application/xml",
                "fields": [{"name": "data", "type": "text"}],
            }],
        }))
        .unwrap();

        let result = client.perform_action(&entity, "import", None);

        assert_eq!(
            result,
            Err(ClientError::UnsupportedActionType {
                media_type: "application/xml".parse().unwrap()
            })
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_json_suffixed_action_type_is_accepted() {
        let (transport, log) = FakeTransport::new(200, "");
        let client = SirenClient::with_transport(transport);
        let entity = reader::read(&json!({
            "actions": [{
                "name": "import",
                "method": "POST",
                "href": "https://api.example.com/books",
                "type": "application/vnd.siren+json",
                "fields": [{"name": "data", "type": "text"}],
            }],
        }))
        .unwrap();
        let values = field_values(json!({"data": "payload"}));

        client.perform_action(&entity, "import", Some(&values)).unwrap();

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_action_failed_carries_status() {
        let (transport, _log) = FakeTransport::new(400, "");
        let client = SirenClient::with_transport(transport);
        let values = field_values(json!({"test": "Y"}));

        assert_eq!(
            client.perform_action(&book_entity(), "modify", Some(&values)),
            Err(ClientError::ActionFailed { status: 400 })
        );
    }

    #[test]
    fn test_success_statuses() {
        for status in [200, 201, 204] {
            let (transport, _log) = FakeTransport::new(status, "");
            let client = SirenClient::with_transport(transport);
            let values = field_values(json!({"test": "Y"}));

            let response = client
                .perform_action(&book_entity(), "modify", Some(&values))
                .unwrap();
            assert_eq!(response.status, status);
            assert!(response.is_success());
        }
    }

    #[test]
    fn test_transport_error_passes_through() {
        let client = SirenClient::with_transport(FailingTransport);
        let uri = Url::parse("https://api.example.com/books").unwrap();

        assert_eq!(
            client.retrieve_entity(&uri),
            Err(ClientError::Transport("connection refused".to_string()))
        );
    }

    #[test]
    fn test_response_json() {
        let response = ActionResponse {
            status: 200,
            body: br#"{"ok":true}"#.to_vec(),
        };
        assert_eq!(response.json().unwrap(), json!({"ok": true}));

        let response = ActionResponse {
            status: 200,
            body: b"nope".to_vec(),
        };
        assert!(matches!(response.json(), Err(ClientError::BodyParse(_))));
    }
}
