//! Message boundary.
//!
//! Requests and responses are closed tagged unions. Every failure inside a
//! request, including a panic, is converted into a `success: false` response;
//! nothing propagates past [`handle_message_with`].
//!
//! Wire shapes:
//!
//! ```json
//! {"type": "EXTRACT_CONTENT", "options": {"minTextLength": 20}}
//! {"type": "PING"}
//!
//! {"success": true, "data": {...}}
//! {"success": true, "message": "Content script is ready"}
//! {"success": false, "error": "Unknown message type"}
//! ```

use std::panic::{self, AssertUnwindSafe};

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::error::{panic_message, Error};
use crate::extract::extract_page_content;
use crate::options::ParserOptions;
use crate::page::Page;
use crate::readability::{MainContentExtractor, ReadabilityExtractor};
use crate::result::ExtractedContent;

pub const READY_MESSAGE: &str = "Content script is ready";
pub const UNKNOWN_MESSAGE_TYPE: &str = "Unknown message type";

/// An inbound request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    ExtractContent {
        #[serde(default)]
        options: Option<ParserOptions>,
    },
    Ping,
}

impl Request {
    /// Every `type` tag this boundary understands.
    pub const TYPES: &'static [&'static str] = &["EXTRACT_CONTENT", "PING"];

    fn is_known_type(value: &Value) -> bool {
        value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| Self::TYPES.contains(&t))
    }
}

/// An outbound response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// `{ success: true, data }`
    Content(Box<ExtractedContent>),
    /// `{ success: true, message }`
    Ready(String),
    /// `{ success: false, error }`
    Failure(String),
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failure(_))
    }

    /// Serialize to JSON. Cannot fail for these types; a failure is reported
    /// as a `success: false` payload anyway.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            format!(r#"{{"success":false,"error":{}}}"#, Value::String(err.to_string()))
        })
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        match self {
            Self::Content(content) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", content)?;
            }
            Self::Ready(message) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("message", message)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Answer `request` against `page` with the default main-content extractor.
#[must_use]
pub fn handle_message(request: &Request, page: &Page) -> Response {
    handle_message_with(request, page, &ReadabilityExtractor::default())
}

/// Answer `request` against `page`.
#[must_use]
pub fn handle_message_with(request: &Request, page: &Page, main_content: &dyn MainContentExtractor) -> Response {
    match request {
        Request::Ping => Response::Ready(READY_MESSAGE.to_string()),
        Request::ExtractContent { options } => {
            let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
                let compiled = options.clone().unwrap_or_default().compile();
                extract_page_content(page, &compiled, main_content)
            }));
            match attempt {
                Ok(content) => Response::Content(Box::new(content)),
                Err(payload) => {
                    let err = Error::ExtractionError(panic_message(payload.as_ref()));
                    error!(url = page.url(), error = %err, "content extraction failed");
                    Response::Failure(err.to_string())
                }
            }
        }
    }
}

/// Decode a raw JSON message and answer it.
///
/// Malformed JSON reports the parse error; a well-formed message with an
/// unrecognized `type` reports [`UNKNOWN_MESSAGE_TYPE`].
///
/// # Example
///
/// ```rust
/// use content_sieve::{handle_raw_message, Page};
///
/// let page = Page::from_html("<p>hello</p>", "https://x.com/");
/// let response = handle_raw_message(r#"{"type":"PING"}"#, &page);
/// assert_eq!(response.to_json(), r#"{"success":true,"message":"Content script is ready"}"#);
/// ```
#[must_use]
pub fn handle_raw_message(json: &str, page: &Page) -> Response {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            let err = Error::from(err);
            warn!(error = %err, "rejecting malformed message");
            return Response::Failure(err.to_string());
        }
    };

    if !Request::is_known_type(&value) {
        warn!(message_type = ?value.get("type"), "rejecting unknown message type");
        return Response::Failure(UNKNOWN_MESSAGE_TYPE.to_string());
    }

    match serde_json::from_value::<Request>(value) {
        Ok(request) => handle_message(&request, page),
        Err(err) => {
            let err = Error::InvalidRequest(err.to_string());
            warn!(error = %err, "rejecting invalid request");
            Response::Failure(err.to_string())
        }
    }
}
