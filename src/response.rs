use crate::document::Document;
use crate::error::{ClientError, Result};
use crate::request::Headers;
use crate::transport::{RawResponse, TransportFailure};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Envelope wraps every response: status code, headers as received and the
/// decoded body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub headers: Headers,
    pub body: T,
}

impl<T> Envelope<T> {
    /// Returns true if the status code indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header, ignoring the case of the name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Transform the body, keeping status and headers
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            headers: self.headers,
            body: f(self.body),
        }
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl Envelope<Document> {
    /// Get a value from the body by a slash-separated path.
    /// For example, "metadata/creator" accesses the "creator" field inside "metadata".
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.body.get(path)
    }

    /// Get a string value from the body by a slash-separated path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.body.get_str(path)
    }

    /// Get a date value from the body by a slash-separated path
    pub fn get_date(&self, path: &str) -> Option<DateTime<Utc>> {
        self.body.get_date(path)
    }

    /// Decode the body into the provided type
    pub fn decode<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.body.clone().into_json())?)
    }
}

/// Turn a transport outcome into an envelope or a structured error.
///
/// The envelope is built the same way whatever the status; only the presence
/// of a response decides between [`ClientError::Status`] and
/// [`ClientError::Transport`]. With `revive_dates`, every string in the body
/// that parses as an ISO-8601 date is reconstituted before decoding.
pub fn normalize<T>(
    outcome: std::result::Result<RawResponse, TransportFailure>,
    revive_dates: bool,
) -> Result<Envelope<T>>
where
    T: DeserializeOwned,
{
    match outcome {
        Ok(raw) => envelope(raw, revive_dates),
        Err(TransportFailure {
            response: Some(raw),
            ..
        }) => Err(ClientError::Status {
            response: envelope(raw, revive_dates)?,
        }),
        Err(TransportFailure {
            message,
            response: None,
            source,
        }) => Err(ClientError::Transport { message, source }),
    }
}

fn envelope<T>(raw: RawResponse, revive_dates: bool) -> Result<Envelope<T>>
where
    T: DeserializeOwned,
{
    let mut value = parse_body(&raw.body);
    if revive_dates {
        value = Document::revive(value).into_json();
    }

    Ok(Envelope {
        status: raw.status,
        headers: raw.headers,
        body: serde_json::from_value(value)?,
    })
}

/// Empty bodies decode as `null`; bodies that are not JSON are kept as text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{parse_iso8601, Time};
    use serde::Deserialize;
    use serde_json::json;

    fn json_headers() -> Headers {
        Headers::from([("content-type".to_string(), "application/json".to_string())])
    }

    fn raw(status: u16, body: Value) -> RawResponse {
        RawResponse::new(status, json_headers(), serde_json::to_vec(&body).unwrap())
    }

    #[test]
    fn test_normalize_success_revives_dates() {
        let body = json!({
            "id": "n1",
            "name": "Namespace 1",
            "metadata": {"creator": {"userId": "u1", "timeCreated": "2021-06-15T10:00:00.000Z"}}
        });
        let envelope: Envelope<Document> = normalize(Ok(raw(201, body)), true).unwrap();

        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.header("Content-Type"), Some("application/json"));
        assert_eq!(envelope.get_str("name"), Some("Namespace 1"));
        assert_eq!(
            envelope.get_date("metadata/creator/timeCreated"),
            parse_iso8601("2021-06-15T10:00:00.000Z")
        );
    }

    #[test]
    fn test_normalize_keeps_sub_millisecond_precision() {
        let body = json!({"at": "2021-06-15T10:00:00.123456Z"});
        let expected = parse_iso8601("2021-06-15T10:00:00.123456Z");

        let envelope: Envelope<Document> = normalize(Ok(raw(200, body.clone())), true).unwrap();
        assert_eq!(envelope.get_date("at"), expected);
        assert_eq!(envelope.body.into_json(), body);

        #[derive(Debug, Deserialize)]
        struct Stamp {
            at: Time,
        }
        let typed: Envelope<Stamp> = normalize(Ok(raw(200, body)), true).unwrap();
        assert_eq!(Some(typed.body.at.0), expected);
        assert_eq!(typed.body.at.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_normalize_without_revival_keeps_strings() {
        let body = json!({"at": "2021-06-15"});
        let envelope: Envelope<Value> = normalize(Ok(raw(200, body.clone())), false).unwrap();
        assert_eq!(envelope.body, body);
    }

    #[test]
    fn test_normalize_typed_body() {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Creator {
            user_id: String,
            time_created: Time,
        }

        let body = json!({"userId": "u1", "timeCreated": "2021-06-15"});
        let envelope: Envelope<Creator> = normalize(Ok(raw(200, body)), true).unwrap();

        assert_eq!(envelope.body.user_id, "u1");
        assert_eq!(envelope.body.time_created.iso(), "2021-06-15T00:00:00.000Z");
    }

    #[test]
    fn test_normalize_status_failure_keeps_envelope() {
        let body = json!({"message": "Namespace already exists"});
        let failure = TransportFailure::with_response("conflict", raw(409, body.clone()));

        let err = normalize::<Document>(Err(failure), true).unwrap_err();
        let response = err.response().expect("status errors carry the response");

        assert_eq!(response.status, 409);
        assert_eq!(response.headers, json_headers());
        assert_eq!(response.body, Document::revive(body.clone()));

        let success: Envelope<Document> = normalize(Ok(raw(409, body)), true).unwrap();
        assert_eq!(response, &success);
    }

    #[test]
    fn test_normalize_transport_failure() {
        let failure = TransportFailure::new("Some error");
        let err = normalize::<Document>(Err(failure), true).unwrap_err();

        match err {
            ClientError::Transport { ref message, .. } => assert_eq!(message, "Some error"),
            ref other => panic!("expected Transport, got {:?}", other),
        }
        assert!(err.response().is_none());
    }

    #[test]
    fn test_normalize_empty_and_text_bodies() {
        let empty = RawResponse::new(204, Headers::new(), Vec::new());
        let envelope: Envelope<Document> = normalize(Ok(empty), true).unwrap();
        assert!(envelope.body.is_null());

        let text = RawResponse::new(502, Headers::new(), b"Bad Gateway".to_vec());
        let err = normalize::<Document>(Err(TransportFailure::with_response("bad", text)), true)
            .unwrap_err();
        assert_eq!(
            err.response().unwrap().body,
            Document::String("Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_normalize_shape_mismatch_is_json_error() {
        let err = normalize::<Vec<String>>(Ok(raw(200, json!({"a": 1}))), true).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[test]
    fn test_envelope_decode_and_map() {
        let envelope: Envelope<Document> =
            normalize(Ok(raw(200, json!(["n1", "n2"]))), true).unwrap();

        let ids: Vec<String> = envelope.decode().unwrap();
        assert_eq!(ids, vec!["n1", "n2"]);

        let count = envelope.map(|body| body.as_array().map_or(0, |items| items.len()));
        assert_eq!(count.body, 2);
        assert!(count.is_success());
    }
}
