use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use testament_client::{
    endpoints, ClientError, Config, Document, Headers, HttpMethod, RawResponse, RequestOptions,
    ResolvedRequest, TestamentClient, Transport, TransportFailure,
};

/// Records every request and answers each one with the same canned outcome.
struct RecordingTransport {
    requests: Mutex<Vec<ResolvedRequest>>,
    status: u16,
    body: Value,
    failure: Option<String>,
}

impl RecordingTransport {
    fn answering(status: u16, body: Value) -> Arc<Self> {
        Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            status,
            body,
            failure: None,
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            status: 0,
            body: Value::Null,
            failure: Some(message.to_string()),
        })
    }

    fn requests(&self) -> Vec<ResolvedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> ResolvedRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<RawResponse, TransportFailure> {
        self.requests.lock().unwrap().push(request);

        if let Some(message) = &self.failure {
            return Err(TransportFailure::new(message.clone()));
        }

        let headers = Headers::from([("content-type".to_string(), "application/json".to_string())]);
        let raw = RawResponse::new(self.status, headers, serde_json::to_vec(&self.body).unwrap());
        if (200..300).contains(&self.status) {
            Ok(raw)
        } else {
            Err(TransportFailure::with_response(
                format!("Request failed with status code {}", self.status),
                raw,
            ))
        }
    }
}

fn client_with(transport: Arc<RecordingTransport>) -> TestamentClient {
    let config = Config::new("http://localhost:8081").unwrap();
    TestamentClient::with_transport(config, transport)
}

fn options() -> RequestOptions {
    RequestOptions::new().with_header("X-User-Id", "u1")
}

fn assert_sent(request: &ResolvedRequest, method: HttpMethod, path: &str) {
    assert_eq!(request.method, method, "method for {}", path);
    assert_eq!(request.url.path(), path);
}

#[tokio::test]
async fn test_transport_failure_message_is_kept() {
    let transport = RecordingTransport::failing("Some error");
    let client = client_with(transport.clone());

    let err = client.get_all_namespaces(&options()).await.unwrap_err();
    match err {
        ClientError::Transport { message, .. } => assert_eq!(message, "Some error"),
        other => panic!("expected ClientError::Transport, got {:?}", other),
    }
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_missing_path_parameter_sends_nothing() {
    let transport = RecordingTransport::answering(200, json!({}));
    let client = client_with(transport.clone());

    let params = [("blueprintId", "b1")];
    let err = client
        .execute::<Document, ()>(&endpoints::GET_BLUEPRINT_APP, &params, &options(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::MissingPathParameter { ref name, .. } if name == "appId"
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_invalid_header_is_a_local_error() {
    let transport = RecordingTransport::answering(200, json!({}));
    let client = client_with(transport.clone());

    let options = RequestOptions::new().with_header("bad name", "x");
    let err = client.get_all_namespaces(&options).await.unwrap_err();

    assert!(matches!(err, ClientError::RequestBuild(_)));
    assert!(!err.is_transport());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_member_namespace_ids_are_not_revived() {
    let transport = RecordingTransport::answering(200, json!(["2021-06-15", "n2"]));
    let client = client_with(transport.clone());

    let envelope = client.get_namespaces_for_member("u1", &options()).await.unwrap();

    assert_eq!(envelope.body, vec!["2021-06-15".to_string(), "n2".to_string()]);
    assert_sent(&transport.last(), HttpMethod::Get, "/api/users/u1/namespaces");
}

#[tokio::test]
async fn test_page_dates_keep_microseconds() {
    let transport = RecordingTransport::answering(
        200,
        json!({
            "content": [{"id": "n1", "at": "2021-06-15T10:00:00.123456Z"}],
            "elements": 1,
            "page": 0,
            "limit": 20,
            "totalPages": 1,
            "totalElements": 1,
            "firstPage": true,
            "lastPage": true
        }),
    );
    let client = client_with(transport);

    let envelope = client.get_all_namespaces(&options()).await.unwrap();
    let at = envelope.body.content[0].get_date("at").expect("at should be a date");

    assert_eq!(at.timestamp_subsec_nanos(), 123_456_000);
    assert_eq!(
        envelope.body.content[0].clone().into_json()["at"],
        json!("2021-06-15T10:00:00.123456Z")
    );
}

#[tokio::test]
async fn test_status_error_carries_the_same_envelope_shape() {
    let body = json!({"message": "Namespace already exists", "at": "2021-06-15T10:00:00Z"});
    let transport = RecordingTransport::answering(409, body);
    let client = client_with(transport);

    let err = client
        .create_namespace(&json!({"name": "Namespace 1"}), &options())
        .await
        .unwrap_err();

    let response = err.response().expect("status error carries the response");
    assert_eq!(response.status, 409);
    assert_eq!(response.get_str("message"), Some("Namespace already exists"));
    assert!(response.get_date("at").is_some());
}

#[tokio::test]
async fn test_headers_and_body_reach_the_transport() {
    let transport = RecordingTransport::answering(201, json!({"id": "e1"}));
    let client = client_with(transport.clone());
    let dto = json!({"name": "Environment 1", "namespaceId": "n1"});

    client.create_environment(&dto, &options()).await.unwrap();

    let request = transport.last();
    assert_sent(&request, HttpMethod::Post, "/api/environments");
    assert_eq!(request.headers.get("X-User-Id").map(String::as_str), Some("u1"));
    assert_eq!(request.body, Some(dto));
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn test_query_parameters_are_encoded() {
    let transport = RecordingTransport::answering(200, json!([]));
    let client = client_with(transport.clone());

    let options = options().with_query("name", "a b&c");
    client.get_blueprint_files("b1", &options).await.unwrap();

    let request = transport.last();
    assert_eq!(request.url.query(), Some("name=a+b%26c"));
}

#[tokio::test]
async fn test_resource_families_resolve_method_and_path() {
    let transport = RecordingTransport::answering(200, json!({"id": "x"}));
    let client = client_with(transport.clone());
    let o = options();
    let dto = json!({"name": "x"});

    client.get_namespace("n1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Get, "/api/namespaces/n1");

    client.update_app("a1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Put, "/api/apps/a1");

    client.delete_app("a1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Delete, "/api/apps/a1");

    client.update_environment("e1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Put, "/api/environments/e1");

    client.create_blueprint(&dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Post, "/api/blueprints");

    client.delete_blueprint("b1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Delete, "/api/blueprints/b1");

    client.add_blueprint_app("b1", &json!({"appId": "a1"}), &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Post, "/api/blueprints/b1/apps");

    client.remove_blueprint_app("b1", "a1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Delete, "/api/blueprints/b1/apps/a1");

    client.add_blueprint_parameter("b1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Post, "/api/blueprints/b1/parameters");

    client.update_blueprint_correlation("b1", "c1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Patch, "/api/blueprints/b1/correlations/c1");

    client.remove_blueprint_file("b1", "f1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Delete, "/api/blueprints/b1/files/f1");

    client.get_blueprint_run_configuration("b1", "rc1", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Get, "/api/blueprints/b1/run-configurations/rc1");

    client.update_blueprint_permissions("b1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Patch, "/api/blueprints/b1/permissions");

    client.add_blueprint_user_permissions("b1", &dto, &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Post, "/api/blueprints/b1/permissions/users");

    client.remove_blueprint_user_permissions("b1", "u2", &o).await.unwrap();
    assert_sent(&transport.last(), HttpMethod::Delete, "/api/blueprints/b1/permissions/users/u2");

    assert_eq!(transport.requests().len(), 15);
    for request in transport.requests() {
        assert_eq!(request.body.is_some(), request.method.has_body(), "{}", request.url);
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let transport = RecordingTransport::answering(200, json!({"id": "n"}));
    let client = client_with(transport.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let id = format!("n{}", i);
                client.get_namespace(&id, &RequestOptions::default()).await.map(|e| e.status)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 200);
    }
    assert_eq!(transport.requests().len(), 8);
}
