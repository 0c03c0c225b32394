//! HttpTransport against a live axum server on a random port.

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use motion::{
    Client, HttpTransport, MotionConfig, ProgressCallback, RequestConfig, Transport,
    TransportError, UploadProgress,
};
use motion_core::endpoints::{action, coach, upload};
use motion_core::types::coach::CoachSearchParams;
use motion_core::types::PageParams;
use motion_core::{
    ActionRoutes, ApiRequest, CoachRoutes, ProfileRoutes, RouteConfig, UploadFile,
};
use serde_json::{json, Value};

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "code": 200, "msg": "ok", "data": data }))
}

async fn echo_query(headers: HeaderMap, Query(pairs): Query<Vec<(String, String)>>) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    ok(json!({ "pairs": pairs, "authorization": authorization }))
}

async fn delete_action(Path(id): Path<u64>) -> Json<Value> {
    ok(json!({ "deleted": id }))
}

async fn expired() -> Json<Value> {
    Json(json!({ "code": 401, "msg": "token expired", "data": null }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn store(mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    let mut stored = json!(null);
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        if let Some(file_name) = file_name {
            stored = json!({
                "filename": file_name,
                "path": format!("uploads/{}/{}", bytes.len(), content_type.unwrap_or_default()),
                "url": format!("https://cdn.example.com/uploads/{file_name}")
            });
        }
        fields.push(name);
    }
    stored["fields"] = json!(fields);
    ok(stored)
}

async fn bucket(headers: HeaderMap, multipart: Multipart) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let Json(mut body) = store(multipart).await;
    body["data"]["authorization"] = json!(authorization);
    Json(body)
}

async fn start() -> String {
    let app = Router::new()
        .route("/api/v1/coaches", get(echo_query))
        .route("/api/v1/action/{id}", delete(delete_action))
        .route("/api/v1/user/info", get(expired))
        .route("/api/v1/broken", get(broken))
        .route("/api/v1/common/upload", post(store))
        .route("/bucket", post(bucket));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{addr}")
}

fn transport(base_url: &str, token: Option<&str>) -> HttpTransport {
    HttpTransport::new(&MotionConfig {
        base_url: base_url.to_string(),
        access_token: token.map(str::to_string),
        timeout: None,
    })
    .unwrap()
}

#[tokio::test]
async fn list_sends_normalized_query_and_token() {
    let base_url = start().await;
    let transport = transport(&base_url, Some("raw-token"));

    let request = coach::list(
        CoachRoutes::Plural,
        &CoachSearchParams {
            page: PageParams::new(1, 20),
            name: Some("  John  ".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    let data = transport.get(request).await.unwrap();

    assert_eq!(data["authorization"], "raw-token");
    let mut pairs: Vec<(String, String)> = serde_json::from_value(data["pairs"].clone()).unwrap();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("keyword".to_string(), "John".to_string()),
            ("page".to_string(), "1".to_string()),
            ("pageSize".to_string(), "20".to_string()),
        ]
    );
}

#[tokio::test]
async fn array_filters_repeat_with_brackets() {
    let base_url = start().await;
    let transport = transport(&base_url, None);

    let mut query = serde_json::Map::new();
    query.insert("tagIds".to_string(), json!([3, 5]));
    let data = transport
        .get(ApiRequest::get("/api/v1/coaches").with_query(query))
        .await
        .unwrap();

    assert_eq!(data["authorization"], Value::Null);
    assert_eq!(data["pairs"], json!([["tagIds[]", "3"], ["tagIds[]", "5"]]));
}

#[tokio::test]
async fn delete_unwraps_envelope() {
    let base_url = start().await;
    let transport = transport(&base_url, None);

    let data = transport.del(action::delete(42)).await.unwrap();
    assert_eq!(data, json!({ "deleted": 42 }));
}

#[tokio::test]
async fn client_delete_goes_through_route_config() {
    let base_url = start().await;
    let client = Client::new(
        transport(&base_url, None),
        RouteConfig::new(CoachRoutes::Singular, ActionRoutes::Plural, ProfileRoutes::User),
    );

    client.actions().delete(42).await.unwrap();
}

#[tokio::test]
async fn envelope_errors_surface_as_api_errors() {
    let base_url = start().await;
    let client = Client::new(
        transport(&base_url, Some("stale")),
        RouteConfig::new(CoachRoutes::Plural, ActionRoutes::Plural, ProfileRoutes::User),
    );

    let err = client.auth().user_info().await.unwrap_err();
    assert_eq!(
        err.transport(),
        Some(&TransportError::Api {
            code: 401,
            message: "token expired".to_string()
        })
    );
}

#[tokio::test]
async fn http_errors_keep_status_and_body() {
    let base_url = start().await;
    let transport = transport(&base_url, None);

    let err = transport
        .get(ApiRequest::get("/api/v1/broken"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransportError::Status {
            status: 500,
            body: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn upload_streams_file_and_reports_progress() {
    let base_url = start().await;
    let transport = transport(&base_url, None);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let callback: ProgressCallback = Arc::new(move |progress: UploadProgress| {
        sink.lock().unwrap().push(progress);
    });

    let file = UploadFile::new("big.mp4", "video/mp4", vec![1u8; 200 * 1024]);
    let data = transport
        .request(RequestConfig::new(upload::upload_file(file)).with_progress(callback))
        .await
        .unwrap();

    assert_eq!(data["filename"], "big.mp4");
    assert_eq!(data["path"], format!("uploads/{}/video/mp4", 200 * 1024));
    assert_eq!(data["fields"], json!(["file"]));

    let seen = seen.lock().unwrap();
    assert!(seen.len() > 1, "expected several progress events, got {seen:?}");
    assert_eq!(
        seen.last(),
        Some(&UploadProgress {
            loaded: 200 * 1024,
            total: 200 * 1024
        })
    );
    assert!(seen.windows(2).all(|pair| pair[0].loaded <= pair[1].loaded));
}

#[tokio::test]
async fn plain_upload_without_progress() {
    let base_url = start().await;
    let client = Client::new(
        transport(&base_url, None),
        RouteConfig::new(CoachRoutes::Plural, ActionRoutes::Plural, ProfileRoutes::User),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cover.png");
    std::fs::write(&path, [0u8; 16]).unwrap();

    let file = motion::api::upload::load_file(&path).await.unwrap();
    let stored = client.uploads().upload_image(file, None).await.unwrap();

    assert_eq!(stored.filename, "cover.png");
    assert_eq!(stored.path, "uploads/16/image/png");
}

#[tokio::test]
async fn signed_form_keeps_field_order() {
    let base_url = start().await;
    let transport = transport(&base_url, Some("never-sent-to-storage"));

    // Bucket uploads target an absolute URL; point it at the local server.
    let mut request = upload::upload_to_s3(upload::S3Upload {
        file: UploadFile::new("a.png", "image/png", vec![9; 8]),
        credentials: serde_json::from_value(json!({
            "accessKey": "AKIA",
            "secretKey": "secret",
            "sessionToken": "session",
            "url": ""
        }))
        .unwrap(),
        bucket: "media".to_string(),
        key: "actions/a.png".to_string(),
    });
    request.url = format!("{base_url}/bucket");

    let data = transport.request(request.into()).await.unwrap();
    assert_eq!(data["authorization"], Value::Null);
    assert_eq!(
        data["fields"],
        json!([
            "key",
            "acl",
            "Content-Type",
            "AWSAccessKeyId",
            "policy",
            "x-amz-security-token",
            "file"
        ])
    );
}
