//! Gateway calls against an in-process axum server standing in for the backend.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use common::{
    custom_pdf::{GenerateCustomRequest, SourceDocument},
    material::MaterialSort,
    page_selection::SelectionMatrix,
    user::{LoginRequest, Role, Session},
    validation::ValidationError,
};
use gateway::{
    ApiClient, ApiError, GatewayConfig,
    api::{auth, courses, custom_pdfs, materials, notifications},
    client::{AUTHORIZATION_HEADER, USER_ID_HEADER, USER_ROLE_HEADER},
};


#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Default)]
struct FakeBackend {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn json(status: StatusCode, body: &str) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

async fn handle(State(state): State<FakeBackend>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().trim_start_matches("/api").to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    match (method, path.as_str()) {
        (Method::POST, "/auth/login") => json(StatusCode::UNAUTHORIZED, r#"{"message":"Wrong email or password."}"#),
        (Method::GET, "/courses") => json(
            StatusCode::OK,
            r#"{"courses":[{"course_id":"c1","course_name":"Deep Project Lab","year":2025,"semester":2,"professor_name":"Kim","enrolled_students":["s1","s2"]}]}"#,
        ),
        (Method::GET, "/courses/expired") => json(StatusCode::UNAUTHORIZED, r#"{"message":"Login required."}"#),
        (Method::GET, "/courses/forbidden") => json(StatusCode::FORBIDDEN, r#"{"message":"Not enrolled in this course."}"#),
        (Method::GET, "/courses/missing") => json(StatusCode::NOT_FOUND, r#"{"message":"Course not found."}"#),
        (Method::GET, "/courses/broken") => json(StatusCode::INTERNAL_SERVER_ERROR, "not json at all"),
        (Method::GET, "/courses/c1/week/2") => json(
            StatusCode::OK,
            r#"{"course":{"course_id":"c1","course_name":"Deep Project Lab"},"professor_materials":[],"student_materials":[]}"#,
        ),
        (Method::GET, "/notifications") => json(StatusCode::OK, r#"{"notifications":"nope"}"#),
        (Method::GET, "/notifications/unread-count") => json(StatusCode::OK, r#"{"count":3}"#),
        (Method::POST, "/courses/c1/week/2/generate-custom") => json(
            StatusCode::OK,
            r#"{"success":true,"message":"Created.","custom_pdf_id":"p1"}"#,
        ),
        (Method::POST, "/courses/full/week/2/generate-custom") => json(
            StatusCode::OK,
            r#"{"success":false,"message":"PDF merge failed: page 4 missing."}"#,
        ),
        (Method::GET, "/materials/m1/download") => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (header::CONTENT_DISPOSITION, "attachment; filename*=UTF-8''%EA%B0%95%EC%9D%98.pdf"),
            ],
            Bytes::from_static(b"%PDF-1.4"),
        )
            .into_response(),
        (Method::GET, "/custom-pdfs/p1/download") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/pdf")],
            Bytes::from_static(b"%PDF-1.7"),
        )
            .into_response(),
        _ => json(StatusCode::NOT_FOUND, r#"{"message":"no route"}"#),
    }
}

async fn start() -> (FakeBackend, String) {
    let state = FakeBackend::default();
    let app = Router::new().fallback(handle).with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (state, format!("http://{addr}/api"))
}

fn student() -> Session {
    Session {
        user_id: "s1".to_string(),
        role: Role::Student,
        name: "Hong".to_string(),
        email: "hong@student.ac.kr".to_string(),
        token: Some("tok".to_string()),
    }
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(GatewayConfig::new(base_url)).with_session(Some(student()))
}

fn matrix() -> SelectionMatrix {
    let doc = |id: &str, name: &str, pages| SourceDocument {
        material_id: id.to_string(),
        uploader_name: name.to_string(),
        page_count: pages,
        quality_score: None,
        uploader_id: None,
    };
    SelectionMatrix::new(vec![doc("m1", "A", 3), doc("m2", "B", 4)])
}


#[tokio::test]
async fn identity_headers_reach_the_backend() {
    let (backend, base) = start().await;
    let list = courses::list_courses(&client(&base)).await.unwrap();
    assert_eq!(list.courses.len(), 1);
    assert_eq!(list.courses[0].enrolled_count(), 2);

    let requests = backend.requests();
    let headers = &requests[0].headers;
    assert_eq!(headers.get(AUTHORIZATION_HEADER).unwrap(), "Bearer tok");
    assert_eq!(headers.get(USER_ID_HEADER).unwrap(), "s1");
    assert_eq!(headers.get(USER_ROLE_HEADER).unwrap(), "student");
}

#[tokio::test]
async fn status_codes_map_to_errors_with_backend_message() {
    let (_backend, base) = start().await;
    let client = client(&base);

    let err = courses::course_detail(&client, "expired").await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: Some("Login required.".to_string()) });
    assert!(err.is_auth_expired());

    let err = courses::course_detail(&client, "forbidden").await.unwrap_err();
    assert_eq!(err.user_message(), "Not enrolled in this course.");

    let err = courses::course_detail(&client, "missing").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    let err = courses::course_detail(&client, "broken").await.unwrap_err();
    assert_eq!(err, ApiError::Backend { status: 500, message: None });
}

#[tokio::test]
async fn login_rejection_is_not_an_expired_session() {
    let (_backend, base) = start().await;
    let client = ApiClient::new(GatewayConfig::new(&base));
    let request = LoginRequest { email: "a@b.co".to_string(), password: "wrong".to_string() };

    let err = auth::login(&client, &request).await.unwrap_err();
    assert_eq!(err, ApiError::InvalidCredentials { message: Some("Wrong email or password.".to_string()) });
    assert!(!err.is_auth_expired());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (_backend, base) = start().await;
    let err = notifications::list_notifications(&client(&base)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));

    assert_eq!(notifications::unread_count(&client(&base)).await.unwrap(), 3);
}

#[tokio::test]
async fn sort_order_is_sent_as_query() {
    let (backend, base) = start().await;
    let week = courses::week_materials(&client(&base), "c1", 2, MaterialSort::Popular).await.unwrap();
    assert!(week.can_upload);
    assert_eq!(backend.requests()[0].query.as_deref(), Some("sort=popular"));
}

#[tokio::test]
async fn empty_selection_never_reaches_the_backend() {
    let (backend, base) = start().await;
    let err = custom_pdfs::generate_custom_pdf(&client(&base), "c1", 2, &matrix()).await.unwrap_err();
    assert_eq!(err, ApiError::Validation(ValidationError::EmptySelection));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn pages_are_sent_in_click_order() {
    let (backend, base) = start().await;
    let mut matrix = matrix();
    matrix.toggle_page("m1", 2, "A");
    matrix.toggle_page("m1", 1, "A");
    matrix.toggle_page("m2", 3, "B");

    let response = custom_pdfs::generate_custom_pdf(&client(&base), "c1", 2, &matrix).await.unwrap();
    assert_eq!(response.custom_pdf_id.as_deref(), Some("p1"));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    let sent: GenerateCustomRequest = serde_json::from_slice(&requests[0].body).unwrap();
    let order: Vec<(&str, u32)> = sent.selected_pages.iter().map(|p| (p.material_id.as_str(), p.page_num)).collect();
    assert_eq!(order, vec![("m1", 2), ("m1", 1), ("m2", 3)]);
    assert_eq!(sent.selected_pages[2].student_name, "B");
}

#[tokio::test]
async fn rejected_generation_keeps_message_and_selection() {
    let (_backend, base) = start().await;
    let mut matrix = matrix();
    matrix.toggle_page("m2", 4, "B");

    let err = custom_pdfs::generate_custom_pdf(&client(&base), "full", 2, &matrix).await.unwrap_err();
    assert_eq!(err.user_message_or("Could not generate the PDF."), "PDF merge failed: page 4 missing.");
    assert_eq!(matrix.selected_count(), 1);
}

#[tokio::test]
async fn downloads_carry_their_file_name() {
    let (_backend, base) = start().await;
    let client = client(&base);

    let file = materials::download_material(&client, "m1").await.unwrap();
    assert_eq!(file.file_name.as_deref(), Some("강의.pdf"));
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(&file.bytes[..], b"%PDF-1.4");

    let file = custom_pdfs::download_custom_pdf(&client, "p1").await.unwrap();
    assert_eq!(file.file_name, None);
    assert_eq!(file.bytes.len(), 8);
}
