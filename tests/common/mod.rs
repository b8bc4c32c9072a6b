#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use enrollment::{build_app, config::Config};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db_pool: SqlitePool,
    // Mantém o diretório (e a base de dados) vivo enquanto o teste corre
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        database_url: format!("sqlite://{}", dir.path().join("enrollment.db").display()),
        bcrypt_cost: 4,
        ..Config::default()
    }
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(&test_config(&dir)).await.unwrap();
    TestApp { router: app.router, db_pool: app.db_pool, dir }
}

/// Simula um reinício do processo sobre a mesma base de dados.
pub async fn restart(app: TestApp) -> TestApp {
    app.db_pool.close().await;
    let rebuilt = build_app(&test_config(&app.dir)).await.unwrap();
    TestApp { router: rebuilt.router, db_pool: rebuilt.db_pool, dir: app.dir }
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Cookie de sessão (`id=...`) posto pela resposta, pronto para o header `Cookie`.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("id="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn register(router: &Router, username: &str, password: &str, role: &str) -> Response<Body> {
    send(
        router,
        post_form(
            "/register",
            &[("username", username), ("password", password), ("role", role)],
            None,
        ),
    )
    .await
}

pub async fn login(router: &Router, username: &str, password: &str, role: &str) -> Response<Body> {
    send(
        router,
        post_form(
            "/login",
            &[("username", username), ("password", password), ("role", role)],
            None,
        ),
    )
    .await
}

/// Regista e faz login; devolve o cookie de sessão.
pub async fn sign_up_and_login(router: &Router, username: &str, role: &str) -> String {
    let response = register(router, username, "pw-123", role).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = login(router, username, "pw-123", role).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response).expect("login sem cookie de sessão")
}

pub async fn create_course(router: &Router, cookie: &str, name: &str, slot: &str) -> Response<Body> {
    send(
        router,
        post_form("/faculty", &[("course_name", name), ("time_slot", slot)], Some(cookie)),
    )
    .await
}

pub async fn course_id_by(pool: &SqlitePool, faculty: &str, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM courses WHERE faculty = ?1 AND course_name = ?2")
        .bind(faculty)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn roster_of(pool: &SqlitePool, course_id: i64) -> String {
    sqlx::query_scalar("SELECT students FROM courses WHERE id = ?1")
        .bind(course_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
