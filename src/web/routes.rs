// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, faculty_handlers, mw_auth, student_handlers},
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/", get(auth_handlers::home_page))
        .route("/register", get(auth_handlers::show_register_form).post(auth_handlers::handle_register))
        .route("/login", get(auth_handlers::show_login_form).post(auth_handlers::handle_login))
        .route("/logout", get(auth_handlers::handle_logout));

    // --- Rotas de Docente ---
    let faculty_routes = Router::new()
        .route(
            "/faculty",
            get(faculty_handlers::show_faculty_dashboard).post(faculty_handlers::handle_create_course),
        )
        .route("/faculty/view_students/{course_id}", get(faculty_handlers::view_students))
        .route_layer(middleware::from_fn(mw_auth::require_faculty));

    // --- Rotas de Estudante ---
    let student_routes = Router::new()
        .route(
            "/student",
            get(student_handlers::show_student_dashboard).post(student_handlers::handle_student_action),
        )
        .route("/register_course/{course_id}", post(student_handlers::handle_register_course))
        .route_layer(middleware::from_fn(mw_auth::require_student));

    // --- Rotas Autenticadas ---
    // require_auth corre antes dos middlewares de role (é a camada mais externa)
    let authenticated_routes = Router::new()
        .merge(faculty_routes)
        .merge(student_routes)
        .route_layer(middleware::from_fn(mw_auth::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state)
}
