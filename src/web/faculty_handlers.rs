// src/web/faculty_handlers.rs
use crate::{
    error::AppResult,
    models::{
        course::{CourseView, CreateCourseForm},
        user::CurrentUser,
    },
    services::{course_service, registration_service},
    state::AppState,
    templates::{render, FacultyDashboardPage, ViewStudentsPage},
};
use axum::{
    extract::{Extension, Form, Path, State},
    response::IntoResponse,
};

// GET /faculty
pub async fn show_faculty_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("GET /faculty: '{}'", user.username);
    faculty_dashboard(&state, user).await
}

// POST /faculty - cria o curso e mostra a lista atualizada
pub async fn handle_create_course(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<CreateCourseForm>,
) -> AppResult<impl IntoResponse> {
    // Horário é texto livre, sem verificação de conflitos
    course_service::create_course(&state.db_pool, &user.username, &form.course_name, &form.time_slot).await?;
    faculty_dashboard(&state, user).await
}

async fn faculty_dashboard(state: &AppState, user: CurrentUser) -> AppResult<impl IntoResponse> {
    let courses = course_service::list_courses_by_faculty(&state.db_pool, &user.username)
        .await?
        .into_iter()
        .map(CourseView::from)
        .collect();

    render(&FacultyDashboardPage { faculty: user.username, courses })
}

// GET /faculty/view_students/{course_id}
// Lê da tabela `registrations`, que não é criada por nenhuma migração: falha com erro da DB.
pub async fn view_students(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(course_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("'{}' a ver registos do curso {}", user.username, course_id);
    let students = registration_service::list_registrations_for_course(&state.db_pool, course_id).await?;
    render(&ViewStudentsPage { course_id, students })
}
