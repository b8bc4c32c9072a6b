// src/web/student_handlers.rs
use crate::{
    error::AppResult,
    models::{
        course::{CourseView, EnrollOutcome, Offering, StudentAction, StudentForm},
        user::CurrentUser,
    },
    services::{course_service, registration_service},
    state::AppState,
    templates::{render, StudentDashboardPage},
};
use axum::{
    extract::{Extension, Form, Path, State},
    response::{IntoResponse, Redirect},
};

// GET /student
pub async fn show_student_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    student_dashboard(&state, user, StudentAction::ListSubjects).await
}

// POST /student - o campo presente (subject ou course_id) decide a ação
pub async fn handle_student_action(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<StudentForm>,
) -> AppResult<impl IntoResponse> {
    let action = StudentAction::from(form);
    tracing::debug!("POST /student: '{}' -> {:?}", user.username, action);
    student_dashboard(&state, user, action).await
}

async fn student_dashboard(
    state: &AppState,
    user: CurrentUser,
    action: StudentAction,
) -> AppResult<impl IntoResponse> {
    let subjects = course_service::list_subjects(&state.db_pool).await?;

    let mut selected_subject = None;
    let mut faculty_list = Vec::new();
    let mut notice = None;

    match action {
        StudentAction::ListSubjects => {}
        StudentAction::ListFaculty { subject } => {
            faculty_list = course_service::list_offerings_for_subject(&state.db_pool, &subject)
                .await?
                .into_iter()
                .map(|course| Offering::for_student(course, &user.username))
                .collect();
            selected_subject = Some(subject);
        }
        StudentAction::Enroll { course_id } => {
            let outcome = course_service::enroll_student(&state.db_pool, course_id, &user.username).await?;
            notice = Some(
                match outcome {
                    EnrollOutcome::Enrolled => "Inscrição concluída.",
                    EnrollOutcome::AlreadyEnrolled => "Já estava inscrito neste curso.",
                    EnrollOutcome::CourseNotFound => "Curso não encontrado.",
                }
                .to_string(),
            );
        }
    }

    let registered_courses = course_service::list_courses_for_student(&state.db_pool, &user.username)
        .await?
        .into_iter()
        .map(CourseView::from)
        .collect();

    render(&StudentDashboardPage {
        student: user.username,
        subjects,
        selected_subject,
        faculty_list,
        registered_courses,
        notice,
    })
}

// POST /register_course/{course_id}
// Caminho alternativo baseado em `registrations` e em colunas de perfil inexistentes.
pub async fn handle_register_course(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(course_id): Path<i64>,
) -> AppResult<Redirect> {
    registration_service::register_student_for_course(&state.db_pool, &user.username, course_id).await?;
    Ok(Redirect::to("/student"))
}
