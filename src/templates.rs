// src/templates.rs
use crate::models::{
    course::{CourseView, Offering},
    registration::Registration,
    user::CurrentUser,
};
use crate::error::{AppError, AppResult};
use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    // Utilizador com sessão ativa, se houver (para mostrar o link do dashboard)
    pub current_user: Option<CurrentUser>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
    // Feedback vindo do registo (?success=...)
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "faculty_dashboard.html")]
pub struct FacultyDashboardPage {
    pub faculty: String,
    pub courses: Vec<CourseView>,
}

#[derive(Template)]
#[template(path = "student_dashboard.html")]
pub struct StudentDashboardPage {
    pub student: String,
    pub subjects: Vec<String>,
    pub selected_subject: Option<String>,
    pub faculty_list: Vec<Offering>,
    pub registered_courses: Vec<CourseView>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "view_students.html")]
pub struct ViewStudentsPage {
    pub course_id: i64,
    pub students: Vec<Registration>,
}

/// Renderiza um template para `Html`, convertendo falhas em `AppError::TemplateError`.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    template.render().map(Html).map_err(|e| {
        tracing::error!("Falha ao renderizar template: {}", e);
        AppError::from(e)
    })
}
