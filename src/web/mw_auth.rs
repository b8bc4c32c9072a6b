// src/web/mw_auth.rs
use crate::{
    error::AppError,
    models::user::{CurrentUser, Role},
    web::session,
};
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

// Middleware que verifica se o utilizador está logado.
// Sem sessão válida -> redireciona para /login (sem mensagem de erro).
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session::current_user(&session).await? {
        Some(user) => {
            tracing::debug!("Autenticação MW: '{}' ({}) autenticado.", user.username, user.role);
            // Os handlers protegidos recebem o utilizador via Extension
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => {
            tracing::debug!("Autenticação MW: sem sessão. Redirecionando para /login");
            Ok(Redirect::to("/login").into_response())
        }
    }
}

/// Só docentes. Deve correr *depois* de `require_auth`.
pub async fn require_faculty(
    Extension(user): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Response {
    require_role(Role::Faculty, &user, request, next).await
}

/// Só estudantes. Deve correr *depois* de `require_auth`.
pub async fn require_student(
    Extension(user): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Response {
    require_role(Role::Student, &user, request, next).await
}

async fn require_role(role: Role, user: &CurrentUser, request: Request, next: Next) -> Response {
    if user.has_role(role) {
        next.run(request).await
    } else {
        tracing::warn!(
            "Acesso negado para '{}' (role '{}', precisa de '{}'). Redirecionando para /login",
            user.username,
            user.role,
            role.as_str()
        );
        Redirect::to("/login").into_response()
    }
}
