// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult, INVALID_CREDENTIALS_MESSAGE, USERNAME_TAKEN_MESSAGE},
    models::user::{CredentialsForm, CurrentUser, Role},
    services::{auth_service, user_service},
    state::AppState,
    templates::{render, IndexPage, LoginPage, RegisterPage},
    web::session,
};
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Deserialize, Debug)]
pub struct FeedbackParams {
    success: Option<String>,
}

// GET /
pub async fn home_page(session: Session) -> AppResult<impl IntoResponse> {
    let current_user = session::current_user(&session).await?;
    render(&IndexPage { current_user })
}

// GET /register
pub async fn show_register_form() -> AppResult<impl IntoResponse> {
    render(&RegisterPage { error: None })
}

// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    tracing::info!("POST /register: '{}' (role '{}')", form.username, form.role);

    match user_service::create_user(
        &state.db_pool,
        &form.username,
        &form.password,
        &form.role,
        state.bcrypt_cost,
    )
    .await
    {
        Ok(_) => {
            let msg = format!("Conta '{}' criada. Pode entrar.", form.username);
            Ok(Redirect::to(&format!("/login?success={}", urlencoding::encode(&msg))).into_response())
        }
        Err(AppError::UsernameTaken(_)) => {
            // Mostra o erro na própria página, sem redirecionar
            let page = RegisterPage { error: Some(USERNAME_TAKEN_MESSAGE.to_string()) };
            Ok((StatusCode::CONFLICT, render(&page)?).into_response())
        }
        Err(e) => Err(e),
    }
}

// GET /login
pub async fn show_login_form(
    session: Session,
    Query(params): Query<FeedbackParams>,
) -> AppResult<Response> {
    if let Some(user) = session::current_user(&session).await? {
        tracing::debug!("GET /login: '{}' já logado, redirecionando.", user.username);
        return Ok(Redirect::to(Role::dashboard_for(&user.role)).into_response());
    }

    let page = LoginPage { error: None, success: params.success };
    Ok(render(&page)?.into_response())
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    tracing::info!("Tentativa de login para '{}' como '{}'", form.username, form.role);

    match auth_service::authenticate(&state.db_pool, &form.username, &form.password, &form.role).await {
        Ok(user) => {
            let dashboard = Role::dashboard_for(&user.role);
            session::sign_in(
                &session,
                &CurrentUser { username: user.username, role: user.role },
            )
            .await?;

            tracing::info!("✅ Login bem-sucedido para '{}'", form.username);
            Ok(Redirect::to(dashboard).into_response())
        }
        Err(AppError::InvalidCredentials) => {
            // Mensagem genérica: não distingue utilizador inexistente, role errada ou senha errada
            let page = LoginPage { error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()), success: None };
            Ok((StatusCode::UNAUTHORIZED, render(&page)?).into_response())
        }
        Err(e) => {
            tracing::error!("Erro ao autenticar '{}': {:?}", form.username, e);
            Err(e)
        }
    }
}

// GET /logout
pub async fn handle_logout(session: Session) -> AppResult<Redirect> {
    let user = session::current_user(&session).await.ok().flatten();

    session::sign_out(&session).await?;

    match user {
        Some(user) => tracing::info!("🚪 Utilizador '{}' desligado.", user.username),
        None => tracing::info!("🚪 Sessão anónima desligada."),
    }

    Ok(Redirect::to("/"))
}
