// src/web/session.rs
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::user::CurrentUser,
};
use sqlx::SqlitePool;
use time::Duration;
use tower_sessions::{Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

/// Chave da sessão onde fica o utilizador autenticado (username + role).
pub const SESSION_USER_KEY: &str = "user";

/// Cria o store de sessões na mesma base de dados (tabela `sessions`).
pub async fn create_session_store(db_pool: &SqlitePool) -> AppResult<SqliteStore> {
    let store = SqliteStore::new(db_pool.clone())
        .with_table_name("sessions")
        .map_err(|e| AppError::SessionError(format!("Falha ao criar session store: {}", e)))?;
    store.migrate().await?;
    Ok(store)
}

pub fn create_session_layer(store: SqliteStore, config: &Config) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_secure(config.session_secure_cookie)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(config.session_expiry_hours)))
}

/// Lê o utilizador autenticado da sessão, se existir.
pub async fn current_user(session: &Session) -> AppResult<Option<CurrentUser>> {
    session
        .get::<CurrentUser>(SESSION_USER_KEY)
        .await
        .map_err(|e| AppError::SessionError(format!("Erro ao ler sessão: {}", e)))
}

/// Inicia sessão: roda o ID (contra fixação de sessão) e guarda o utilizador.
pub async fn sign_in(session: &Session, user: &CurrentUser) -> AppResult<()> {
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao rodar ID: {}", e)))?;
    session
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao inserir na sessão: {}", e)))
}

/// Apaga a sessão inteira (dados e registo no store).
pub async fn sign_out(session: &Session) -> AppResult<()> {
    session
        .delete()
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao apagar sessão: {}", e)))
}
