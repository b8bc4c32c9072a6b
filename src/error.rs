// src/error.rs
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Username já existe: {0}")]
    UsernameTaken(String),

    #[error("Erro na sessão: {0}")]
    SessionError(String),

    #[error("Erro ao renderizar template: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UsernameTaken(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem segura para mostrar ao utilizador (sem detalhes internos).
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => "Erro ao aceder aos dados.",
            AppError::ConfigError(_) => "Erro de configuração.",
            AppError::PasswordHashingError => "Erro ao processar credenciais.",
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AppError::UsernameTaken(_) => USERNAME_TAKEN_MESSAGE,
            AppError::SessionError(_) => "Erro na gestão da sua sessão.",
            AppError::TemplateError(_) => "Erro ao carregar a página.",
            AppError::InternalServerError => "Ocorreu um erro inesperado.",
        }
    }
}

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists! Choose a different one.";

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let status = self.status_code();
        let user_message = self.user_message();

        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Erro {status_code}</h1><p>{message}</p><a href="javascript:history.back()">Voltar</a></body></html>
         "#, status_code=status.as_u16(), message=user_message))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
