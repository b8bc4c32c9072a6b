// src/lib.rs
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod web;

use crate::{config::Config, error::AppResult, state::AppState};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions_sqlx_store::SqliteStore;

/// Aplicação pronta a servir: router com middlewares, store de sessões e pool da DB.
pub struct Application {
    pub router: Router,
    pub session_store: SqliteStore,
    pub db_pool: SqlitePool,
}

/// Liga à base de dados (migrações + reset de `courses`), prepara as sessões e monta o router.
pub async fn build_app(config: &Config) -> AppResult<Application> {
    let db_pool = db::create_db_pool(config).await?;

    let session_store = web::session::create_session_store(&db_pool).await?;
    let session_layer = web::session::create_session_layer(session_store.clone(), config);
    tracing::info!("🔑 Camada de sessão configurada.");

    let app_state = AppState {
        db_pool: db_pool.clone(),
        bcrypt_cost: config.bcrypt_cost,
    };

    let router = web::routes::create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(session_layer),
    );

    Ok(Application { router, session_store, db_pool })
}
