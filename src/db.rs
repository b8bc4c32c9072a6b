// src/db.rs
use crate::{config::Config, error::AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Abre o pool SQLite, aplica as migrações e (se configurado) recria a tabela `courses`.
pub async fn create_db_pool(config: &Config) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    if config.reset_courses_on_start {
        reset_courses_table(&pool).await?;
    } else {
        ensure_courses_table(&pool).await?;
    }

    Ok(pool)
}

const CREATE_COURSES_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        faculty TEXT NOT NULL,
        course_name TEXT NOT NULL,
        slot TEXT NOT NULL,
        students TEXT NOT NULL DEFAULT ''
    )
"#;

/// Apaga e recria a tabela `courses`. Todos os cursos e inscrições são perdidos;
/// a tabela `users` não é tocada.
pub async fn reset_courses_table(pool: &SqlitePool) -> AppResult<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'courses'")
        .fetch_one(pool)
        .await?;

    let discarded: i64 = if existing > 0 {
        sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(pool)
            .await?
    } else {
        0
    };

    tracing::warn!(
        "⚠️ A recriar a tabela 'courses' no arranque: {} curso(s) e respetivas inscrições serão descartados.",
        discarded
    );

    let mut tx = pool.begin().await?;
    sqlx::query("DROP TABLE IF EXISTS courses")
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_COURSES_SQL).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("Tabela 'courses' recriada.");
    Ok(())
}

/// Garante que a tabela `courses` existe, sem apagar dados.
pub async fn ensure_courses_table(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("COURSES_RESET_ON_START desativado, a preservar a tabela 'courses'.");
    sqlx::query(CREATE_COURSES_SQL).execute(pool).await?;
    Ok(())
}
