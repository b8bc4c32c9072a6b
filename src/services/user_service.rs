// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::User,
    services::auth_service,
};
use sqlx::SqlitePool;

/// Busca um utilizador pelo username e role (a role faz parte da chave do login).
pub async fn find_user_by_username_and_role(
    db_pool: &SqlitePool,
    username: &str,
    role: &str,
) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador '{}' com role '{}'", username, role);
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, role, created_at
        FROM users
        WHERE username = ?1 AND role = ?2
        "#,
    )
    .bind(username)
    .bind(role)
    .fetch_optional(db_pool)
    .await?;

    if user.is_some() {
        tracing::debug!("Utilizador '{}' encontrado.", username);
    } else {
        tracing::debug!("Utilizador '{}' não encontrado.", username);
    }
    Ok(user)
}

/// Cria um utilizador. Não há validação da força da senha nem do valor da role.
/// Um username repetido devolve `AppError::UsernameTaken` e não altera a linha existente.
pub async fn create_user(
    db_pool: &SqlitePool,
    username: &str,
    raw_password: &str,
    role: &str,
    bcrypt_cost: u32,
) -> AppResult<i64> {
    tracing::info!("Tentando criar utilizador '{}' (role '{}')", username, role);
    let password_hash = auth_service::hash_password(raw_password, bcrypt_cost).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password, role)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(username)
    .bind(&password_hash)
    .bind(role)
    .execute(db_pool)
    .await;

    match result {
        Ok(done) => {
            let id = done.last_insert_rowid();
            tracing::info!("✅ Utilizador '{}' criado com id {}.", username, id);
            Ok(id)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao criar user: username '{}' já existe.", username);
            Err(AppError::UsernameTaken(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
