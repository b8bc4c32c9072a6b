// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::User,
    services::user_service,
};
use sqlx::SqlitePool;

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt (irreversível) para uma senha com o custo indicado.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt (custo {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Autentica por username + role + senha.
///
/// A role faz parte da chave de pesquisa: a role errada falha da mesma forma que
/// uma senha errada. Todas as falhas resultam em `AppError::InvalidCredentials`.
pub async fn authenticate(
    db_pool: &SqlitePool,
    username: &str,
    password: &str,
    role: &str,
) -> AppResult<User> {
    let Some(user) = user_service::find_user_by_username_and_role(db_pool, username, role).await? else {
        tracing::warn!("Login falhou para '{}': sem utilizador com role '{}'.", username, role);
        return Err(AppError::InvalidCredentials);
    };

    if verify_password(password, &user.password_hash).await? {
        Ok(user)
    } else {
        tracing::warn!("Senha incorreta para '{}'.", username);
        Err(AppError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_one_way_and_only_matches_the_original() {
        let hash = hash_password("segredo123", 4).await.unwrap();
        assert_ne!(hash, "segredo123");
        assert!(!hash.contains("segredo123"));
        assert!(verify_password("segredo123", &hash).await.unwrap());
        assert!(!verify_password("segredo124", &hash).await.unwrap());
        assert!(!verify_password("", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_differently() {
        let a = hash_password("igual", 4).await.unwrap();
        let b = hash_password("igual", 4).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_hash_is_a_hashing_error() {
        let result = verify_password("x", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AppError::PasswordHashingError)));
    }
}
