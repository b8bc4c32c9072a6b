// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado por todos os handlers (construído uma vez no arranque)
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    // Custo do bcrypt para novas contas (baixo nos testes)
    pub bcrypt_cost: u32,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
