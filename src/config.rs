// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr, str::FromStr};

/// Configuração da aplicação, lida das variáveis de ambiente (e do `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Apaga e recria a tabela `courses` no arranque (perde todos os cursos!)
    pub reset_courses_on_start: bool,
    pub bcrypt_cost: u32,
    pub session_expiry_hours: i64,
    pub session_secure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://database.db".to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            reset_courses_on_start: true,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            session_expiry_hours: 24,
            session_secure_cookie: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Constrói a configuração a partir de uma função de lookup (facilita os testes).
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: parse_or("BIND_ADDR", &lookup, defaults.bind_addr)?,
            reset_courses_on_start: parse_bool_or(
                "COURSES_RESET_ON_START",
                &lookup,
                defaults.reset_courses_on_start,
            )?,
            bcrypt_cost: parse_or("BCRYPT_COST", &lookup, defaults.bcrypt_cost)?,
            session_expiry_hours: parse_or(
                "SESSION_EXPIRY_HOURS",
                &lookup,
                defaults.session_expiry_hours,
            )?,
            session_secure_cookie: parse_bool_or(
                "SESSION_SECURE_COOKIE",
                &lookup,
                defaults.session_secure_cookie,
            )?,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{key} inválido: '{raw}'"))),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(key: &str, lookup: &F, default: bool) -> AppResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1") | Some("true") | Some("yes") | Some("on") => Ok(true),
        Some("0") | Some("false") | Some("no") | Some("off") => Ok(false),
        Some(other) => Err(AppError::ConfigError(format!("{key} inválido: '{other}'"))),
    }
}
