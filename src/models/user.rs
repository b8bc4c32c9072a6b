// src/models/user.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um utilizador lido da tabela 'users'
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub role: String, // Texto livre; "student" e "faculty" são os únicos com dashboard
    pub created_at: NaiveDateTime,
}

/// Roles que dão acesso a um dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    /// Dashboard para onde o login redireciona. Qualquer role que não seja
    /// "student" vai para o dashboard de docente.
    pub fn dashboard_for(role: &str) -> &'static str {
        if role == Role::Student.as_str() {
            "/student"
        } else {
            "/faculty"
        }
    }
}

// Formulário de registo e de login (mesmos campos)
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// O que fica guardado na sessão depois do login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: String,
}

impl CurrentUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role.as_str()
    }
}
