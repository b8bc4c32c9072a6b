// src/models/registration.rs
use sqlx::FromRow;

// Linha da tabela `registrations`. Nenhuma migração cria esta tabela.
#[derive(Debug, Clone, FromRow)]
pub struct Registration {
    pub student_name: String,
    pub reg_no: String,
    pub email: String,
}

// Dados extra do perfil do estudante usados no registo alternativo
#[derive(Debug, Clone, FromRow)]
pub struct StudentProfile {
    pub username: String,
    pub name: String,
    pub reg_no: String,
    pub email: String,
}
