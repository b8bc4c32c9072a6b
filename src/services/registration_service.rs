// src/services/registration_service.rs
//
// Segundo mecanismo de inscrição, baseado numa tabela `registrations` que nenhuma
// migração cria (e em colunas de perfil que `users` não tem). Sem essa tabela
// estas funções devolvem sempre um erro da base de dados.
use crate::{
    error::AppResult,
    models::registration::{Registration, StudentProfile},
};
use sqlx::SqlitePool;

pub async fn list_registrations_for_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Vec<Registration>> {
    tracing::debug!("Buscando registos para o curso {}", course_id);
    let registrations = sqlx::query_as::<_, Registration>(
        "SELECT student_name, reg_no, email FROM registrations WHERE course_id = ?1",
    )
    .bind(course_id)
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Curso {}: {} registo(s).", course_id, registrations.len());
    Ok(registrations)
}

/// Regista o estudante no curso copiando os dados de perfil de `users`.
/// Devolve `false` se o estudante não existir.
pub async fn register_student_for_course(
    db_pool: &SqlitePool,
    student_username: &str,
    course_id: i64,
) -> AppResult<bool> {
    let profile = sqlx::query_as::<_, StudentProfile>(
        "SELECT username, name, reg_no, email FROM users WHERE username = ?1",
    )
    .bind(student_username)
    .fetch_optional(db_pool)
    .await?;

    let Some(profile) = profile else {
        tracing::warn!("Registo alternativo: estudante '{}' não encontrado.", student_username);
        return Ok(false);
    };

    tracing::info!(
        "Registando {} (nº {}) no curso {}",
        profile.name,
        profile.reg_no,
        course_id
    );

    sqlx::query(
        r#"
        INSERT INTO registrations (student_username, student_name, reg_no, email, course_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&profile.username)
    .bind(&profile.name)
    .bind(&profile.reg_no)
    .bind(&profile.email)
    .bind(course_id)
    .execute(db_pool)
    .await?;

    Ok(true)
}
