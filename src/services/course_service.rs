// src/services/course_service.rs
use crate::{
    error::AppResult,
    models::course::{Course, EnrollOutcome},
};
use sqlx::SqlitePool;

/// Cria um curso para o docente, com a lista de inscritos vazia.
pub async fn create_course(
    db_pool: &SqlitePool,
    faculty: &str,
    course_name: &str,
    slot: &str,
) -> AppResult<i64> {
    tracing::info!("Docente '{}' a criar curso '{}' ({})", faculty, course_name, slot);
    let id = sqlx::query(
        r#"
        INSERT INTO courses (faculty, course_name, slot, students)
        VALUES (?1, ?2, ?3, '')
        "#,
    )
    .bind(faculty)
    .bind(course_name)
    .bind(slot)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("✅ Curso {} criado.", id);
    Ok(id)
}

/// Todos os cursos de um docente.
pub async fn list_courses_by_faculty(db_pool: &SqlitePool, faculty: &str) -> AppResult<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(
        r#"
        SELECT id, faculty, course_name, slot, students
        FROM courses
        WHERE faculty = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(faculty)
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} cursos para '{}'.", courses.len(), faculty);
    Ok(courses)
}

/// Catálogo de disciplinas: nomes de curso distintos.
pub async fn list_subjects(db_pool: &SqlitePool) -> AppResult<Vec<String>> {
    let subjects = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT course_name FROM courses ORDER BY course_name ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(subjects)
}

/// Todas as ofertas (docente + horário) de uma disciplina.
pub async fn list_offerings_for_subject(db_pool: &SqlitePool, subject: &str) -> AppResult<Vec<Course>> {
    let offerings = sqlx::query_as::<_, Course>(
        r#"
        SELECT id, faculty, course_name, slot, students
        FROM courses
        WHERE course_name = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(subject)
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("{} oferta(s) para a disciplina '{}'.", offerings.len(), subject);
    Ok(offerings)
}

/// Inscreve o estudante num curso.
///
/// A verificação "já inscrito" e o acrescento são um único UPDATE condicional:
/// dois pedidos concorrentes do mesmo estudante não duplicam a entrada.
/// A pertença compara elementos inteiros da lista (`,alice,` dentro de `,bob,alice,`).
pub async fn enroll_student(db_pool: &SqlitePool, course_id: i64, student: &str) -> AppResult<EnrollOutcome> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE courses
        SET students = CASE WHEN students = '' THEN ?1 ELSE students || ',' || ?1 END
        WHERE id = ?2
          AND instr(',' || students || ',', ',' || ?1 || ',') = 0
        "#,
    )
    .bind(student)
    .bind(course_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected > 0 {
        tracing::info!("✅ '{}' inscrito no curso {}.", student, course_id);
        return Ok(EnrollOutcome::Enrolled);
    }

    let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE id = ?1")
        .bind(course_id)
        .fetch_one(db_pool)
        .await?;

    if exists > 0 {
        tracing::debug!("'{}' já estava inscrito no curso {}.", student, course_id);
        Ok(EnrollOutcome::AlreadyEnrolled)
    } else {
        tracing::warn!("Inscrição de '{}' num curso inexistente ({}).", student, course_id);
        Ok(EnrollOutcome::CourseNotFound)
    }
}

/// Cursos em que o estudante está inscrito. Percorre a tabela toda (sem índice).
pub async fn list_courses_for_student(db_pool: &SqlitePool, student: &str) -> AppResult<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(
        r#"
        SELECT id, faculty, course_name, slot, students
        FROM courses
        WHERE students <> ''
          AND instr(',' || students || ',', ',' || ?1 || ',') > 0
        ORDER BY id ASC
        "#,
    )
    .bind(student)
    .fetch_all(db_pool)
    .await?;
    Ok(courses)
}
