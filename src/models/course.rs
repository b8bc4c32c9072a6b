// src/models/course.rs
use serde::Deserialize;
use sqlx::FromRow;

/// Linha da tabela `courses`. `students` é a lista de inscritos separada por vírgulas.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub faculty: String,
    pub course_name: String,
    pub slot: String,
    pub students: String,
}

/// Curso pronto para exibição, com a lista de inscritos já separada.
#[derive(Debug, Clone)]
pub struct CourseView {
    pub id: i64,
    pub faculty: String,
    pub course_name: String,
    pub slot: String,
    pub students: Vec<String>,
}

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        let students = Roster::parse(&course.students).into_students();
        CourseView {
            id: course.id,
            faculty: course.faculty,
            course_name: course.course_name,
            slot: course.slot,
            students,
        }
    }
}

/// Uma oferta de uma disciplina (docente + horário), usada na escolha do estudante.
#[derive(Debug, Clone)]
pub struct Offering {
    pub id: i64,
    pub faculty: String,
    pub course_name: String,
    pub slot: String,
    /// O estudante que está a ver a página já está inscrito nesta oferta
    pub enrolled: bool,
}

impl Offering {
    pub fn for_student(course: Course, student: &str) -> Self {
        let enrolled = Roster::parse(&course.students).contains(student);
        Offering {
            id: course.id,
            faculty: course.faculty,
            course_name: course.course_name,
            slot: course.slot,
            enrolled,
        }
    }
}

pub const ROSTER_SEPARATOR: char = ',';

/// Lista de inscritos guardada como texto delimitado.
///
/// Um username que contenha `,` fica partido em dois ao ler a lista.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Roster::default();
        }
        Roster(raw.split(ROSTER_SEPARATOR).map(str::to_string).collect())
    }

    /// Pertença exata (elemento a elemento), nunca substring.
    pub fn contains(&self, username: &str) -> bool {
        self.0.iter().any(|s| s == username)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_students(self) -> Vec<String> {
        self.0
    }
}

// Formulário de criação de curso (dashboard do docente)
#[derive(Debug, Deserialize)]
pub struct CreateCourseForm {
    pub course_name: String,
    pub time_slot: String,
}

/// Campos que o dashboard do estudante pode receber. Qual está presente decide a ação.
#[derive(Debug, Default, Deserialize)]
pub struct StudentForm {
    pub subject: Option<String>,
    pub course_id: Option<i64>,
}

/// Ação pedida no dashboard do estudante, resolvida uma única vez à entrada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentAction {
    ListSubjects,
    ListFaculty { subject: String },
    Enroll { course_id: i64 },
}

impl From<StudentForm> for StudentAction {
    fn from(form: StudentForm) -> Self {
        // Se vierem os dois campos, a inscrição tem prioridade
        match (form.course_id, form.subject) {
            (Some(course_id), _) => StudentAction::Enroll { course_id },
            (None, Some(subject)) => StudentAction::ListFaculty { subject },
            (None, None) => StudentAction::ListSubjects,
        }
    }
}

/// Resultado de um pedido de inscrição.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
    CourseNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_an_empty_roster() {
        let roster = Roster::parse("");
        assert!(roster.is_empty());
        assert!(!roster.contains(""));
    }

    #[test]
    fn membership_is_exact_not_substring() {
        let roster = Roster::parse("alice,bob");
        assert!(roster.contains("alice"));
        assert!(roster.contains("bob"));
        assert!(!roster.contains("ali"));
        assert!(!roster.contains("alice,bob"));
    }

    #[test]
    fn offering_marks_enrollment_of_the_viewer() {
        let course = Course {
            id: 1,
            faculty: "prof".into(),
            course_name: "Algorithms".into(),
            slot: "Mon-10am".into(),
            students: "alice,bob".into(),
        };
        assert!(Offering::for_student(course.clone(), "bob").enrolled);
        assert!(!Offering::for_student(course, "carol").enrolled);
    }

    #[test]
    fn course_view_splits_the_roster() {
        let view = CourseView::from(Course {
            id: 7,
            faculty: "prof".into(),
            course_name: "Algorithms".into(),
            slot: "Mon-10am".into(),
            students: "alice,bob".into(),
        });
        assert_eq!(view.students, vec!["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn student_action_from_form_fields() {
        assert_eq!(StudentAction::from(StudentForm::default()), StudentAction::ListSubjects);
        assert_eq!(
            StudentAction::from(StudentForm { subject: Some("Algorithms".into()), course_id: None }),
            StudentAction::ListFaculty { subject: "Algorithms".into() }
        );
        assert_eq!(
            StudentAction::from(StudentForm { subject: Some("Algorithms".into()), course_id: Some(3) }),
            StudentAction::Enroll { course_id: 3 }
        );
    }
}
