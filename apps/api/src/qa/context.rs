//! Rendering of the plain-text context block fed to the QA model.

use sqlx::FromRow;

/// The student columns the context block needs.
#[derive(Debug, FromRow)]
pub struct StudentContextRow {
    pub first_name: String,
    pub last_name: String,
    #[sqlx(rename = "class")]
    pub class_name: String,
}

/// The teacher columns the context block needs.
#[derive(Debug, FromRow)]
pub struct TeacherContextRow {
    pub first_name: String,
    pub last_name: String,
    pub subject: Option<String>,
}

/// Renders the context block: student section first, one blank line, then
/// the teacher section. Each row line ends with a newline. A teacher with
/// no subject on record reads as "teaches unknown".
pub fn build_context(students: &[StudentContextRow], teachers: &[TeacherContextRow]) -> String {
    let mut context = String::from("Students:\n");
    for s in students {
        context.push_str(&format!(
            "{} {} in class {}\n",
            s.first_name, s.last_name, s.class_name
        ));
    }

    context.push_str("\nTeachers:\n");
    for t in teachers {
        let subject = t.subject.as_deref().unwrap_or("unknown");
        context.push_str(&format!(
            "{} {} teaches {}\n",
            t.first_name, t.last_name, subject
        ));
    }

    context
}
