//! Seed data for the demo course ("Plataforma CAD").
//!
//! The desktop shell starts from this data; nothing is written back to disk.

use chrono::{NaiveDate, NaiveDateTime};
use course_core::model::{
    Announcement, Assignment, AssignmentId, CourseBoard, CourseModule, Criterion, ForumPost,
    GalleryProject, GradeCategory, GradebookItem, GradebookItemId, Lesson, LessonKind, Message,
    NewAuditEntry, Question, QuestionKind, Rating, RecycledItem, Rubric, Score, StaffMember,
    StaffRole, Student, StudentGroup, StudentId, Submission, Weight,
};
use thiserror::Error;

use crate::repository::{AuditLog, InMemoryRepository, Storage, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    #[error("invalid seed data: {0}")]
    Model(#[from] course_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Seed values are validated with the domain constructors.
type Seed<T> = Result<T, course_core::Error>;

pub const QUICK_COMMENTS: [&str; 5] = [
    "Excelente trabajo, muy bien estructurado.",
    "Buen análisis, pero faltan citar las fuentes.",
    "Revisa la ortografía y gramática.",
    "La conclusión podría ser más robusta.",
    "Asegúrate de seguir todos los puntos de la rúbrica.",
];

fn day(raw: &str) -> Seed<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

fn at(raw: &str) -> Seed<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")?)
}

fn score(value: f64) -> Seed<Option<Score>> {
    Ok(Some(Score::new(value)?))
}

fn student(
    id: u64,
    name: &str,
    email: &str,
    progress: u8,
    last_connection: &str,
    grades: [(&str, Option<Score>); 4],
    lessons: &[u64],
) -> Seed<Student> {
    let mut student = Student::new(
        StudentId::new(id),
        name,
        email,
        progress,
        day(last_connection)?,
    )?
    .with_completed_lessons(lessons.iter().copied());
    for (title, grade) in grades {
        student = student.with_grade(title, grade);
    }
    Ok(student)
}

fn students() -> Seed<Vec<Student>> {
    const T1: &str = "Tarea 1";
    const EP: &str = "Examen Parcial";
    const PF: &str = "Proyecto Final";
    const PM2: &str = "Proyecto de Módulo 2";

    Ok(vec![
        student(
            1,
            "Ana López",
            "ana.lopez@example.com",
            85,
            "2024-07-22",
            [(T1, score(90.0)?), (EP, score(85.0)?), (PF, score(95.0)?), (PM2, score(88.0)?)],
            &[101, 102, 201],
        )?,
        student(
            2,
            "Juan Pérez",
            "juan.perez@example.com",
            60,
            "2024-07-21",
            [(T1, score(75.0)?), (EP, score(65.0)?), (PF, None), (PM2, score(70.0)?)],
            &[101, 102],
        )?,
        student(
            3,
            "María García",
            "maria.garcia@example.com",
            95,
            "2024-07-23",
            [(T1, score(100.0)?), (EP, score(92.0)?), (PF, score(98.0)?), (PM2, score(100.0)?)],
            &[101, 102, 201, 202],
        )?,
        student(
            4,
            "Carlos Martínez",
            "carlos.martinez@example.com",
            30,
            "2024-07-15",
            [(T1, score(50.0)?), (EP, None), (PF, None), (PM2, None)],
            &[101],
        )?,
        student(
            5,
            "Laura Rodríguez",
            "laura.r@example.com",
            72,
            "2024-07-22",
            [(T1, score(80.0)?), (EP, score(70.0)?), (PF, score(85.0)?), (PM2, score(78.0)?)],
            &[101, 102, 201],
        )?,
    ])
}

fn graded(student: u64, file: &str, grade: f64, feedback: &str) -> Seed<Submission> {
    Ok(Submission::graded(
        StudentId::new(student),
        file,
        Score::new(grade)?,
        feedback,
    ))
}

fn assignments() -> Seed<Vec<(Assignment, Vec<Submission>)>> {
    Ok(vec![
        (
            Assignment::new(AssignmentId::new(1), "Tarea 1 - Primeros Pasos")?,
            vec![
                graded(
                    1,
                    "https://picsum.photos/seed/file1/800/600",
                    90.0,
                    "Excelente trabajo, muy detallado.",
                )?,
                Submission::ungraded(StudentId::new(2), "https://picsum.photos/seed/file2/800/600"),
                graded(
                    3,
                    "https://picsum.photos/seed/file3/800/600",
                    100.0,
                    "Perfecto, sin comentarios.",
                )?,
            ],
        ),
        (
            Assignment::new(AssignmentId::new(2), "Proyecto de Módulo 2")?,
            vec![Submission::ungraded(
                StudentId::new(1),
                "https://picsum.photos/seed/file4/800/600",
            )],
        ),
        (
            Assignment::new(AssignmentId::new(3), "Proyecto Final")?,
            Vec::new(),
        ),
    ])
}

fn rubrics() -> Seed<Vec<Rubric>> {
    let precision = Criterion::new(
        "c1",
        "Precisión del Modelo",
        10,
        vec![
            Rating::new("Excelente", 10),
            Rating::new("Bueno", 7),
            Rating::new("Necesita Mejora", 4),
        ],
    )?;
    let tools = Criterion::new(
        "c2",
        "Uso de Herramientas",
        5,
        vec![
            Rating::new("Experto", 5),
            Rating::new("Adecuado", 3),
            Rating::new("Básico", 1),
        ],
    )?;
    Ok(vec![Rubric::new(AssignmentId::new(1), vec![precision, tools])?])
}

fn gradebook_items() -> Seed<Vec<GradebookItem>> {
    let item = |id: u64,
                title: &str,
                weight: f64,
                due: &str,
                category: GradeCategory,
                published: bool|
     -> Seed<GradebookItem> {
        Ok(GradebookItem::new(
            GradebookItemId::new(id),
            title,
            Weight::new(weight)?,
            category,
            day(due)?,
            published,
        )?)
    };

    Ok(vec![
        item(1, "Tarea 1", 15.0, "2024-07-20", GradeCategory::Assignments, true)?,
        item(4, "Proyecto de Módulo 2", 25.0, "2024-08-01", GradeCategory::Projects, true)?,
        item(2, "Examen Parcial", 30.0, "2024-08-05", GradeCategory::Exams, false)?,
        item(3, "Proyecto Final", 30.0, "2024-08-20", GradeCategory::Projects, false)?,
    ])
}

fn audit_history() -> Seed<Vec<NewAuditEntry>> {
    let when = |raw: &str| at(raw).map(|naive| naive.and_utc());
    Ok(vec![
        NewAuditEntry::new(
            "Profesor Titular",
            "Changed the due date of \"Proyecto Final\" to 2024-08-25.",
            when("2024-07-22 18:00")?,
        ),
        NewAuditEntry::new(
            "Juan Asistente",
            "Created the announcement \"Recordatorio: Entrega Tarea 1\".",
            when("2024-07-23 09:15")?,
        ),
        NewAuditEntry::new(
            "Profesor Titular",
            "Graded \"Tarea 1 - Primeros Pasos\" for Ana López (90/100).",
            when("2024-07-23 11:45")?,
        ),
    ])
}

fn lesson(id: u64, title: &str, kind: LessonKind, is_locked: bool) -> Lesson {
    Lesson {
        id,
        title: title.to_owned(),
        kind,
        is_locked,
    }
}

fn modules() -> Vec<CourseModule> {
    vec![
        CourseModule {
            id: 1,
            title: "Módulo 1: Introducción a CAD".to_owned(),
            lessons: vec![
                lesson(101, "1.1 - ¿Qué es CAD?", LessonKind::Video, false),
                lesson(102, "1.2 - Interfaz del Software", LessonKind::Lecture, false),
                lesson(103, "Tarea 1 - Primeros Pasos", LessonKind::Assignment, false),
            ],
        },
        CourseModule {
            id: 2,
            title: "Módulo 2: Modelado 3D".to_owned(),
            lessons: vec![
                lesson(201, "2.1 - Sólidos Primitivos", LessonKind::Video, false),
                lesson(202, "2.2 - Operaciones Booleanas", LessonKind::Video, true),
                lesson(203, "Proyecto de Módulo 2", LessonKind::Project, true),
                lesson(204, "Quiz de Modelado", LessonKind::Quiz, true),
            ],
        },
    ]
}

fn announcement(
    id: u64,
    title: &str,
    content: &str,
    posted: &str,
    scheduled: Option<&str>,
) -> Seed<Announcement> {
    Ok(Announcement {
        id,
        title: title.to_owned(),
        content: content.to_owned(),
        posted_on: day(posted)?,
        scheduled_for: scheduled.map(at).transpose()?,
    })
}

fn announcements() -> Seed<Vec<Announcement>> {
    Ok(vec![
        announcement(
            1,
            "¡Bienvenidos al curso!",
            "Estoy muy emocionado de empezar este semestre con ustedes...",
            "2024-07-10",
            None,
        )?,
        announcement(
            2,
            "Actualización de Software",
            "Asegúrense de tener la última versión del software de CAD instalada antes de la clase del lunes.",
            "2024-07-18",
            None,
        )?,
        announcement(
            3,
            "Clase de repaso",
            "Tendremos una clase de repaso el próximo miércoles.",
            "2024-07-25",
            Some("2024-07-25 10:00"),
        )?,
    ])
}

fn questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            kind: QuestionKind::TrueFalse,
            text: "CAD significa \"Diseño Asistido por Computadora\".".to_owned(),
            options: Vec::new(),
            correct_answer: "Verdadero".to_owned(),
        },
        Question {
            id: 2,
            kind: QuestionKind::MultipleChoice,
            text: "¿Qué operación booleana combina dos sólidos en uno solo?".to_owned(),
            options: ["Unión", "Sustracción", "Intersección"].map(str::to_owned).to_vec(),
            correct_answer: "Unión".to_owned(),
        },
        Question {
            id: 3,
            kind: QuestionKind::ShortAnswer,
            text: "¿Cómo se llama el plano principal sobre el que se suele empezar a dibujar?"
                .to_owned(),
            options: Vec::new(),
            correct_answer: "Plano XY".to_owned(),
        },
    ]
}

fn groups() -> Vec<StudentGroup> {
    let group = |id, name: &str, members: &[u64]| StudentGroup {
        id,
        name: name.to_owned(),
        members: members.iter().copied().map(StudentId::new).collect(),
    };
    vec![
        group(1, "Equipo Alfa", &[1, 3]),
        group(2, "Equipo Beta", &[2, 5]),
        group(3, "Equipo Gamma", &[4]),
    ]
}

fn messages() -> Seed<Vec<Message>> {
    Ok(vec![
        Message {
            id: 1,
            from: "Ana López".to_owned(),
            subject: "Pregunta sobre el Proyecto Final".to_owned(),
            body: "Profesor, ¿podemos usar texturas personalizadas en el render final?".to_owned(),
            sent_at: at("2024-07-23 10:30")?,
            is_read: false,
        },
        Message {
            id: 2,
            from: "Administración".to_owned(),
            subject: "Actualización de la plataforma".to_owned(),
            body: "El sistema estará en mantenimiento este sábado de 2 a 4 AM.".to_owned(),
            sent_at: at("2024-07-22 15:00")?,
            is_read: true,
        },
    ])
}

fn staff() -> Vec<StaffMember> {
    let member = |id, name: &str, email: &str, role| StaffMember {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        role,
    };
    vec![
        member(1, "Profesor Titular", "prof.titular@example.com", StaffRole::Instructor),
        member(2, "Juan Asistente", "juan.asistente@example.com", StaffRole::Assistant),
        member(3, "Maria Colega", "maria.colega@example.com", StaffRole::CoInstructor),
    ]
}

fn recycled() -> Seed<Vec<RecycledItem>> {
    Ok(vec![
        RecycledItem {
            id: 1,
            name: "Borrador de Anuncio de Bienvenida".to_owned(),
            kind: "Anuncio".to_owned(),
            deleted_on: day("2024-07-21")?,
        },
        RecycledItem {
            id: 2,
            name: "Lección 1.3 - Ejemplos Prácticos".to_owned(),
            kind: "Lección".to_owned(),
            deleted_on: day("2024-07-20")?,
        },
    ])
}

fn forum() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: 1,
            author: "Juan Pérez".to_owned(),
            title: "Duda sobre Operaciones Booleanas".to_owned(),
            content: "No entiendo bien la diferencia entre unión e intersección, ¿alguien puede explicarlo?"
                .to_owned(),
            replies: 3,
            is_pinned: false,
            is_locked: false,
        },
        ForumPost {
            id: 2,
            author: "Profesor".to_owned(),
            title: "Recordatorio: Entrega Tarea 1".to_owned(),
            content: "Recuerden que la fecha límite para la Tarea 1 es este viernes. ¡No lo dejen para el último momento!"
                .to_owned(),
            replies: 0,
            is_pinned: true,
            is_locked: true,
        },
    ]
}

fn gallery() -> Vec<GalleryProject> {
    let project = |id, student: &str, title: &str| GalleryProject {
        id,
        student_name: student.to_owned(),
        title: title.to_owned(),
        image_url: format!("https://picsum.photos/seed/proj{id}/400/300"),
    };
    vec![
        project(1, "Juan Pérez", "Diseño de Silla Ergonómica"),
        project(2, "Laura Rodríguez", "Modelo de Dron"),
        project(3, "Carlos Martínez", "Prototipo de Carcasa"),
    ]
}

fn board() -> Seed<CourseBoard> {
    Ok(CourseBoard {
        title: "Diseño Asistido por Computadora (CAD)".to_owned(),
        modules: modules(),
        announcements: announcements()?,
        questions: questions(),
        groups: groups(),
        messages: messages()?,
        staff: staff(),
        recycled: recycled()?,
        forum: forum(),
        gallery: gallery(),
    })
}

/// Populate `repo` with the demo course.
///
/// # Errors
///
/// Returns `FixtureError` if any seed value fails domain validation.
pub fn seed(repo: &InMemoryRepository) -> Result<(), FixtureError> {
    for student in students()? {
        repo.insert_student(student)?;
    }
    for (assignment, submissions) in assignments()? {
        repo.insert_assignment(assignment, submissions)?;
    }
    for rubric in rubrics()? {
        repo.insert_rubric(rubric)?;
    }
    for item in gradebook_items()? {
        repo.insert_gradebook_item(item)?;
    }
    for entry in audit_history()? {
        repo.append(entry)?;
    }
    repo.set_quick_comments(QUICK_COMMENTS.iter().map(|c| (*c).to_owned()))?;
    repo.set_board(board()?)?;
    Ok(())
}

/// A fresh repository holding the demo course.
///
/// # Errors
///
/// Returns `FixtureError` if seeding fails.
pub fn seeded_repository() -> Result<InMemoryRepository, FixtureError> {
    let repo = InMemoryRepository::new();
    seed(&repo)?;
    Ok(repo)
}

impl Storage {
    /// In-memory storage pre-filled with the demo course.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if seeding fails.
    pub fn seeded() -> Result<Self, FixtureError> {
        Ok(Self::from_repository(&seeded_repository()?))
    }
}
