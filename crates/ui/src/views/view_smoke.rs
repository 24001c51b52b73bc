use course_core::model::StudentId;

use super::test_harness::{Start, setup_offline_harness, setup_view_harness};
use crate::routes::View;

#[test]
fn dashboard_smoke_lists_students_needing_attention() {
    let harness = setup_view_harness(Start::View(View::Dashboard));
    let html = harness.render();

    assert!(html.contains("Course Home"), "missing header in {html}");
    assert!(html.contains("Students at risk"), "missing at-risk card in {html}");
    assert!(html.contains("Carlos Martínez"), "missing at-risk student in {html}");
    assert!(html.contains("68%"), "missing average progress in {html}");
    assert!(html.contains("Pending submissions"), "missing pending card in {html}");
    assert!(html.contains("1 in Proyecto de Módulo 2"), "missing pending breakdown in {html}");
    assert!(html.contains("Active today"), "missing active card in {html}");
    assert!(html.contains("2024-07-23 11:45"), "missing latest activity in {html}");
}

#[test]
fn speed_grader_smoke_selects_first_submission() {
    let harness = setup_view_harness(Start::View(View::SpeedGrader));
    let html = harness.render();

    assert!(html.contains("Tarea 1 - Primeros Pasos"), "missing assignment in {html}");
    assert!(html.contains("Ana López"), "missing first student in {html}");
    assert!(html.contains("View rubric"), "missing rubric button in {html}");
    assert!(html.contains("Excelente trabajo, muy detallado."), "missing feedback in {html}");
    assert!(!html.contains("Grading rubric"), "rubric modal should start closed: {html}");
}

#[test]
fn gradebook_smoke_renders_finals_and_hidden_cells() {
    let harness = setup_view_harness(Start::View(View::Gradebook));
    let html = harness.render();

    assert!(html.contains("88.8%"), "missing Ana's final grade in {html}");
    assert!(html.contains("50.0%"), "missing Carlos' final grade in {html}");
    assert!(html.contains("Hidden"), "missing hidden cell in {html}");
}

#[test]
fn student_list_smoke_renders_roster() {
    let harness = setup_view_harness(Start::View(View::Students));
    let html = harness.render();

    assert!(html.contains("Student List"), "missing header in {html}");
    assert!(html.contains("laura.r@example.com"), "missing roster email in {html}");
}

#[test]
fn student_detail_smoke_shows_grades() {
    let harness = setup_view_harness(Start::Student(StudentId::new(2)));
    let html = harness.render();

    assert!(html.contains("Student Detail"), "missing header in {html}");
    assert!(html.contains("Juan Pérez"), "missing student name in {html}");
    assert!(html.contains("71.9%"), "missing final grade in {html}");
}

#[test]
fn unknown_student_renders_not_found() {
    let harness = setup_view_harness(Start::Student(StudentId::new(99)));
    let html = harness.render();

    assert!(html.contains("That record no longer exists."), "missing error in {html}");
}

#[test]
fn content_form_smoke_renders_form() {
    let harness = setup_view_harness(Start::ContentForm);
    let html = harness.render();

    assert!(html.contains("Content Form"), "missing header in {html}");
    assert!(html.contains("Create / Edit Content"), "missing form title in {html}");
    assert!(!html.contains("YouTube URL"), "no type chosen yet: {html}");
}

#[test]
fn content_smoke_lists_modules_and_locks() {
    let harness = setup_view_harness(Start::View(View::Content));
    let html = harness.render();

    assert!(html.contains("Módulo 2: Modelado 3D"), "missing module in {html}");
    assert!(html.contains("Quiz de Modelado"), "missing lesson in {html}");
    assert!(html.contains("(locked)"), "missing lock marker in {html}");
}

#[test]
fn settings_smoke_includes_audit_log_tab() {
    let harness = setup_view_harness(Start::View(View::Settings));
    let html = harness.render();

    assert!(html.contains("Audit log"), "missing audit tab in {html}");
    assert!(html.contains("2024-07-22 18:00"), "missing oldest audit entry in {html}");
    assert!(
        html.contains("Juan Asistente"),
        "missing audit or staff entry in {html}"
    );
    assert!(html.contains("Co-instructor"), "missing role option in {html}");
    assert!(html.contains("2024-08-20"), "missing due date in {html}");
}

#[test]
fn settings_shows_error_when_audit_log_fails() {
    let harness = setup_offline_harness(Start::View(View::Settings));
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
}

#[test]
fn inbox_smoke_marks_unread_messages() {
    let harness = setup_view_harness(Start::View(View::Inbox));
    let html = harness.render();

    assert!(html.contains("1 unread"), "missing unread count in {html}");
    assert!(html.contains("message unread"), "missing unread style in {html}");
    assert!(html.contains("Pregunta sobre el Proyecto Final"), "missing subject in {html}");
}

#[test]
fn announcements_smoke_shows_schedule() {
    let harness = setup_view_harness(Start::View(View::Announcements));
    let html = harness.render();

    assert!(html.contains("¡Bienvenidos al curso!"), "missing announcement in {html}");
    assert!(html.contains("Scheduled for 2024-07-25 10:00"), "missing schedule in {html}");
}

#[test]
fn question_bank_smoke_lists_options() {
    let harness = setup_view_harness(Start::View(View::QuestionBank));
    let html = harness.render();

    assert!(html.contains("Intersección"), "missing option in {html}");
    assert!(html.contains("Type: Short answer, Answer: Plano XY"), "missing detail in {html}");
}

#[test]
fn groups_smoke_uses_roster_names() {
    let harness = setup_view_harness(Start::View(View::Groups));
    let html = harness.render();

    assert!(html.contains("Equipo Gamma"), "missing group in {html}");
    assert!(html.contains("Carlos Martínez"), "missing member name in {html}");
}

#[test]
fn groups_render_error_when_roster_fails() {
    let harness = setup_offline_harness(Start::View(View::Groups));
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
}

#[test]
fn recycle_bin_smoke_shows_retention() {
    let harness = setup_view_harness(Start::View(View::RecycleBin));
    let html = harness.render();

    assert!(html.contains("after 30 days"), "missing retention note in {html}");
    assert!(html.contains("purged on 2024-08-20"), "missing purge date in {html}");
}

#[test]
fn forum_and_gallery_smoke() {
    let forum = setup_view_harness(Start::View(View::Forum)).render();
    assert!(forum.contains("Pinned"), "missing pinned badge in {forum}");
    assert!(forum.contains("3 replies"), "missing reply count in {forum}");

    let gallery = setup_view_harness(Start::View(View::Gallery)).render();
    assert!(gallery.contains("Modelo de Dron"), "missing project in {gallery}");
    assert!(
        gallery.contains("https://picsum.photos/seed/proj3/400/300"),
        "missing image in {gallery}"
    );
}

#[test]
fn analytics_smoke_flags_problem_lessons() {
    let harness = setup_view_harness(Start::View(View::Analytics));
    let html = harness.render();

    assert!(html.contains("Problem lessons"), "missing card in {html}");
    assert!(html.contains("Tarea 1 - Primeros Pasos (0% completed)"), "missing flag in {html}");
    assert!(html.contains("Last connection: 2024-07-15"), "missing inactive student in {html}");
}

#[test]
fn calendar_smoke_renders_month_with_due_date() {
    let harness = setup_view_harness(Start::View(View::Calendar));
    let html = harness.render();

    assert!(html.contains("July 2024"), "missing month title in {html}");
    assert!(html.contains("Tarea 1 due"), "missing due date in {html}");
    assert!(html.contains("day today"), "missing today marker in {html}");
}

#[test]
fn dashboard_renders_error_when_activity_fails() {
    let harness = setup_offline_harness(Start::View(View::Dashboard));
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
    assert!(!html.contains("Students at risk"), "stats should be hidden: {html}");
}
