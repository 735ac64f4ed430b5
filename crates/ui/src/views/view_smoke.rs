use review_core::{
    CONFIRMATION_MESSAGE, EditorId, LectureId, OptionKey, OutputPanel, QuestionId, QuizSession,
};

use super::test_harness::{Preset, ViewKind, setup_view_harness, test_services};

#[tokio::test(flavor = "current_thread")]
async fn lecture_page_renders_one_active_tab() {
    let services = test_services().await;
    let mut harness =
        setup_view_harness(services, ViewKind::Lecture(LectureId::new(2)), Preset::default());
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("nav-tab active").count(), 1, "in {html}");
    assert!(html.contains("id=\"lecture-2\""), "missing panel in {html}");
    assert!(html.contains("Linked Lists"), "missing title in {html}");
    assert!(html.contains("Question 3: Multiple Choice"), "missing quiz in {html}");
    assert!(html.contains("id=\"editor-2\""), "missing editor in {html}");
    assert!(html.contains("id=\"output-2\""), "missing output in {html}");
    assert!(!html.contains("search-results"), "blank search shows results in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_root_takes_keyboard_focus() {
    let services = test_services().await;
    let mut harness =
        setup_view_harness(services, ViewKind::Lecture(LectureId::new(1)), Preset::default());
    harness.rebuild();
    let html = harness.render();

    let root = html.find("id=\"review-root\"").expect("review root");
    let tag_start = html[..root].rfind('<').expect("root tag start");
    let tag_end = root + html[root..].find('>').expect("root tag end");
    assert!(
        html[tag_start..tag_end].contains("tabindex=\"0\""),
        "root is not focusable in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn code_listing_is_highlighted_with_copy_button() {
    let services = test_services().await;
    let mut harness =
        setup_view_harness(services, ViewKind::Lecture(LectureId::new(1)), Preset::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("copy-btn"), "missing copy button in {html}");
    assert!(html.contains("hl-"), "missing highlight classes in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lecture_falls_back_to_first() {
    let services = test_services().await;
    let mut harness =
        setup_view_harness(services, ViewKind::Lecture(LectureId::new(99)), Preset::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"lecture-1\""), "missing first lecture in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn locked_question_shows_feedback_and_marks() {
    let services = test_services().await;
    let course = services.course();
    let question = course.question(QuestionId::new(3)).expect("question 3");
    let mut quiz = QuizSession::new();
    quiz.submit_choice(question, Some(OptionKey::new('c')))
        .expect("submit");

    let preset = Preset {
        quiz,
        ..Preset::default()
    };
    let mut harness = setup_view_harness(services.clone(), ViewKind::Lecture(LectureId::new(2)), preset);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("✗ Incorrect"), "missing banner in {html}");
    assert!(html.contains("Correct Answer: A) O(1)"), "missing correct label in {html}");
    assert!(html.contains("option correct"), "missing correct mark in {html}");
    assert!(html.contains("option incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("feedback show incorrect"), "feedback hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn output_region_renders_panel_lines() {
    let services = test_services().await;
    let mut panel = OutputPanel::render("3 2 1\n", true);
    panel.confirm();
    let preset = Preset {
        outputs: vec![(EditorId::new(2), panel)],
        ..Preset::default()
    };
    let mut harness = setup_view_harness(services, ViewKind::Lecture(LectureId::new(2)), preset);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("3 2 1"), "missing output in {html}");
    assert!(html.contains(CONFIRMATION_MESSAGE), "missing confirmation in {html}");
    assert!(html.contains("output-line--success"), "missing success tone in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_reopens_last_viewed_lecture() {
    let services = test_services().await;
    services
        .progress()
        .record_lecture_viewed(LectureId::new(3))
        .await
        .expect("record view");

    let mut harness = setup_view_harness(services, ViewKind::Home, Preset::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("id=\"lecture-3\""), "missing lecture 3 in {html}");
}
