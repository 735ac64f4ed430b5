use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use review_core::{Course, EditorId, LectureId, OutputPanel, QuizSession};
use services::{
    AppServices, CodeExecutor, CourseSource, ExecutionError, ExecutionResponse, ProgressService,
    RunCoordinator,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{ReviewHome, ReviewPage, ReviewState};

struct SilentExecutor;

#[async_trait]
impl CodeExecutor for SilentExecutor {
    async fn execute(&self, _code: &str) -> Result<ExecutionResponse, ExecutionError> {
        Ok(ExecutionResponse::default())
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn course(&self) -> Arc<Course> {
        self.services.course()
    }

    fn run_coordinator(&self) -> Arc<RunCoordinator> {
        self.services.run_coordinator()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lecture(LectureId),
}

/// Page-session state to start the view with.
#[derive(Clone, Default)]
pub struct Preset {
    pub quiz: QuizSession,
    pub outputs: Vec<(EditorId, OutputPanel)>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    preset: Preset,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let preset = props.preset.clone();
    use_context_provider(move || ReviewState {
        quiz: Signal::new(preset.quiz),
        short_answers: Signal::new(Default::default()),
        drafts: Signal::new(Default::default()),
        outputs: Signal::new(preset.outputs.into_iter().collect()),
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { ReviewHome {} },
        ViewKind::Lecture(lecture) => rsx! { ReviewPage { lecture } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn test_services() -> AppServices {
    AppServices::in_memory(Arc::new(SilentExecutor), &CourseSource::Builtin)
        .await
        .expect("build services")
}

pub fn setup_view_harness(services: AppServices, view: ViewKind, preset: Preset) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, preset });
    ViewHarness { dom, services }
}
