use crate::config::ViewerConfig;
use crate::course::{CourseTree, NavTarget, StatusFilter};
use crate::quiz::QuizSession;
use crate::view_models::LessonHeader;
use egui_commonmark::CommonMarkCache;

#[cfg(not(target_arch = "wasm32"))]
use crate::fetch::ContentSource;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod loading;
pub mod navigation;
pub mod route;
pub mod view_models;

pub use loading::{LoadRequest, PendingLoad};
pub use route::Route;

pub struct LessonPage {
    pub header: LessonHeader,
    pub markdown: String,
}

pub struct TestPage {
    pub session: QuizSession,
    /// Título de la lección a la que pertenece el test.
    pub lesson_title: String,
    /// Destino del botón "continuar" en la pantalla de resultado.
    pub after: NavTarget,
}

pub enum Page {
    Loading,
    KnowledgeBase,
    Tests,
    Lesson(LessonPage),
    Test(TestPage),
    /// Fallo al cargar el curso: no hay listado al que volver.
    Error(String),
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Loading => "cargando",
            Page::KnowledgeBase => "base de conocimiento",
            Page::Tests => "tests",
            Page::Lesson(_) => "lección",
            Page::Test(_) => "test",
            Page::Error(_) => "error",
        }
    }
}

pub struct ViewerApp {
    pub config: ViewerConfig,
    pub page: Page,
    pub course: Option<CourseTree>,
    /// Aviso que se muestra sobre la página (p. ej. el motivo de una redirección).
    pub message: String,
    pub test_filter: StatusFilter,
    pub dark_mode: bool,
    pub cm_cache: CommonMarkCache,
    /// Página a abrir cuando termine de cargar el curso.
    pending_route: Option<Route>,
    pending: Option<PendingLoad>,
    /// Para pedir un repintado cuando llega una carga en segundo plano.
    egui_ctx: Option<egui::Context>,
    #[cfg(not(target_arch = "wasm32"))]
    source: Arc<dyn ContentSource>,
}

impl ViewerApp {
    /// Crea la aplicación y lanza la carga de la estructura del curso.
    pub fn new(config: ViewerConfig, route: Route, egui_ctx: Option<egui::Context>) -> Self {
        log::info!(
            "Visor iniciado (contenido en {}, ruta inicial {route:?})",
            config.content_root
        );

        let mut app = Self {
            #[cfg(not(target_arch = "wasm32"))]
            source: crate::fetch::source_for(&config.content_root),
            dark_mode: config.dark_mode,
            config,
            page: Page::Loading,
            course: None,
            message: String::new(),
            test_filter: StatusFilter::All,
            cm_cache: CommonMarkCache::default(),
            pending_route: Some(route),
            pending: None,
            egui_ctx,
        };

        let course_path = app.config.course_file.clone();
        app.start_load(LoadRequest::Course, vec![course_path]);
        app
    }

    pub fn course(&self) -> Option<&CourseTree> {
        self.course.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn test_page(&self) -> Option<&TestPage> {
        match &self.page {
            Page::Test(page) => Some(page),
            _ => None,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        log::info!("Página: {} -> {}", self.page.name(), page.name());
        self.page = page;
    }
}
