mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Page, Route, ViewerApp};
use crate::config::ViewerConfig;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

/// Mientras haya una carga pendiente se repinta con esta frecuencia.
const LOADING_REPAINT: Duration = Duration::from_millis(150);

/// Instante monótono de egui, que es el reloj que usa el cronómetro del test.
pub fn now(ctx: &Context) -> Duration {
    let secs = ctx.input(|i| i.time);
    Duration::from_secs_f64(secs.max(0.0))
}

pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

impl ViewerApp {
    /// Punto de entrada desde `eframe`: aplica el tema y arranca la carga.
    pub fn with_creation_context(
        cc: &eframe::CreationContext<'_>,
        config: ViewerConfig,
        route: Route,
    ) -> Self {
        apply_theme(&cc.egui_ctx, config.dark_mode);
        Self::new(config, route, Some(cc.egui_ctx.clone()))
    }
}

impl App for ViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = now(ctx);
        self.poll_loads(now);
        self.tick(now);

        // BARRA SUPERIOR: navegación y avisos
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por página
        match self.page {
            Page::Loading => views::loading::ui_loading(ctx),
            Page::KnowledgeBase => views::knowledge_base::ui_knowledge_base(self, ctx),
            Page::Tests => views::tests_list::ui_tests_list(self, ctx),
            Page::Lesson(_) => views::lesson::ui_lesson(self, ctx),
            Page::Test(_) => views::test::ui_test(self, ctx),
            Page::Error(_) => views::error::ui_error(self, ctx),
        }

        if self.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        } else if self.quiz_timer_running() {
            ctx.request_repaint_after(self.config.tick_interval());
        }
    }
}
