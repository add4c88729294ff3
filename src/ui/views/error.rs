use crate::app::{Page, ViewerApp};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_error(app: &mut ViewerApp, ctx: &Context) {
    let Page::Error(reason) = &app.page else {
        return;
    };
    let root = &app.config.content_root;

    centered_panel(ctx, 160.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("❌ No se pudo cargar el curso");
            ui.add_space(10.0);
            ui.label(RichText::new(reason).color(ui.visuals().error_fg_color));
            ui.add_space(10.0);
            ui.label(format!(
                "Comprueba que el contenido está disponible en «{root}» \
                 (variable COURSE_VIEWER_CONTENT_ROOT o fichero course_viewer.yaml)."
            ));
        });
    });
}
