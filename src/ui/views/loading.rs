use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 80.0, 300.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label("Cargando…");
        });
    });
}
