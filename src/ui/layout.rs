use crate::app::{Page, ViewerApp};
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui};

pub fn top_panel(app: &mut ViewerApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let ready = app.course().is_some();
            let on_kb = matches!(app.page, Page::KnowledgeBase);
            let on_tests = matches!(app.page, Page::Tests);

            if ui
                .add_enabled(ready && !on_kb, Button::new("📚 Base de conocimiento"))
                .clicked()
            {
                app.open_knowledge_base();
            }
            if ui
                .add_enabled(ready && !on_tests, Button::new("📝 Tests"))
                .clicked()
            {
                app.open_tests();
            }
        });

        if !app.message.is_empty() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("⚠ {}", app.message)).color(ui.visuals().warn_fg_color));
                if ui.small_button("✖").clicked() {
                    app.message.clear();
                }
            });
        }
    });
}

pub fn bottom_panel(app: &mut ViewerApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                app.dark_mode = true;
                super::apply_theme(ctx, true);
            }
            if ui.button("☀ Modo claro").clicked() {
                app.dark_mode = false;
                super::apply_theme(ctx, false);
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho limitado, para listados y lecciones.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho). Un botón deshabilitado nunca
/// cuenta como clic.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
