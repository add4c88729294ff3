use crate::app::ViewerApp;
use crate::course::{StatusFilter, TestEntry};
use crate::ui::helpers::{big_list_button, status_badge};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_tests_list(app: &mut ViewerApp, ctx: &Context) {
    let mut filter = app.test_filter;
    let cards: Vec<TestEntry> = app.test_cards();
    let mut start: Option<String> = None;

    scroll_panel(ctx, 760.0, |ui| {
        let width = ui.available_width();
        ui.heading("📝 Tests");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut filter, StatusFilter::All, "Todos");
            ui.selectable_value(&mut filter, StatusFilter::Active, "Disponibles");
            ui.selectable_value(&mut filter, StatusFilter::ComingSoon, "Próximamente");
        });
        ui.add_space(10.0);

        if cards.is_empty() {
            ui.label("No hay tests con este filtro.");
        }

        for card in &cards {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.lesson_title).strong());
                    status_badge(ui, card.status);
                });
                ui.label(
                    RichText::new(format!(
                        "Bloque {}: {} › {} › {}",
                        card.block_id, card.block_title, card.skill_title, card.level_title
                    ))
                    .weak(),
                );
                ui.horizontal(|ui| {
                    ui.label(format!("Dificultad: {}", card.difficulty.label()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if big_list_button(ui, "Hacer el test ▶", 140.0, 28.0, card.is_active()) {
                            start = Some(card.test_id.clone());
                        }
                    });
                });
            });
            ui.add_space(6.0);
        }
    });

    if filter != app.test_filter {
        log::debug!("Filtro de tests: {filter:?}");
        app.test_filter = filter;
    }
    if let Some(test_id) = start {
        app.open_test(&test_id);
    }
}
