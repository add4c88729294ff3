use crate::app::ViewerApp;
use crate::ui::helpers::{big_list_button, status_badge};
use crate::ui::layout::scroll_panel;
use crate::view_models::BlockInfo;
use egui::{CollapsingHeader, Context, ProgressBar, RichText};

pub fn ui_knowledge_base(app: &mut ViewerApp, ctx: &Context) {
    let blocks: Vec<BlockInfo> = app.block_infos();
    let mut start: Option<String> = None;

    scroll_panel(ctx, 760.0, |ui| {
        let width = ui.available_width();
        ui.heading("📚 Base de conocimiento");
        ui.add_space(12.0);

        if blocks.is_empty() {
            ui.label("El curso todavía no tiene bloques.");
            return;
        }

        for block in &blocks {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 12.0);
                ui.label(RichText::new(block.heading()).heading().strong());
                if !block.description.is_empty() {
                    ui.label(&block.description);
                }
                ui.add_space(6.0);
                ui.add(
                    ProgressBar::new(block.progress.percent as f32 / 100.0).text(format!(
                        "{}/{} niveles disponibles ({}%)",
                        block.progress.active_levels,
                        block.progress.total_levels,
                        block.progress.percent
                    )),
                );
                ui.add_space(6.0);

                for skill in &block.skills {
                    CollapsingHeader::new(format!("{} {}", skill.id, skill.title))
                        .id_salt(("skill", &block.id, &skill.id))
                        .default_open(false)
                        .show(ui, |ui| {
                            if skill.levels.is_empty() {
                                ui.label("Sin niveles.");
                            }
                            for level in &skill.levels {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(format!("Nivel {}", level.ordinal)).strong());
                                    ui.label(&level.title);
                                    ui.label(RichText::new(level.lessons_label()).weak());
                                    status_badge(ui, level.status);
                                    if let Some(first) = level.startable() {
                                        if big_list_button(ui, "Empezar ▶", 110.0, 24.0, true) {
                                            start = Some(first.to_owned());
                                        }
                                    }
                                });
                            }
                        });
                }
            });
            ui.add_space(10.0);
        }
    });

    if let Some(lesson_id) = start {
        app.open_lesson(&lesson_id);
    }
}
