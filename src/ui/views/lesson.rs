use crate::app::{Page, ViewerApp};
use crate::course::NavTarget;
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Button, CollapsingHeader, Context, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_lesson(app: &mut ViewerApp, ctx: &Context) {
    let ViewerApp { page, cm_cache, .. } = app;
    let Page::Lesson(lesson) = page else {
        return;
    };
    let header = &lesson.header;
    let mut go: Option<NavTarget> = None;

    scroll_panel(ctx, 820.0, |ui| {
        let width = ui.available_width();

        ui.label(RichText::new(header.breadcrumb.join(" › ")).weak());
        ui.add_space(4.0);
        ui.heading(&header.title);
        ui.horizontal(|ui| {
            ui.label(format!("⏱ {}", header.duration));
            ui.separator();
            ui.label(&header.position_label);
        });
        ui.add_space(6.0);

        if !header.toc.is_empty() {
            CollapsingHeader::new("Contenido")
                .id_salt(("toc", &header.lesson_id))
                .default_open(true)
                .show(ui, |ui| {
                    for entry in &header.toc {
                        ui.horizontal(|ui| {
                            if entry.depth > 2 {
                                ui.add_space(16.0);
                            }
                            ui.label(format!("• {}", entry.title));
                        });
                    }
                });
            ui.separator();
        }

        // Cuerpo de la lección
        CommonMarkViewer::new().show(ui, cm_cache, &lesson.markdown);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        let (prev, next) = two_button_row(
            ui,
            width,
            ("◀ Lección anterior", header.previous.is_some()),
            ("Lección siguiente ▶", header.next.is_some()),
        );
        if prev {
            go = header.previous.clone().map(NavTarget::Lesson);
        }
        if next {
            go = header.next.clone().map(NavTarget::Lesson);
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([width / 2.0, 40.0], Button::new(RichText::new(header.follow_up_label()).strong()))
                .clicked()
            {
                go = Some(header.follow_up.clone());
            }
        });
        ui.add_space(16.0);
    });

    if let Some(target) = go {
        app.follow(target);
    }
}
