use crate::app::ViewerApp;
use crate::course::NavTarget;
use crate::ui::helpers::{explanation_color, option_button};
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::{QuestionView, QuizView, ResultView};
use egui::{Button, Context, ProgressBar, RichText, Ui};

enum Clicked {
    Select(usize),
    Check,
    Next,
    Retry,
    Continue,
    BackToTests,
}

pub fn ui_test(app: &mut ViewerApp, ctx: &Context) {
    let Some(page) = app.test_page() else {
        return;
    };
    let view = page.session.view();
    let title = page.lesson_title.clone();
    let after = page.after.clone();

    let mut clicked = None;
    match &view {
        QuizView::Question(q) => centered_panel(ctx, 520.0, 650.0, |ui| {
            clicked = question_ui(ui, &title, q);
        }),
        QuizView::Result(r) => centered_panel(ctx, 360.0, 500.0, |ui| {
            clicked = result_ui(ui, &title, r, &after);
        }),
    }

    let now = crate::ui::now(ctx);
    match clicked {
        Some(Clicked::Select(i)) => {
            app.select_option(i);
        }
        Some(Clicked::Check) => {
            app.check_answer();
        }
        Some(Clicked::Next) => {
            app.next_question(now);
        }
        Some(Clicked::Retry) => app.retry_test(now),
        Some(Clicked::Continue) => app.continue_after_test(),
        Some(Clicked::BackToTests) => app.open_tests(),
        None => {}
    }
}

fn question_ui(ui: &mut Ui, title: &str, q: &QuestionView) -> Option<Clicked> {
    let mut clicked = None;
    let width = ui.available_width();

    ui.horizontal(|ui| {
        ui.label(RichText::new(title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("⏱ {}", q.elapsed));
        });
    });
    ui.add(ProgressBar::new(q.progress_percent / 100.0).text(q.heading()));
    ui.add_space(12.0);

    ui.label(RichText::new(&q.text).size(18.0));
    ui.add_space(12.0);

    for option in &q.options {
        if option_button(ui, option, width, q.options_enabled) {
            clicked = Some(Clicked::Select(option.index));
        }
        ui.add_space(4.0);
    }

    if let Some(explanation) = &q.explanation {
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(width - 12.0);
            ui.label(
                RichText::new(explanation.headline())
                    .strong()
                    .color(explanation_color(explanation.is_correct)),
            );
            if !explanation.text.is_empty() {
                ui.label(&explanation.text);
            }
        });
    }

    ui.add_space(12.0);
    let answered = q.explanation.is_some();
    let (check, next) = two_button_row(
        ui,
        width,
        ("Comprobar", q.can_check),
        (q.next_label(), answered),
    );
    if check {
        clicked = Some(Clicked::Check);
    }
    if next {
        clicked = Some(Clicked::Next);
    }
    clicked
}

fn result_ui(ui: &mut Ui, title: &str, r: &ResultView, after: &NavTarget) -> Option<Clicked> {
    let mut clicked = None;
    let width = ui.available_width();

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(r.icon).size(48.0));
        ui.heading(format!("Test terminado: {title}"));
        ui.add_space(8.0);
        ui.label(RichText::new(r.score_label()).size(20.0).strong());
        ui.label(format!("⏱ Tiempo: {}", r.elapsed));
        ui.add_space(8.0);
        ui.label(r.message);
        ui.add_space(16.0);

        let continue_label = match after {
            NavTarget::Lesson(_) => "Continuar con la siguiente lección ▶",
            NavTarget::Test(_) => "Siguiente test ▶",
            NavTarget::Listing => "Volver a la base de conocimiento",
        };
        if ui
            .add_sized([width, 40.0], Button::new(RichText::new(continue_label).strong()))
            .clicked()
        {
            clicked = Some(Clicked::Continue);
        }
        ui.add_space(8.0);
    });

    let (retry, back) = two_button_row(ui, width, ("🔄 Reintentar", true), ("📝 Volver a los tests", true));
    if retry {
        clicked = Some(Clicked::Retry);
    }
    if back {
        clicked = Some(Clicked::BackToTests);
    }
    clicked
}
