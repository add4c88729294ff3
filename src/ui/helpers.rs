// src/ui/helpers.rs
use crate::model::LevelStatus;
use crate::view_models::{OptionMark, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

const GREEN: Color32 = Color32::from_rgb(46, 125, 50);
const RED: Color32 = Color32::from_rgb(198, 40, 40);

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn status_badge(ui: &mut Ui, status: LevelStatus) {
    let (text, color) = match status {
        LevelStatus::Active => ("Disponible", GREEN),
        LevelStatus::ComingSoon => ("Próximamente", Color32::GRAY),
    };
    ui.label(RichText::new(text).small().strong().color(color));
}

/// Botón de una opción de respuesta, coloreado según la corrección.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32, enabled: bool) -> bool {
    let fill = match option.mark {
        OptionMark::Correct => Some(GREEN),
        OptionMark::Incorrect => Some(RED),
        OptionMark::Neutral if option.selected => Some(ui.visuals().selection.bg_fill),
        OptionMark::Neutral => None,
    };
    let suffix = match option.mark {
        OptionMark::Correct => "  ✔",
        OptionMark::Incorrect => "  ✖",
        OptionMark::Neutral => "",
    };

    let mut text = RichText::new(format!("{}{suffix}", option.label()));
    if fill.is_some() {
        text = text.color(Color32::WHITE);
    }
    let mut button = Button::new(text)
        .min_size(Vec2::new(width, 36.0))
        .wrap();
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button).clicked()
}

pub fn explanation_color(is_correct: bool) -> Color32 {
    if is_correct { GREEN } else { RED }
}
