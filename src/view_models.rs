// src/view_models.rs

use crate::course::{BlockProgress, NavTarget};
use crate::lesson::TocEntry;
use crate::model::LevelStatus;
use crate::quiz::ResultTier;

// ---------- Quiz ----------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
}

impl OptionView {
    pub fn label(&self) -> String {
        format!("{}. {}", self.letter, self.text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplanationView {
    pub is_correct: bool,
    pub text: String,
}

impl ExplanationView {
    pub fn headline(&self) -> &'static str {
        if self.is_correct {
            "✅ ¡Correcto!"
        } else {
            "❌ ¡Incorrecto!"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub progress_percent: f32,
    pub text: String,
    pub options: Vec<OptionView>,
    pub options_enabled: bool,
    pub can_check: bool,
    pub explanation: Option<ExplanationView>,
    pub is_last: bool,
    pub elapsed: String,
}

impl QuestionView {
    pub fn heading(&self) -> String {
        format!("Pregunta {} de {}", self.number, self.total)
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last {
            "Finalizar test"
        } else {
            "Siguiente pregunta"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub tier: ResultTier,
    pub icon: &'static str,
    pub message: &'static str,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub elapsed: String,
}

impl ResultView {
    pub fn score_label(&self) -> String {
        format!("{} de {} ({}%)", self.score, self.total, self.percentage)
    }
}

/// Instrucción de pintado que emite `QuizSession::view`.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizView {
    Question(QuestionView),
    Result(ResultView),
}

// ---------- Curso ----------

#[derive(Clone, Debug)]
pub struct LevelInfo {
    pub id: String,
    pub ordinal: String, // último segmento del id
    pub title: String,
    pub status: LevelStatus,
    pub lesson_count: usize,
    pub first_lesson: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SkillInfo {
    pub id: String,
    pub title: String,
    pub levels: Vec<LevelInfo>,
}

#[derive(Clone, Debug)]
pub struct BlockInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub skills: Vec<SkillInfo>,
    pub progress: BlockProgress,
}

impl BlockInfo {
    pub fn heading(&self) -> String {
        format!("{} BLOQUE {}: {}", self.icon, self.id, self.title)
    }
}

impl LevelInfo {
    /// Solo se puede empezar un nivel activo que tenga lecciones.
    pub fn startable(&self) -> Option<&str> {
        if self.status == LevelStatus::Active {
            self.first_lesson.as_deref()
        } else {
            None
        }
    }

    pub fn lessons_label(&self) -> String {
        match self.lesson_count {
            1 => "1 lección".to_owned(),
            n => format!("{n} lecciones"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LessonHeader {
    pub lesson_id: String,
    pub title: String,
    pub duration: String,
    pub position_label: String,
    pub breadcrumb: Vec<String>,
    pub toc: Vec<TocEntry>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub follow_up: NavTarget,
}

impl LessonHeader {
    pub fn follow_up_label(&self) -> &'static str {
        match self.follow_up {
            NavTarget::Test(_) => "Hacer el test de la lección ▶",
            NavTarget::Lesson(_) => "Siguiente lección ▶",
            NavTarget::Listing => "Volver a la base de conocimiento",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(status: LevelStatus, first: Option<&str>, count: usize) -> LevelInfo {
        LevelInfo {
            id: "1.1.0".into(),
            ordinal: "0".into(),
            title: "Nivel".into(),
            status,
            lesson_count: count,
            first_lesson: first.map(str::to_owned),
        }
    }

    #[test]
    fn only_active_levels_with_lessons_are_startable() {
        assert_eq!(level(LevelStatus::Active, Some("a"), 1).startable(), Some("a"));
        assert_eq!(level(LevelStatus::Active, None, 0).startable(), None);
        assert_eq!(level(LevelStatus::ComingSoon, Some("a"), 1).startable(), None);
    }

    #[test]
    fn lesson_count_label() {
        assert_eq!(level(LevelStatus::Active, None, 1).lessons_label(), "1 lección");
        assert_eq!(level(LevelStatus::Active, None, 0).lessons_label(), "0 lecciones");
        assert_eq!(level(LevelStatus::Active, None, 12).lessons_label(), "12 lecciones");
    }
}
