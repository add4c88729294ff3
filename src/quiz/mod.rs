use crate::error::{Result, ViewerError};
use crate::model::{Question, TestDocument};
use crate::view_models::{ExplanationView, OptionMark, OptionView, QuestionView, QuizView, ResultView};
use std::time::Duration;

pub mod result;
pub mod timer;

pub use result::{QuizResult, ResultTier, percentage};
pub use timer::{SessionClock, format_mm_ss};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    AwaitingSelection,
    Selected,
    Answered,
    Completed,
}

/// Resultado de una operación sobre la sesión.
///
/// Las operaciones fuera de estado (doble clic en "comprobar", avanzar sin
/// responder...) no son errores: se ignoran y devuelven `Ignored`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: String,
    pub selected: usize,
    pub correct: usize,
    pub is_correct: bool,
}

/// Un intento sobre un test ya cargado.
#[derive(Clone, Debug)]
pub struct QuizSession {
    test_id: String,
    document: TestDocument,
    current_index: usize,
    selected: Option<usize>,
    answered: bool,
    completed: bool,
    score: usize,
    answer_log: Vec<AnswerRecord>,
    clock: SessionClock,
}

impl QuizSession {
    pub fn new(test_id: impl Into<String>, document: TestDocument, now: Duration) -> Result<Self> {
        let test_id = test_id.into();
        if document.questions.is_empty() {
            return Err(ViewerError::EmptyTest { test_id });
        }
        log::info!(
            "Nueva sesión del test {test_id} ({} preguntas)",
            document.questions.len()
        );
        Ok(Self {
            test_id,
            document,
            current_index: 0,
            selected: None,
            answered: false,
            completed: false,
            score: 0,
            answer_log: Vec::new(),
            clock: SessionClock::start(now),
        })
    }

    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed
        } else if self.answered {
            QuizState::Answered
        } else if self.selected.is_some() {
            QuizState::Selected
        } else {
            QuizState::AwaitingSelection
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    pub fn question_count(&self) -> usize {
        self.document.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Pregunta actual (la última si la sesión ya terminó).
    pub fn current_question(&self) -> &Question {
        &self.document.questions[self.current_index]
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// `(pregunta actual + 1) / total * 100`
    pub fn progress_percent(&self) -> f32 {
        (self.current_index + 1) as f32 / self.question_count() as f32 * 100.0
    }

    /// Elegir (o cambiar) la opción antes de comprobar.
    pub fn select_answer(&mut self, option_index: usize) -> Result<Transition> {
        let len = self.current_question().options.len();
        if option_index >= len {
            return Err(ViewerError::InvalidOption {
                index: option_index,
                len,
            });
        }
        if let Err(e) = self.guard(
            "select_answer",
            &[QuizState::AwaitingSelection, QuizState::Selected],
        ) {
            return Ok(absorb(e));
        }
        self.selected = Some(option_index);
        Ok(Transition::Applied)
    }

    /// Puntúa la pregunta actual. Solo una vez por pregunta.
    pub fn check_answer(&mut self) -> Transition {
        if let Err(e) = self.guard("check_answer", &[QuizState::Selected]) {
            return absorb(e);
        }
        let Some(selected) = self.selected else {
            return Transition::Ignored;
        };

        let question = &self.document.questions[self.current_index];
        let is_correct = question.is_correct(selected);
        if is_correct {
            self.score += 1;
        }
        self.answer_log.push(AnswerRecord {
            question_id: question.id.clone(),
            selected,
            correct: question.correct_option_index,
            is_correct,
        });
        self.answered = true;
        log::debug!(
            "Test {}: pregunta {} -> {}",
            self.test_id,
            question.id,
            if is_correct { "correcta" } else { "incorrecta" }
        );
        Transition::Applied
    }

    /// Pasa a la siguiente pregunta o, tras la última, termina la sesión y
    /// congela el cronómetro en `now`.
    pub fn advance(&mut self, now: Duration) -> Transition {
        if let Err(e) = self.guard("advance", &[QuizState::Answered]) {
            return absorb(e);
        }
        if self.current_index + 1 < self.question_count() {
            self.current_index += 1;
            self.selected = None;
            self.answered = false;
        } else {
            self.completed = true;
            self.clock.stop(now);
            log::info!(
                "Test {} terminado: {}/{} en {}",
                self.test_id,
                self.score,
                self.question_count(),
                format_mm_ss(self.elapsed())
            );
        }
        Transition::Applied
    }

    /// Muestreo periódico del cronómetro; no toca la puntuación.
    pub fn tick(&mut self, now: Duration) {
        self.clock.tick(now);
    }

    /// Nuevo intento sobre el mismo documento.
    pub fn restart(&mut self, now: Duration) {
        self.current_index = 0;
        self.selected = None;
        self.answered = false;
        self.completed = false;
        self.score = 0;
        self.answer_log.clear();
        self.clock = SessionClock::start(now);
        log::info!("Reintento del test {}", self.test_id);
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.completed
            .then(|| QuizResult::new(self.score, self.question_count(), self.elapsed()))
    }

    /// Qué debe pintar la capa de UI en este momento.
    pub fn view(&self) -> QuizView {
        if let Some(result) = self.result() {
            return QuizView::Result(ResultView {
                tier: result.tier,
                icon: result.tier.icon(),
                message: result.tier.message(),
                score: result.score,
                total: result.total,
                percentage: result.percentage,
                elapsed: format_mm_ss(result.elapsed),
            });
        }

        let question = self.current_question();
        let answered = self.answered;
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                let selected = self.selected == Some(i);
                let mark = if !answered {
                    OptionMark::Neutral
                } else if question.is_correct(i) {
                    OptionMark::Correct
                } else if selected {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Neutral
                };
                OptionView {
                    index: i,
                    letter: option_letter(i),
                    text: opt.text.clone(),
                    selected,
                    mark,
                }
            })
            .collect();

        let explanation = if answered {
            self.selected.map(|sel| ExplanationView {
                is_correct: question.is_correct(sel),
                text: question.explanation_for(sel).unwrap_or_default().to_owned(),
            })
        } else {
            None
        };

        QuizView::Question(QuestionView {
            number: self.current_index + 1,
            total: self.question_count(),
            progress_percent: self.progress_percent(),
            text: question.text.clone(),
            options,
            options_enabled: !answered,
            can_check: self.state() == QuizState::Selected,
            explanation,
            is_last: self.current_index + 1 == self.question_count(),
            elapsed: format_mm_ss(self.elapsed()),
        })
    }

    fn guard(&self, op: &'static str, allowed: &[QuizState]) -> Result<()> {
        let state = self.state();
        if allowed.contains(&state) {
            Ok(())
        } else {
            Err(ViewerError::InvalidTransition { op, state })
        }
    }
}

fn absorb(err: ViewerError) -> Transition {
    log::debug!("{err}");
    Transition::Ignored
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}
