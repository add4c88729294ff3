use super::*;
use crate::quiz::{QuizState, Transition};
use std::time::Duration;

impl ViewerApp {
    fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.page {
            Page::Test(page) => Some(&mut page.session),
            _ => None,
        }
    }

    pub fn select_option(&mut self, option_index: usize) -> Transition {
        let Some(session) = self.session_mut() else {
            return Transition::Ignored;
        };
        match session.select_answer(option_index) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("{err}");
                Transition::Ignored
            }
        }
    }

    pub fn check_answer(&mut self) -> Transition {
        self.session_mut()
            .map_or(Transition::Ignored, |s| s.check_answer())
    }

    pub fn next_question(&mut self, now: Duration) -> Transition {
        self.session_mut()
            .map_or(Transition::Ignored, |s| s.advance(now))
    }

    /// Botón "Reintentar" del resultado.
    pub fn retry_test(&mut self, now: Duration) {
        if let Some(session) = self.session_mut() {
            session.restart(now);
        }
    }

    pub fn tick(&mut self, now: Duration) {
        if let Some(session) = self.session_mut() {
            session.tick(now);
        }
    }

    /// Hay un test en marcha cuyo cronómetro hay que refrescar.
    pub fn quiz_timer_running(&self) -> bool {
        self.test_page()
            .is_some_and(|p| p.session.state() != QuizState::Completed)
    }

    /// Siguiente paso tras terminar el test (lección o listado).
    pub fn continue_after_test(&mut self) {
        if let Some(target) = self.test_page().map(|p| p.after.clone()) {
            self.follow(target);
        }
    }
}
