// src/error.rs

use crate::quiz::QuizState;
use std::fmt;
use thiserror::Error;

/// Qué se estaba buscando en el árbol del curso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Lesson,
    Test,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Lesson => write!(f, "la lección"),
            LookupKind::Test => write!(f, "el test"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("No se encontró {kind} {id}")]
    NotFound { kind: LookupKind, id: String },

    #[error("Error cargando {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("El test {test_id} no tiene preguntas")]
    EmptyTest { test_id: String },

    #[error("Opción {index} fuera de rango (la pregunta tiene {len})")]
    InvalidOption { index: usize, len: usize },

    #[error("Operación '{op}' ignorada en estado {state:?}")]
    InvalidTransition { op: &'static str, state: QuizState },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    pub fn not_found(kind: LookupKind, id: &str) -> Self {
        ViewerError::NotFound {
            kind,
            id: id.to_owned(),
        }
    }

    pub fn load(path: &str, reason: impl fmt::Display) -> Self {
        ViewerError::Load {
            path: path.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Errores que invalidan la página actual: hay que volver a un listado.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ViewerError::NotFound { .. } | ViewerError::Load { .. } | ViewerError::EmptyTest { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_are_classified() {
        assert!(ViewerError::not_found(LookupKind::Test, "t1").is_structural());
        assert!(ViewerError::load("data/x.json", "404").is_structural());
        assert!(ViewerError::EmptyTest { test_id: "t".into() }.is_structural());
        assert!(!ViewerError::InvalidOption { index: 4, len: 3 }.is_structural());
        assert!(
            !ViewerError::InvalidTransition {
                op: "advance",
                state: QuizState::Selected,
            }
            .is_structural()
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = ViewerError::not_found(LookupKind::Lesson, "1.1.0.2");
        assert_eq!(err.to_string(), "No se encontró la lección 1.1.0.2");
    }
}
