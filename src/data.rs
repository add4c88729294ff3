// src/data.rs

use crate::error::{Result, ViewerError};
use crate::model::{CourseStructure, TestDocument};

/// Parsea `course-structure.json`.
pub fn parse_course(path: &str, text: &str) -> Result<CourseStructure> {
    serde_json::from_str(text).map_err(|e| ViewerError::load(path, e))
}

/// Parsea y valida el documento de un test.
///
/// Un documento sin preguntas es [`ViewerError::EmptyTest`]; uno con
/// `correctAnswer` fuera de rango o con opciones sin explicación se trata
/// como contenido corrupto ([`ViewerError::Load`]).
pub fn parse_test(test_id: &str, path: &str, text: &str) -> Result<TestDocument> {
    let document: TestDocument =
        serde_json::from_str(text).map_err(|e| ViewerError::load(path, e))?;
    validate_test(test_id, path, &document)?;
    Ok(document)
}

pub fn validate_test(test_id: &str, path: &str, document: &TestDocument) -> Result<()> {
    if document.questions.is_empty() {
        return Err(ViewerError::EmptyTest {
            test_id: test_id.to_owned(),
        });
    }

    for q in &document.questions {
        if q.correct_option_index >= q.options.len() {
            return Err(ViewerError::load(
                path,
                format!(
                    "la pregunta {} marca como correcta la opción {} pero solo tiene {}",
                    q.id,
                    q.correct_option_index,
                    q.options.len()
                ),
            ));
        }
        if let Some(missing) = (0..q.options.len()).find(|i| !q.explanations.contains_key(i)) {
            return Err(ViewerError::load(
                path,
                format!("la pregunta {} no tiene explicación para la opción {missing}", q.id),
            ));
        }
    }
    Ok(())
}
