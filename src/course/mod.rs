use crate::error::{LookupKind, Result, ViewerError};
use crate::model::{Block, CourseStructure, Lesson, Level, Skill};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

// Submódulos
pub mod catalog;
pub mod navigation;
pub mod paths;

pub use catalog::{BlockProgress, Difficulty, StatusFilter, TestEntry, block_progress};
pub use navigation::{
    NavTarget, after_test, lesson_follow_up, next_lesson_in_level, next_level,
    previous_lesson_in_level,
};
pub use paths::{ContentKind, content_path, legacy_test_path, lesson_path};

/// Índices (bloque, habilidad, nivel, lección) dentro de `CourseStructure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LessonPos {
    block: usize,
    skill: usize,
    level: usize,
    lesson: usize,
}

/// Cadena completa de ancestros de una lección.
#[derive(Clone, Copy, Debug)]
pub struct Location<'a> {
    pub block: &'a Block,
    pub skill: &'a Skill,
    pub level: &'a Level,
    pub lesson: &'a Lesson,
    pub index_in_level: usize,
}

/// Índice de solo lectura sobre la estructura del curso.
///
/// Se construye una vez tras la carga; los mapas id -> posición dan el mismo
/// resultado que recorrer bloque→habilidad→nivel→lección y quedarse con la
/// primera coincidencia.
pub struct CourseTree {
    structure: CourseStructure,
    lessons: HashMap<String, LessonPos>,
    tests: HashMap<String, LessonPos>,
}

impl CourseTree {
    pub fn new(structure: CourseStructure) -> Self {
        let mut lessons = HashMap::new();
        let mut tests = HashMap::new();

        for (bi, block) in structure.blocks.iter().enumerate() {
            for (si, skill) in block.skills.iter().enumerate() {
                for (li, level) in skill.levels.iter().enumerate() {
                    for (pi, lesson) in level.lessons.iter().enumerate() {
                        let pos = LessonPos {
                            block: bi,
                            skill: si,
                            level: li,
                            lesson: pi,
                        };
                        match lessons.entry(lesson.id.clone()) {
                            Entry::Vacant(slot) => {
                                slot.insert(pos);
                            }
                            Entry::Occupied(_) => {
                                log::warn!("Id de lección duplicado en el curso: {}", lesson.id);
                            }
                        }
                        if let Some(test_id) = &lesson.test_id {
                            tests.entry(test_id.clone()).or_insert(pos);
                        }
                    }
                }
            }
        }

        log::info!(
            "Curso indexado: {} bloques, {} lecciones, {} tests",
            structure.blocks.len(),
            lessons.len(),
            tests.len()
        );

        Self {
            structure,
            lessons,
            tests,
        }
    }

    pub fn structure(&self) -> &CourseStructure {
        &self.structure
    }

    pub fn blocks(&self) -> &[Block] {
        &self.structure.blocks
    }

    /// Primera lección (en orden de recorrido) cuyo test es `test_id`.
    pub fn resolve_test_location(&self, test_id: &str) -> Result<Location<'_>> {
        self.tests
            .get(test_id)
            .map(|pos| self.location_at(*pos))
            .ok_or_else(|| ViewerError::not_found(LookupKind::Test, test_id))
    }

    pub fn resolve_lesson_location(&self, lesson_id: &str) -> Result<Location<'_>> {
        self.lessons
            .get(lesson_id)
            .map(|pos| self.location_at(*pos))
            .ok_or_else(|| ViewerError::not_found(LookupKind::Lesson, lesson_id))
    }

    fn location_at(&self, pos: LessonPos) -> Location<'_> {
        let block = &self.structure.blocks[pos.block];
        let skill = &block.skills[pos.skill];
        let level = &skill.levels[pos.level];
        Location {
            block,
            skill,
            level,
            lesson: &level.lessons[pos.lesson],
            index_in_level: pos.lesson,
        }
    }
}
