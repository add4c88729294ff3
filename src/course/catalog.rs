use super::CourseTree;
use crate::model::{Block, LevelStatus};

/// Dificultad derivada del ordinal del nivel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Basic,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Se toman los dígitos iniciales del sufijo (`"3a"` cuenta como 3); sin
    /// dígitos el nivel es de experto.
    pub fn from_level_suffix(suffix: &str) -> Self {
        let trimmed = suffix.trim_start();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..digits_end].parse::<u32>() {
            Ok(0) => Difficulty::Basic,
            Ok(1) => Difficulty::Beginner,
            Ok(2) => Difficulty::Intermediate,
            Ok(3) => Difficulty::Advanced,
            _ => Difficulty::Expert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Basic => "Básico",
            Difficulty::Beginner => "Inicial",
            Difficulty::Intermediate => "Intermedio",
            Difficulty::Advanced => "Avanzado",
            Difficulty::Expert => "Experto",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    ComingSoon,
}

impl StatusFilter {
    pub fn matches(self, status: LevelStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == LevelStatus::Active,
            StatusFilter::ComingSoon => status == LevelStatus::ComingSoon,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestEntry {
    pub test_id: String,
    pub lesson_id: String,
    pub lesson_title: String,
    pub level_title: String,
    pub block_id: String,
    pub block_title: String,
    pub skill_title: String,
    pub status: LevelStatus,
    pub difficulty: Difficulty,
}

impl TestEntry {
    pub fn is_active(&self) -> bool {
        self.status == LevelStatus::Active
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockProgress {
    pub active_levels: usize,
    pub total_levels: usize,
    pub percent: u32,
}

/// Niveles disponibles frente a niveles totales de un bloque.
pub fn block_progress(block: &Block) -> BlockProgress {
    let levels = block.skills.iter().flat_map(|s| &s.levels);
    let total_levels = levels.clone().count();
    let active_levels = levels.filter(|l| l.is_active()).count();
    let percent = if total_levels > 0 {
        (active_levels as f64 / total_levels as f64 * 100.0).round() as u32
    } else {
        0
    };
    BlockProgress {
        active_levels,
        total_levels,
        percent,
    }
}

impl CourseTree {
    /// Todas las lecciones con test, en orden de recorrido.
    pub fn test_catalog(&self) -> Vec<TestEntry> {
        let mut entries = Vec::new();
        for block in self.blocks() {
            for skill in &block.skills {
                for level in &skill.levels {
                    let difficulty = Difficulty::from_level_suffix(level.ordinal_suffix());
                    for lesson in &level.lessons {
                        let Some(test_id) = &lesson.test_id else {
                            continue;
                        };
                        entries.push(TestEntry {
                            test_id: test_id.clone(),
                            lesson_id: lesson.id.clone(),
                            lesson_title: lesson.title.clone(),
                            level_title: level.title.clone(),
                            block_id: block.id.clone(),
                            block_title: block.title.clone(),
                            skill_title: skill.title.clone(),
                            status: level.status,
                            difficulty,
                        });
                    }
                }
            }
        }
        entries
    }

    pub fn filtered_tests(&self, filter: StatusFilter) -> Vec<TestEntry> {
        self.test_catalog()
            .into_iter()
            .filter(|t| filter.matches(t.status))
            .collect()
    }
}
