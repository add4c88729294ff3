use super::*;
use crate::course::{
    Location, TestEntry, block_progress, lesson_follow_up, next_lesson_in_level,
    previous_lesson_in_level,
};
use crate::lesson::{breadcrumb, duration_label, position_label, table_of_contents};
use crate::view_models::{BlockInfo, LevelInfo, SkillInfo};

const DEFAULT_BLOCK_ICON: &str = "📚";

pub fn lesson_header(location: &Location<'_>, markdown: &str) -> LessonHeader {
    LessonHeader {
        lesson_id: location.lesson.id.clone(),
        title: location.lesson.title.clone(),
        duration: duration_label(location),
        position_label: position_label(location),
        breadcrumb: breadcrumb(location),
        toc: table_of_contents(markdown),
        previous: previous_lesson_in_level(location.level, location.index_in_level)
            .map(|l| l.id.clone()),
        next: next_lesson_in_level(location.level, location.index_in_level).map(|l| l.id.clone()),
        follow_up: lesson_follow_up(location),
    }
}

impl ViewerApp {
    /// Bloques → habilidades → niveles para la base de conocimiento.
    pub fn block_infos(&self) -> Vec<BlockInfo> {
        let Some(course) = self.course() else {
            return Vec::new();
        };
        course
            .blocks()
            .iter()
            .map(|block| BlockInfo {
                id: block.id.clone(),
                title: block.title.clone(),
                description: block.description.clone(),
                icon: block
                    .icon
                    .clone()
                    .filter(|i| !i.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_BLOCK_ICON.to_string()),
                skills: block
                    .skills
                    .iter()
                    .map(|skill| SkillInfo {
                        id: skill.id.clone(),
                        title: skill.title.clone(),
                        levels: skill
                            .levels
                            .iter()
                            .map(|level| LevelInfo {
                                id: level.id.clone(),
                                ordinal: level.ordinal_suffix().to_string(),
                                title: level.title.clone(),
                                status: level.status,
                                lesson_count: level.lessons.len(),
                                first_lesson: level.lessons.first().map(|l| l.id.clone()),
                            })
                            .collect(),
                    })
                    .collect(),
                progress: block_progress(block),
            })
            .collect()
    }

    /// Catálogo de tests según el filtro seleccionado.
    pub fn test_cards(&self) -> Vec<TestEntry> {
        self.course()
            .map(|c| c.filtered_tests(self.test_filter))
            .unwrap_or_default()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::app::test_support::*;
    use super::*;
    use crate::model::LevelStatus;

    #[test]
    fn block_infos_mirror_the_course() {
        let dir = content_dir();
        let app = loaded_app(config_for(&dir), Route::KnowledgeBase);
        let blocks = app.block_infos();
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0].heading(), "🧱 BLOQUE 1: Fundamentos");
        assert_eq!(blocks[1].icon, DEFAULT_BLOCK_ICON);
        assert_eq!(blocks[0].progress.percent, 75);

        let levels = &blocks[0].skills[0].levels;
        assert_eq!(levels[0].ordinal, "0");
        assert_eq!(levels[0].lesson_count, 2);
        assert_eq!(levels[0].startable(), Some("1.1.0.1"));
        assert_eq!(levels[2].status, LevelStatus::ComingSoon);
        assert_eq!(levels[2].startable(), None);

        let expert = &blocks[1].skills[0].levels[1];
        assert_eq!(expert.ordinal, "x");
        assert_eq!(expert.startable(), None);
    }

    #[test]
    fn test_cards_follow_the_filter() {
        let dir = content_dir();
        let mut app = loaded_app(config_for(&dir), Route::Tests);
        assert_eq!(app.test_cards().len(), 5);
        app.test_filter = StatusFilter::ComingSoon;
        let cards = app.test_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].difficulty.label(), "Intermedio");
    }

    #[test]
    fn header_for_first_lesson() {
        let tree = crate::fixtures::course_tree();
        let loc = tree.resolve_lesson_location("1.1.0.1").unwrap();
        let header = lesson_header(&loc, "## Uno\n");
        assert_eq!(header.duration, "10 min");
        assert_eq!(header.previous, None);
        assert_eq!(header.next.as_deref(), Some("1.1.0.2"));
        assert_eq!(header.follow_up, NavTarget::Lesson("1.1.0.2".into()));
        assert_eq!(header.follow_up_label(), "Siguiente lección ▶");
        assert_eq!(header.breadcrumb.join(" › "), "Fundamentos › Variables › Nivel básico");
        assert_eq!(header.toc.len(), 1);
    }
}
