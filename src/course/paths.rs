use super::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Lesson,
    Test,
}

impl ContentKind {
    fn folder(self) -> &'static str {
        match self {
            ContentKind::Lesson => "lessons",
            ContentKind::Test => "tests",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ContentKind::Lesson => "md",
            ContentKind::Test => "json",
        }
    }
}

fn file_path(kind: ContentKind, location: &Location<'_>, id: &str) -> String {
    format!(
        "blocks/block-{}/skill-{}/level-{}/{}/{}.{}",
        location.block.id,
        location.skill.id,
        location.level.ordinal_suffix(),
        kind.folder(),
        id,
        kind.extension()
    )
}

/// Ruta del contenido relativa a la raíz de datos:
/// `blocks/block-{b}/skill-{s}/level-{n}/{lessons|tests}/{id}.{md|json}`.
///
/// Para `ContentKind::Test` el id es el test de la lección; si la lección no
/// tiene test devuelve `None`.
pub fn content_path(kind: ContentKind, location: &Location<'_>) -> Option<String> {
    match kind {
        ContentKind::Lesson => Some(lesson_path(location)),
        ContentKind::Test => {
            let test_id = location.lesson.test_id.as_deref()?;
            Some(file_path(kind, location, test_id))
        }
    }
}

/// Ruta del markdown de la lección; siempre existe.
pub fn lesson_path(location: &Location<'_>) -> String {
    file_path(ContentKind::Lesson, location, &location.lesson.id)
}

/// Ruta plana de la primera versión del visor (`tests/{id}.json`).
pub fn legacy_test_path(test_id: &str) -> String {
    format!("tests/{test_id}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::course_tree;

    #[test]
    fn lesson_path_uses_level_suffix() {
        let tree = course_tree();
        let loc = tree.resolve_lesson_location("1.1.0.1").unwrap();
        assert_eq!(
            content_path(ContentKind::Lesson, &loc).unwrap(),
            "blocks/block-1/skill-1.1/level-0/lessons/1.1.0.1.md"
        );
    }

    #[test]
    fn lesson_path_matches_content_path() {
        let tree = course_tree();
        let loc = tree.resolve_lesson_location("2.1.3.2").unwrap();
        assert_eq!(lesson_path(&loc), "blocks/block-2/skill-2.1/level-3/lessons/2.1.3.2.md");
        assert_eq!(content_path(ContentKind::Lesson, &loc), Some(lesson_path(&loc)));
    }

    #[test]
    fn test_path_uses_test_id() {
        let tree = course_tree();
        let loc = tree.resolve_test_location("test-2-1-3").unwrap();
        assert_eq!(
            content_path(ContentKind::Test, &loc).unwrap(),
            "blocks/block-2/skill-2.1/level-3/tests/test-2-1-3.json"
        );
    }

    #[test]
    fn test_path_for_lesson_without_test_is_none() {
        let tree = course_tree();
        let loc = tree.resolve_lesson_location("1.2.0.1").unwrap();
        assert!(content_path(ContentKind::Test, &loc).is_none());
    }

    #[test]
    fn legacy_path_is_flat() {
        assert_eq!(legacy_test_path("variables"), "tests/variables.json");
    }
}
