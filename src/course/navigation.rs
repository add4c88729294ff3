use super::Location;
use crate::model::{Lesson, Level, Skill};

/// Destino de navegación que la capa de páginas debe abrir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Lesson(String),
    Test(String),
    /// Volver al listado (base de conocimiento).
    Listing,
}

pub fn next_lesson_in_level(level: &Level, index_in_level: usize) -> Option<&Lesson> {
    level.lessons.get(index_in_level.checked_add(1)?)
}

pub fn previous_lesson_in_level(level: &Level, index_in_level: usize) -> Option<&Lesson> {
    level.lessons.get(index_in_level.checked_sub(1)?)
}

/// Nivel siguiente a `level` dentro de `skill` (comparando por id).
pub fn next_level<'a>(skill: &'a Skill, level: &Level) -> Option<&'a Level> {
    let pos = skill.levels.iter().position(|l| l.id == level.id)?;
    skill.levels.get(pos + 1)
}

/// Acción principal al terminar de leer una lección: su test si lo tiene,
/// si no la siguiente lección del nivel, y si era la última, el listado.
pub fn lesson_follow_up(location: &Location<'_>) -> NavTarget {
    if let Some(test_id) = &location.lesson.test_id {
        return NavTarget::Test(test_id.clone());
    }
    match next_lesson_in_level(location.level, location.index_in_level) {
        Some(next) => NavTarget::Lesson(next.id.clone()),
        None => NavTarget::Listing,
    }
}

/// Qué abrir después de completar el test asociado a `location`.
///
/// Siguiente lección del nivel; si no hay, primera lección del siguiente
/// nivel (solo si está activo y tiene lecciones); si no, el listado.
pub fn after_test(location: &Location<'_>) -> NavTarget {
    if let Some(next) = next_lesson_in_level(location.level, location.index_in_level) {
        return NavTarget::Lesson(next.id.clone());
    }
    next_level(location.skill, location.level)
        .filter(|lvl| lvl.is_active())
        .and_then(|lvl| lvl.lessons.first())
        .map(|first| NavTarget::Lesson(first.id.clone()))
        .unwrap_or(NavTarget::Listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::course_tree;

    #[test]
    fn next_lesson_is_none_on_last_lesson() {
        let tree = course_tree();
        let loc = tree.resolve_lesson_location("1.1.0.1").unwrap();
        assert_eq!(
            next_lesson_in_level(loc.level, loc.index_in_level).map(|l| l.id.as_str()),
            Some("1.1.0.2")
        );
        let last = tree.resolve_lesson_location("1.1.0.2").unwrap();
        assert!(next_lesson_in_level(last.level, last.index_in_level).is_none());
        assert!(next_lesson_in_level(last.level, usize::MAX).is_none());
    }

    #[test]
    fn previous_lesson_is_none_on_first_lesson() {
        let tree = course_tree();
        let first = tree.resolve_lesson_location("1.1.0.1").unwrap();
        assert!(previous_lesson_in_level(first.level, first.index_in_level).is_none());
        let second = tree.resolve_lesson_location("1.1.0.2").unwrap();
        assert_eq!(
            previous_lesson_in_level(second.level, second.index_in_level).map(|l| l.id.as_str()),
            Some("1.1.0.1")
        );
    }

    #[test]
    fn next_level_is_none_on_last_level() {
        let tree = course_tree();
        let loc = tree.resolve_lesson_location("1.1.0.1").unwrap();
        let next = next_level(loc.skill, loc.level).unwrap();
        assert_eq!(next.id, "1.1.1");

        let last = tree.resolve_lesson_location("1.1.2.1").unwrap();
        assert!(next_level(last.skill, last.level).is_none());
    }

    #[test]
    fn follow_up_prefers_test_then_next_lesson() {
        let tree = course_tree();
        let with_test = tree.resolve_lesson_location("1.1.0.2").unwrap();
        assert_eq!(lesson_follow_up(&with_test), NavTarget::Test("test-1-1-0".into()));

        let without_test = tree.resolve_lesson_location("1.1.0.1").unwrap();
        assert_eq!(lesson_follow_up(&without_test), NavTarget::Lesson("1.1.0.2".into()));

        let last_no_test = tree.resolve_lesson_location("1.2.0.1").unwrap();
        assert_eq!(lesson_follow_up(&last_no_test), NavTarget::Listing);
    }

    #[test]
    fn after_test_moves_to_next_lesson_or_next_active_level() {
        let tree = course_tree();

        let mid = tree.resolve_test_location("test-2-1-3").unwrap();
        assert_eq!(after_test(&mid), NavTarget::Lesson("2.1.3.2".into()));

        let end_of_level = tree.resolve_test_location("test-1-1-0").unwrap();
        assert_eq!(after_test(&end_of_level), NavTarget::Lesson("1.1.1.1".into()));
    }

    #[test]
    fn after_test_returns_to_listing_when_next_level_unavailable() {
        let tree = course_tree();
        // El nivel 1.1.2 está "coming-soon".
        let loc = tree.resolve_test_location("test-1-1-1").unwrap();
        assert_eq!(after_test(&loc), NavTarget::Listing);

        // Último nivel de la habilidad.
        let loc = tree.resolve_test_location("test-1-1-2").unwrap();
        assert_eq!(after_test(&loc), NavTarget::Listing);

        // El siguiente nivel (2.1.x) ni está activo ni tiene lecciones.
        let loc = tree.resolve_lesson_location("2.1.3.2").unwrap();
        assert_eq!(after_test(&loc), NavTarget::Listing);
    }
}
