// src/lesson.rs

use crate::course::Location;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Duración que se muestra cuando la lección no declara una.
pub const DEFAULT_DURATION: &str = "15 min";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// 2 para `##`, 3 para `###`.
    pub depth: u8,
    pub title: String,
}

/// Índice de la lección: cabeceras de nivel 2 y 3 en orden de aparición,
/// con el texto plano de la cabecera (sin marcas de formato).
pub fn table_of_contents(markdown: &str) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut current: Option<TocEntry> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = match level {
                    HeadingLevel::H2 => Some(TocEntry { depth: 2, title: String::new() }),
                    HeadingLevel::H3 => Some(TocEntry { depth: 3, title: String::new() }),
                    _ => None,
                };
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut entry) = current.take() {
                    entry.title = entry.title.trim().to_owned();
                    if !entry.title.is_empty() {
                        entries.push(entry);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(entry) = current.as_mut() {
                    entry.title.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(entry) = current.as_mut() {
                    entry.title.push(' ');
                }
            }
            _ => {}
        }
    }
    entries
}

pub fn duration_label(location: &Location<'_>) -> String {
    location
        .lesson
        .duration
        .clone()
        .unwrap_or_else(|| DEFAULT_DURATION.to_owned())
}

/// "Lección i de n" dentro de su nivel.
pub fn position_label(location: &Location<'_>) -> String {
    format!(
        "Lección {} de {}",
        location.index_in_level + 1,
        location.level.lessons.len()
    )
}

/// Bloque › habilidad › nivel.
pub fn breadcrumb(location: &Location<'_>) -> Vec<String> {
    vec![
        location.block.title.clone(),
        location.skill.title.clone(),
        location.level.title.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::course_tree;

    #[test]
    fn toc_collects_h2_and_h3_in_order() {
        let md = "# Título\n\nIntro\n\n## Qué es\ntexto\n### Detalle ##\n#### Muy profundo\n## Resumen\n";
        let toc = table_of_contents(md);
        assert_eq!(
            toc,
            vec![
                TocEntry { depth: 2, title: "Qué es".into() },
                TocEntry { depth: 3, title: "Detalle".into() },
                TocEntry { depth: 2, title: "Resumen".into() },
            ]
        );
    }

    #[test]
    fn toc_ignores_headings_inside_code_fences() {
        let md = "## Uno\n```python\n## no es cabecera\n```\n~~~\n### tampoco\n~~~\n### Dos\n";
        let titles: Vec<_> = table_of_contents(md).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Uno", "Dos"]);
    }

    #[test]
    fn toc_requires_space_after_hashes() {
        assert!(table_of_contents("##pegado\n##\n## \n").is_empty());
    }

    #[test]
    fn toc_accepts_setext_and_indented_headings() {
        let md = "Intro\n\nPrimera sección\n---------------\n\n   ## Sangrada\n\nOtra\n===\n";
        assert_eq!(
            table_of_contents(md),
            vec![
                TocEntry { depth: 2, title: "Primera sección".into() },
                TocEntry { depth: 2, title: "Sangrada".into() },
            ]
        );
    }

    #[test]
    fn toc_titles_drop_inline_markup() {
        let md = "## Uso de `let` y **mut**\n### [Enlace](https://example.org) _final_\n";
        let titles: Vec<_> = table_of_contents(md).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Uso de let y mut", "Enlace final"]);
    }

    #[test]
    fn header_texts() {
        let tree = course_tree();
        let first = tree.resolve_lesson_location("1.1.0.1").unwrap();
        assert_eq!(duration_label(&first), "10 min");
        assert_eq!(position_label(&first), "Lección 1 de 2");

        let second = tree.resolve_lesson_location("1.1.0.2").unwrap();
        assert_eq!(duration_label(&second), DEFAULT_DURATION);
        assert_eq!(position_label(&second), "Lección 2 de 2");
        assert_eq!(breadcrumb(&second), ["Fundamentos", "Variables", "Nivel básico"]);
    }
}
