use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Los ids del JSON a veces vienen como número (`"id": 1`) y a veces como
/// texto (`"id": "1.1"`). Internamente siempre son `String`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "id_string")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
}

// ---------- Estructura del curso ----------

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CourseStructure {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Block {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Skill {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub levels: Vec<Level>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LevelStatus {
    Active,
    #[default]
    ComingSoon,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Level {
    /// Id con puntos; el último segmento es el ordinal del nivel ("2.3" -> "3").
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: LevelStatus,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Level {
    /// Último segmento del id con puntos.
    pub fn ordinal_suffix(&self) -> &str {
        self.id.rsplit('.').next().unwrap_or(&self.id)
    }

    pub fn is_active(&self) -> bool {
        self.status == LevelStatus::Active
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "test", default, deserialize_with = "opt_id_string")]
    pub test_id: Option<String>,
}

// ---------- Tests ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Explanation {
    #[serde(rename = "correct")]
    pub correct_text: String,
    #[serde(rename = "incorrect")]
    pub incorrect_text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(rename = "correctAnswer")]
    pub correct_option_index: usize,
    /// Índice de opción -> explicación (en el JSON las claves son "0", "1", ...)
    #[serde(default)]
    pub explanations: BTreeMap<usize, Explanation>,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_option_index
    }

    /// Texto a mostrar tras comprobar `option_index`.
    pub fn explanation_for(&self, option_index: usize) -> Option<&str> {
        let explanation = self.explanations.get(&option_index)?;
        Some(if self.is_correct(option_index) {
            &explanation.correct_text
        } else {
            &explanation.incorrect_text
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TestDocument {
    #[serde(default)]
    pub questions: Vec<Question>,
}
