// Datos de prueba compartidos por los tests unitarios.

pub const COURSE_JSON: &str = r#"{
  "blocks": [
    {
      "id": 1,
      "title": "Fundamentos",
      "description": "Lo básico",
      "icon": "🧱",
      "skills": [
        {
          "id": "1.1",
          "title": "Variables",
          "levels": [
            {
              "id": "1.1.0",
              "title": "Nivel básico",
              "status": "active",
              "lessons": [
                {"id": "1.1.0.1", "title": "¿Qué es una variable?", "duration": "10 min"},
                {"id": "1.1.0.2", "title": "Tipos", "test": "test-1-1-0"}
              ]
            },
            {
              "id": "1.1.1",
              "title": "Principiante",
              "status": "active",
              "lessons": [
                {"id": "1.1.1.1", "title": "Ámbito", "test": "test-1-1-1"}
              ]
            },
            {
              "id": "1.1.2",
              "title": "Intermedio",
              "status": "coming-soon",
              "lessons": [
                {"id": "1.1.2.1", "title": "Constantes", "test": "test-1-1-2"}
              ]
            }
          ]
        },
        {
          "id": "1.2",
          "title": "Condicionales",
          "levels": [
            {
              "id": "1.2.0",
              "title": "Nivel básico",
              "status": "active",
              "lessons": [
                {"id": "1.2.0.1", "title": "If"}
              ]
            }
          ]
        }
      ]
    },
    {
      "id": 2,
      "title": "Estructuras",
      "description": "Colecciones",
      "skills": [
        {
          "id": "2.1",
          "title": "Listas",
          "levels": [
            {
              "id": "2.1.3",
              "title": "Avanzado",
              "status": "active",
              "lessons": [
                {"id": "2.1.3.1", "title": "Listas enlazadas", "test": "test-2-1-3"},
                {"id": "2.1.3.2", "title": "Pilas", "test": "test-1-1-0"}
              ]
            },
            {
              "id": "2.1.x",
              "title": "Experto"
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Respuestas correctas: 1, 0, 2.
pub const THREE_QUESTIONS_JSON: &str = r#"{
  "questions": [
    {
      "id": "q1",
      "question": "¿Qué palabra declara una variable inmutable?",
      "options": [{"text": "mut"}, {"text": "let"}, {"text": "var"}],
      "correctAnswer": 1,
      "explanations": {
        "0": {"correct": "", "incorrect": "mut la hace mutable"},
        "1": {"correct": "Correcto, let", "incorrect": ""},
        "2": {"correct": "", "incorrect": "var no existe"}
      }
    },
    {
      "id": "q2",
      "question": "¿Cuánto ocupa un i32?",
      "options": [{"text": "4 bytes"}, {"text": "8 bytes"}],
      "correctAnswer": 0,
      "explanations": {
        "0": {"correct": "Sí, 32 bits", "incorrect": ""},
        "1": {"correct": "", "incorrect": "Eso es un i64"}
      }
    },
    {
      "id": 3,
      "question": "¿Qué tipo tiene 'a'?",
      "options": [{"text": "&str"}, {"text": "String"}, {"text": "char"}],
      "correctAnswer": 2,
      "explanations": {
        "0": {"correct": "", "incorrect": "Comillas dobles"},
        "1": {"correct": "", "incorrect": "No"},
        "2": {"correct": "Eso es", "incorrect": ""}
      }
    }
  ]
}"#;

pub fn course_tree() -> crate::course::CourseTree {
    let structure = crate::data::parse_course("fixture", COURSE_JSON).expect("fixture de curso válida");
    crate::course::CourseTree::new(structure)
}

pub fn three_questions() -> crate::model::TestDocument {
    crate::data::parse_test("t3", "fixture", THREE_QUESTIONS_JSON).expect("fixture de test válida")
}
