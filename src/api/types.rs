//! Wire types for the editor backend API.
//!
//! Domain records are what the backend returns; the `*Create`/`*Update`
//! structs are the request payloads each facade operation accepts. The
//! backend is authoritative for all of these — nothing here is a local
//! copy of truth, and no cross-record references are validated client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Domain Records
// ============================================================================

/// A character as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Character summary embedded in a dialogue line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// One line of dialogue within a scene.
///
/// `order` establishes the sequence within the owning scene; uniqueness of
/// `order` per scene is enforced by the backend, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueLine {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterRef>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_id: Option<String>,
    pub order: i64,
}

/// A scene: an ordered run of dialogue lines inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A project: the top-level container for characters and scenes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Request Payloads
// ============================================================================

/// A named character expression with its sprite image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expression {
    pub name: String,
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Payload for `characters().create`.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<Expression>,
}

impl CharacterCreate {
    pub fn new(name: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            voice_tag: None,
            bio: None,
            project_id: project_id.into(),
            expressions: Vec::new(),
        }
    }
}

/// Sparse payload for `characters().update` — only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CharacterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<Expression>>,
}

/// Payload for `dialogue().add_line`.
///
/// `position` is one of "left", "right", "center"; the backend defaults to
/// "left" when omitted.
#[derive(Debug, Clone, Serialize)]
pub struct DialogueLineCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl DialogueLineCreate {
    pub fn new(text: impl Into<String>, order: i64) -> Self {
        Self {
            character_id: None,
            text: text.into(),
            expression: None,
            position: None,
            order,
            metadata: None,
        }
    }
}

/// Result of `dialogue().export` — the backend renders the project to a
/// Ren'Py script and reports where it wrote it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResult {
    pub project_id: String,
    #[serde(default)]
    pub script_path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_create_skips_unset_fields() {
        let payload = CharacterCreate::new("Alice", "p1");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"name": "Alice", "project_id": "p1"}));
    }

    #[test]
    fn test_character_update_sparse_serialization() {
        let payload = CharacterUpdate {
            color: Some("#FF6B6B".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"color": "#FF6B6B"}));
    }

    #[test]
    fn test_dialogue_line_minimal_payload() {
        let payload = DialogueLineCreate::new("hi", 0);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"text": "hi", "order": 0}));
    }

    #[test]
    fn test_character_deserializes_without_optionals() {
        let character: Character =
            serde_json::from_str(r##"{"id": "c1", "name": "Alice", "color": "#FF6B6B"}"##).unwrap();
        assert_eq!(character.id, "c1");
        assert!(character.nickname.is_none());
        assert!(character.project_id.is_none());
    }

    #[test]
    fn test_dialogue_line_with_embedded_character() {
        let line: DialogueLine = serde_json::from_value(json!({
            "id": "l1",
            "character": {"id": "c1", "name": "Alice", "color": "#FF6B6B"},
            "text": "Hello!",
            "expression": "happy",
            "order": 3
        }))
        .unwrap();
        assert_eq!(line.character.as_ref().unwrap().name, "Alice");
        assert_eq!(line.order, 3);
        assert!(line.metadata.is_none());
    }

    #[test]
    fn test_project_defaults_empty_collections() {
        let project: Project =
            serde_json::from_str(r#"{"id": "p1", "name": "Mystic Academy"}"#).unwrap();
        assert!(project.characters.is_empty());
        assert!(project.scenes.is_empty());
        assert!(project.created_at.is_none());
    }
}
