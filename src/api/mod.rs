pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError, CharacterApi, DialogueApi, DEFAULT_BASE_URL};
pub use types::{
    Character, CharacterCreate, CharacterRef, CharacterUpdate, DialogueLine, DialogueLineCreate,
    ExportResult, Expression, Project, Scene,
};
