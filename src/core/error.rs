use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Only configuration and lookup problems are returned to the caller. Broken
/// HP/MP bounds are clamped where they are found and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Skill not found: {0}")]
    UnknownSkill(String),

    #[error("Monster template not found: {0}")]
    UnknownMonster(String),

    #[error("Zone not found: {0}")]
    UnknownZone(String),

    #[error("Race not found: {0}")]
    UnknownRace(String),

    #[error("Class not found: {0}")]
    UnknownClass(String),

    #[error("Class {class} is not available to race {race}")]
    ClassUnavailable { class: String, race: String },

    #[error("Zone {zone} requires level {required} (character is level {level})")]
    ZoneLocked {
        zone: String,
        required: u32,
        level: u32,
    },

    #[error("Zone {0} has no monsters to encounter")]
    EmptyZone(String),

    #[error("Invalid character name: {0}")]
    InvalidName(String),

    #[error("Character {0} has been defeated")]
    CharacterDefeated(String),

    #[error("Session not found: {0}")]
    UnknownSession(String),

    #[error("Session already registered: {0}")]
    DuplicateSession(String),

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::CatalogParse(err.to_string())
    }
}
