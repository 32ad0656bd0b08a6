use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Invalid life points: {0} (must be >= 0)")]
    InvalidLifePoints(i32),

    #[error("Invalid {resource}: {value} (must be finite and >= 0)")]
    InvalidResource { resource: &'static str, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Creature not found at roster index {0}")]
    CreatureNotFound(usize),

    #[error("Creature at roster index {0} cannot engage itself")]
    SameCreature(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
