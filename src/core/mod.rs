pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::EncounterConfig;
pub use error::{Result, SimError};
pub use rng::EncounterRng;
pub use types::CreatureId;
