pub mod roster;

pub use roster::{Roster, RoundEngagement};
