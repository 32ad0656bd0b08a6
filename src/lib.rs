//! Creature Sim - turn-based creature encounters
//!
//! Creatures carry a weapon rank and life points. Two creatures engage, the
//! weapon difference becomes a life-point delta, and each kind absorbs that
//! delta through its own secondary resource.

pub mod core;
pub mod creature;
pub mod engagement;
pub mod simulation;
