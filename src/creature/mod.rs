//! Creatures and their life-update rules
//!
//! Every creature carries an id, a name, a weapon and a life-point total.
//! Each kind also owns one secondary resource that decides how it absorbs
//! the outcome of an engagement.

pub mod conjurer;
pub mod elf;
pub mod golem;
pub mod weapon;

pub use conjurer::Conjurer;
pub use elf::Elf;
pub use golem::Golem;
pub use weapon::Weapon;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{Result, SimError};
use crate::core::types::CreatureId;

/// Attributes shared by every creature kind
///
/// Fields are only writable inside the crate. Deserialized records go
/// through the same validation as [`CreatureStats::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StatsRecord")]
pub struct CreatureStats {
    pub(crate) id: CreatureId,
    pub(crate) name: String,
    pub(crate) weapon: Weapon,
    pub(crate) life_points: i32,
}

/// Unvalidated wire form of [`CreatureStats`]
#[derive(Deserialize)]
struct StatsRecord {
    id: CreatureId,
    name: String,
    weapon: Weapon,
    life_points: i32,
}

impl TryFrom<StatsRecord> for CreatureStats {
    type Error = SimError;

    fn try_from(record: StatsRecord) -> Result<Self> {
        Self::new(record.id, record.name, record.weapon, record.life_points)
    }
}

impl CreatureStats {
    /// Build stats, rejecting negative life points
    pub fn new(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        weapon: Weapon,
        life_points: i32,
    ) -> Result<Self> {
        if life_points < 0 {
            return Err(SimError::InvalidLifePoints(life_points));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            weapon,
            life_points,
        })
    }
}

/// The concrete kinds of creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureKind {
    /// Spell-caster; spells absorb hits
    Conjurer,
    /// Mind-control specialist
    Elf,
    /// Endurance specialist
    Golem,
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreatureKind::Conjurer => "conjurer",
            CreatureKind::Elf => "elf",
            CreatureKind::Golem => "golem",
        };
        f.write_str(name)
    }
}

/// Current value of a creature's secondary resource
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resource", content = "value", rename_all = "snake_case")]
pub enum SecondaryResource {
    Spells(u32),
    MindControl(f64),
    Endurance(f64),
}

impl fmt::Display for SecondaryResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondaryResource::Spells(n) => write!(f, "spells: {}", n),
            SecondaryResource::MindControl(m) => write!(f, "mind control: {}", m),
            SecondaryResource::Endurance(e) => write!(f, "endurance: {}", e),
        }
    }
}

mod sealed {
    use super::CreatureStats;

    /// Direct life mutation, reachable only from inside the crate
    pub trait LifeState {
        fn stats_mut(&mut self) -> &mut CreatureStats;

        /// Drop life points to zero
        fn incapacitate(&mut self) {
            self.stats_mut().life_points = 0;
        }
    }
}

pub(crate) use sealed::LifeState;

/// Contract every creature kind implements
///
/// `update_life_level` is the only public transition. Everything else is a
/// query over the stats record. The instant kill used by the engagement
/// resolver lives on a crate-private supertrait, so the trait cannot be
/// implemented outside this crate.
pub trait Creature: fmt::Display + sealed::LifeState {
    fn stats(&self) -> &CreatureStats;

    fn kind(&self) -> CreatureKind;

    fn secondary(&self) -> SecondaryResource;

    /// Apply the signed outcome of a weapon comparison.
    ///
    /// Positive means this creature won the exchange, zero is a tie and
    /// negative means it lost.
    fn update_life_level(&mut self, delta: i32);

    fn is_alive(&self) -> bool {
        self.stats().life_points > 0
    }

    fn life_points(&self) -> i32 {
        self.stats().life_points
    }

    fn weapon(&self) -> Weapon {
        self.stats().weapon
    }

    fn id(&self) -> &CreatureId {
        &self.stats().id
    }

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn snapshot(&self) -> CreatureSnapshot {
        let stats = self.stats();
        CreatureSnapshot {
            id: stats.id.clone(),
            name: stats.name.clone(),
            kind: self.kind(),
            weapon: stats.weapon,
            life_points: stats.life_points,
            alive: self.is_alive(),
            secondary: self.secondary(),
        }
    }
}

/// Serializable point-in-time view of a creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub id: CreatureId,
    pub name: String,
    pub kind: CreatureKind,
    pub weapon: Weapon,
    pub life_points: i32,
    pub alive: bool,
    pub secondary: SecondaryResource,
}

/// Shared one-line summary used by every kind's `Display`
pub(crate) fn write_summary<C: Creature + ?Sized>(
    creature: &C,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let stats = creature.stats();
    write!(
        f,
        "id: {} name: {}  life level: {} weapon: {} is alive {} {}",
        stats.id,
        stats.name,
        stats.life_points,
        stats.weapon,
        creature.is_alive(),
        creature.secondary()
    )
}

/// Reject negative or non-finite multipliers
pub(crate) fn validate_multiplier(resource: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::InvalidResource { resource, value });
    }
    Ok(value)
}

/// Subtract a loss from life, clamping at the `i32` bounds
pub(crate) fn saturating_loss(life: i32, loss: i64) -> i32 {
    (i64::from(life) - loss).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
