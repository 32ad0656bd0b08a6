//! Conjurer: a spell-caster
//!
//! Spells are spent on ties and on lost exchanges. While any remain, a lost
//! exchange costs a spell and no life. Life is floored at zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::Result;
use crate::core::types::{CreatureId, DEFAULT_LIFE_POINTS};
use crate::creature::{
    saturating_loss, sealed, write_summary, Creature, CreatureKind, CreatureStats,
    SecondaryResource, Weapon,
};

pub const DEFAULT_NUM_SPELLS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjurer {
    stats: CreatureStats,
    num_spells: u32,
}

impl Conjurer {
    /// Conjurer with 50 life points and 5 spells
    pub fn new(id: impl Into<CreatureId>, name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            stats: CreatureStats {
                id: id.into(),
                name: name.into(),
                weapon,
                life_points: DEFAULT_LIFE_POINTS,
            },
            num_spells: DEFAULT_NUM_SPELLS,
        }
    }

    pub fn with_stats(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        weapon: Weapon,
        life_points: i32,
        num_spells: u32,
    ) -> Result<Self> {
        Ok(Self {
            stats: CreatureStats::new(id, name, weapon, life_points)?,
            num_spells,
        })
    }

    pub fn num_spells(&self) -> u32 {
        self.num_spells
    }

    /// Spend one spell if any remain
    fn spend_spell(&mut self) -> bool {
        if self.num_spells > 0 {
            self.num_spells -= 1;
            true
        } else {
            false
        }
    }
}

impl sealed::LifeState for Conjurer {
    fn stats_mut(&mut self) -> &mut CreatureStats {
        &mut self.stats
    }
}

impl Creature for Conjurer {
    fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    fn kind(&self) -> CreatureKind {
        CreatureKind::Conjurer
    }

    fn secondary(&self) -> SecondaryResource {
        SecondaryResource::Spells(self.num_spells)
    }

    fn update_life_level(&mut self, delta: i32) {
        let life = self.stats.life_points;
        match delta.signum() {
            1 => {
                self.stats.life_points = life.saturating_add(delta);
                self.num_spells = self.num_spells.saturating_add(1);
            }
            0 => {
                self.spend_spell();
            }
            _ => {
                if !self.spend_spell() {
                    let loss = i64::from(delta.unsigned_abs());
                    self.stats.life_points = saturating_loss(life, loss).max(0);
                }
            }
        }
        tracing::trace!(
            id = %self.stats.id,
            delta,
            life = self.stats.life_points,
            spells = self.num_spells,
            "conjurer updated"
        );
    }
}

impl fmt::Display for Conjurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}
