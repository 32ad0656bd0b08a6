//! A roster of creatures that engage each other in rounds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{Result, SimError};
use crate::core::rng::EncounterRng;
use crate::core::types::{ID_RANGE_MAX, ID_RANGE_MIN};
use crate::creature::{Conjurer, Creature, CreatureSnapshot, Elf, Golem, Weapon};
use crate::engagement::{resolve_engagement, EngagementReport, EngagementRules};

/// One engagement that happened during a round, by roster index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEngagement {
    pub attacker: usize,
    pub defender: usize,
    pub report: EngagementReport,
}

/// Owned collection of creatures of any kind
#[derive(Default)]
pub struct Roster {
    creatures: Vec<Box<dyn Creature>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock cast: Eowyn, Gandalf, Morgana and Turf
    pub fn sample(rng: &mut EncounterRng) -> Self {
        Self::sample_in(rng, ID_RANGE_MIN, ID_RANGE_MAX)
    }

    /// The stock cast with ids drawn from `[id_min, id_max]`
    pub fn sample_in(rng: &mut EncounterRng, id_min: u32, id_max: u32) -> Self {
        let mut roster = Self::new();
        roster.push(Elf::new(rng.generate_id_in(id_min, id_max), "Eowyn", Weapon::Arrow));
        roster.push(Conjurer::new(rng.generate_id_in(id_min, id_max), "Gandalf", Weapon::Magic));
        roster.push(Conjurer::new(rng.generate_id_in(id_min, id_max), "Morgana", Weapon::Magic));
        roster.push(Golem::new(rng.generate_id_in(id_min, id_max), "Turf", Weapon::Club));
        tracing::info!("Created sample roster of {} creatures", roster.len());
        roster
    }

    pub fn push<C: Creature + 'static>(&mut self, creature: C) {
        self.creatures.push(Box::new(creature));
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Creature> {
        self.creatures.get(index).map(|c| &**c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Creature> {
        self.creatures.iter().map(|c| &**c)
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|c| c.is_alive()).count()
    }

    pub fn survivors(&self) -> Vec<&dyn Creature> {
        self.iter().filter(|c| c.is_alive()).collect()
    }

    pub fn snapshots(&self) -> Vec<CreatureSnapshot> {
        self.iter().map(|c| c.snapshot()).collect()
    }

    /// Engage the creatures at `attacker` and `defender`
    ///
    /// `Ok(None)` means the engagement was skipped because one side is dead.
    pub fn engage(
        &mut self,
        attacker: usize,
        defender: usize,
        rng: &mut EncounterRng,
        rules: &EngagementRules,
    ) -> Result<Option<EngagementReport>> {
        let (a, b) = self.pair_mut(attacker, defender)?;
        Ok(resolve_engagement(&mut **a, &mut **b, rng, rules))
    }

    /// Engage every pair `(i, j)` with `i < j` once, in index order
    pub fn run_round(
        &mut self,
        rng: &mut EncounterRng,
        rules: &EngagementRules,
    ) -> Vec<RoundEngagement> {
        let mut engagements = Vec::new();
        let n = self.creatures.len();

        for attacker in 0..n {
            for defender in (attacker + 1)..n {
                let (a, b) = split_pair(&mut self.creatures, attacker, defender);
                if let Some(report) = resolve_engagement(&mut **a, &mut **b, rng, rules) {
                    engagements.push(RoundEngagement {
                        attacker,
                        defender,
                        report,
                    });
                }
            }
        }

        tracing::info!(
            engagements = engagements.len(),
            alive = self.alive_count(),
            "round complete"
        );
        engagements
    }

    /// Run up to `max_rounds` rounds
    ///
    /// Stops early once fewer than two creatures are alive, or when a round
    /// changed nothing and no instant kill can happen, since every later
    /// round would repeat it. The returned list only holds rounds that ran
    /// to completion and changed something.
    pub fn run_rounds(
        &mut self,
        rng: &mut EncounterRng,
        rules: &EngagementRules,
        max_rounds: u32,
    ) -> Vec<Vec<RoundEngagement>> {
        let mut rounds = Vec::new();
        for round in 0..max_rounds {
            if self.alive_count() < 2 {
                tracing::info!(round, "fewer than two creatures alive, stopping");
                break;
            }
            let before = self.snapshots();
            let engagements = self.run_round(rng, rules);
            if rules.instant_kill_chance <= 0.0 && self.snapshots() == before {
                tracing::info!(round, "round changed nothing, stopping");
                break;
            }
            rounds.push(engagements);
        }
        rounds
    }

    fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Box<dyn Creature>, &mut Box<dyn Creature>)> {
        if first == second {
            return Err(SimError::SameCreature(first));
        }
        for index in [first, second] {
            if index >= self.creatures.len() {
                return Err(SimError::CreatureNotFound(index));
            }
        }
        Ok(split_pair(&mut self.creatures, first, second))
    }
}

/// Two distinct mutable elements; indices must differ and be in bounds
fn split_pair<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    if first < second {
        let (left, right) = items.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for creature in self.iter() {
            writeln!(f, "{}", creature)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roster")
            .field("len", &self.creatures.len())
            .field("alive", &self.alive_count())
            .finish()
    }
}
