//! Engagement resolution
//!
//! Weapon powers are compared once; the first creature receives the
//! difference and the second its negation. How much that hurts is up to
//! each creature's own `update_life_level`.

use serde::{Deserialize, Serialize};

use crate::core::rng::{EncounterRng, INSTANT_KILL_CHANCE};
use crate::creature::{Creature, LifeState};

/// Tunable parameters of an engagement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementRules {
    /// Probability that the first creature is reduced to zero life before
    /// the weapon comparison
    pub instant_kill_chance: f64,
}

impl Default for EngagementRules {
    fn default() -> Self {
        Self {
            instant_kill_chance: INSTANT_KILL_CHANCE,
        }
    }
}

/// Outcome of an engagement that took place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementReport {
    /// Delta applied to the first creature; the second received `-fight`
    pub fight: i32,
    /// Whether the first creature was instantly reduced to zero life
    pub instant_kill: bool,
    pub attacker_life: i32,
    pub defender_life: i32,
    pub attacker_alive: bool,
    pub defender_alive: bool,
}

/// Resolve one engagement between `attacker` and `defender`
///
/// Returns `None` without touching either creature (or the RNG) when one of
/// them is already dead.
///
/// The instant kill does not end the engagement: the weapon deltas are still
/// applied afterwards, so a zeroed attacker with the stronger weapon comes
/// back with `fight` life points.
pub fn resolve_engagement<A, B>(
    attacker: &mut A,
    defender: &mut B,
    rng: &mut EncounterRng,
    rules: &EngagementRules,
) -> Option<EngagementReport>
where
    A: Creature + ?Sized,
    B: Creature + ?Sized,
{
    if !attacker.is_alive() || !defender.is_alive() {
        tracing::debug!(
            attacker = %attacker.id(),
            defender = %defender.id(),
            "engagement skipped, a combatant is dead"
        );
        return None;
    }

    let instant_kill = rng.chance(rules.instant_kill_chance);
    if instant_kill {
        tracing::debug!(attacker = %attacker.id(), "instant kill");
        attacker.incapacitate();
    }

    let fight = attacker.weapon().advantage_over(defender.weapon());
    attacker.update_life_level(fight);
    defender.update_life_level(-fight);

    let report = EngagementReport {
        fight,
        instant_kill,
        attacker_life: attacker.life_points(),
        defender_life: defender.life_points(),
        attacker_alive: attacker.is_alive(),
        defender_alive: defender.is_alive(),
    };

    tracing::debug!(
        attacker = %attacker.id(),
        defender = %defender.id(),
        fight,
        instant_kill,
        attacker_life = report.attacker_life,
        defender_life = report.defender_life,
        "engagement resolved"
    );

    Some(report)
}

/// Resolve an engagement with the default 5% instant-kill chance
pub fn do_engagement<A, B>(
    attacker: &mut A,
    defender: &mut B,
    rng: &mut EncounterRng,
) -> Option<EngagementReport>
where
    A: Creature + ?Sized,
    B: Creature + ?Sized,
{
    resolve_engagement(attacker, defender, rng, &EngagementRules::default())
}
