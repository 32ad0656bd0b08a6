//! Golem: an endurance specialist

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{Result, SimError};
use crate::core::types::{CreatureId, DEFAULT_LIFE_POINTS};
use crate::creature::{
    saturating_loss, sealed, validate_multiplier, write_summary, Creature, CreatureKind,
    CreatureStats, SecondaryResource, Weapon,
};

pub const DEFAULT_ENDURANCE: f64 = 20.0;
const WIN_GROWTH: f64 = 1.25;
const DECAY: f64 = 0.5;
const ABSORBED_DAMAGE: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GolemRecord")]
pub struct Golem {
    stats: CreatureStats,
    endurance: f64,
}

#[derive(Deserialize)]
struct GolemRecord {
    stats: CreatureStats,
    endurance: f64,
}

impl TryFrom<GolemRecord> for Golem {
    type Error = SimError;

    fn try_from(record: GolemRecord) -> Result<Self> {
        Ok(Self {
            stats: record.stats,
            endurance: validate_multiplier("endurance", record.endurance)?,
        })
    }
}

impl Golem {
    /// Golem with 50 life points and an endurance of 20
    pub fn new(id: impl Into<CreatureId>, name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            stats: CreatureStats {
                id: id.into(),
                name: name.into(),
                weapon,
                life_points: DEFAULT_LIFE_POINTS,
            },
            endurance: DEFAULT_ENDURANCE,
        }
    }

    pub fn with_stats(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        weapon: Weapon,
        life_points: i32,
        endurance: f64,
    ) -> Result<Self> {
        Ok(Self {
            stats: CreatureStats::new(id, name, weapon, life_points)?,
            endurance: validate_multiplier("endurance", endurance)?,
        })
    }

    pub fn endurance(&self) -> f64 {
        self.endurance
    }
}

impl sealed::LifeState for Golem {
    fn stats_mut(&mut self) -> &mut CreatureStats {
        &mut self.stats
    }
}

impl Creature for Golem {
    fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    fn kind(&self) -> CreatureKind {
        CreatureKind::Golem
    }

    fn secondary(&self) -> SecondaryResource {
        SecondaryResource::Endurance(self.endurance)
    }

    // Endurance only decays by halving, so the 5-point absorption holds until
    // the value underflows.
    fn update_life_level(&mut self, delta: i32) {
        let life = self.stats.life_points;
        match delta.signum() {
            1 => {
                self.stats.life_points = life.saturating_add(delta);
                self.endurance *= WIN_GROWTH;
            }
            0 => self.endurance *= DECAY,
            _ => {
                let loss = i64::from(delta.unsigned_abs());
                if self.endurance > 0.0 {
                    self.stats.life_points = saturating_loss(life, loss - ABSORBED_DAMAGE);
                    self.endurance *= DECAY;
                } else {
                    self.stats.life_points = saturating_loss(life, loss);
                }
            }
        }
        tracing::trace!(
            id = %self.stats.id,
            delta,
            life = self.stats.life_points,
            endurance = self.endurance,
            "golem updated"
        );
    }
}

impl fmt::Display for Golem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turf() -> Golem {
        Golem::new("4", "Turf", Weapon::Club)
    }

    #[test]
    fn test_win_grows_endurance() {
        let mut g = turf();
        g.update_life_level(20);
        assert_eq!(g.life_points(), 70);
        assert_eq!(g.endurance(), 25.0);
    }

    #[test]
    fn test_tie_halves_endurance() {
        let mut g = turf();
        g.update_life_level(0);
        assert_eq!(g.life_points(), 50);
        assert_eq!(g.endurance(), 10.0);
    }

    #[test]
    fn test_loss_softened_by_endurance() {
        let mut g = turf();
        g.update_life_level(-20);
        assert_eq!(g.life_points(), 35);
        assert_eq!(g.endurance(), 10.0);
    }

    #[test]
    fn test_loss_without_endurance() {
        let mut g = Golem::with_stats("4", "Turf", Weapon::Club, 50, 0.0).unwrap();
        g.update_life_level(-10);
        assert_eq!(g.life_points(), 40);
        assert_eq!(g.endurance(), 0.0);
    }

    #[test]
    fn test_life_may_go_negative() {
        let mut g = Golem::with_stats("4", "Turf", Weapon::Club, 5, 0.0).unwrap();
        g.update_life_level(-20);
        assert_eq!(g.life_points(), -15);
        assert!(!g.is_alive());
    }

    #[test]
    fn test_repeated_losses_wear_down() {
        let mut g = turf();
        for _ in 0..4 {
            g.update_life_level(-20);
        }
        // 15 per loss while endurance stays positive
        assert_eq!(g.life_points(), -10);
        assert_eq!(g.endurance(), 1.25);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut g = turf();
        g.update_life_level(i32::MIN);
        assert_eq!(g.life_points(), -2_147_483_593);
        assert_eq!(g.endurance(), 10.0);

        let mut g = Golem::with_stats("4", "Turf", Weapon::Club, 50, 0.0).unwrap();
        g.update_life_level(i32::MIN);
        assert_eq!(g.life_points(), -2_147_483_598);
        g.update_life_level(i32::MIN);
        assert_eq!(g.life_points(), i32::MIN);

        let mut g = turf();
        g.update_life_level(i32::MAX);
        assert_eq!(g.life_points(), i32::MAX);
        g.update_life_level(i32::MAX);
        assert_eq!(g.life_points(), i32::MAX);
    }

    #[test]
    fn test_deserialize_validates_endurance() {
        let json = concat!(
            r#"{"stats":{"id":"4","name":"Turf","weapon":"club","life_points":50},"#,
            r#""endurance":-3.0}"#
        );
        assert!(serde_json::from_str::<Golem>(json).is_err());

        let golem = turf();
        let back: Golem = serde_json::from_str(&serde_json::to_string(&golem).unwrap()).unwrap();
        assert_eq!(back, golem);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            turf().to_string(),
            "id: 4 name: Turf  life level: 50 weapon: club is alive true endurance: 20"
        );
    }
}
