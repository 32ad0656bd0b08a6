//! Elf: a mind-control specialist
//!
//! Mind control grows on wins and fades on ties and losses. While it is
//! positive a loss is softened by 5 points. Life is not floored here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{Result, SimError};
use crate::core::types::{CreatureId, DEFAULT_LIFE_POINTS};
use crate::creature::{
    saturating_loss, sealed, validate_multiplier, write_summary, Creature, CreatureKind,
    CreatureStats, SecondaryResource, Weapon,
};

pub const DEFAULT_MIND_CONTROL: f64 = 1.5;
const WIN_GROWTH: f64 = 1.25;
const FADE: f64 = 0.75;
const ABSORBED_DAMAGE: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElfRecord")]
pub struct Elf {
    stats: CreatureStats,
    mind_control: f64,
}

#[derive(Deserialize)]
struct ElfRecord {
    stats: CreatureStats,
    mind_control: f64,
}

impl TryFrom<ElfRecord> for Elf {
    type Error = SimError;

    fn try_from(record: ElfRecord) -> Result<Self> {
        Ok(Self {
            stats: record.stats,
            mind_control: validate_multiplier("mind_control", record.mind_control)?,
        })
    }
}

impl Elf {
    /// Elf with 50 life points and a mind-control multiplier of 1.5
    pub fn new(id: impl Into<CreatureId>, name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            stats: CreatureStats {
                id: id.into(),
                name: name.into(),
                weapon,
                life_points: DEFAULT_LIFE_POINTS,
            },
            mind_control: DEFAULT_MIND_CONTROL,
        }
    }

    pub fn with_stats(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        weapon: Weapon,
        life_points: i32,
        mind_control: f64,
    ) -> Result<Self> {
        Ok(Self {
            stats: CreatureStats::new(id, name, weapon, life_points)?,
            mind_control: validate_multiplier("mind_control", mind_control)?,
        })
    }

    pub fn mind_control(&self) -> f64 {
        self.mind_control
    }
}

impl sealed::LifeState for Elf {
    fn stats_mut(&mut self) -> &mut CreatureStats {
        &mut self.stats
    }
}

impl Creature for Elf {
    fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    fn kind(&self) -> CreatureKind {
        CreatureKind::Elf
    }

    fn secondary(&self) -> SecondaryResource {
        SecondaryResource::MindControl(self.mind_control)
    }

    fn update_life_level(&mut self, delta: i32) {
        let life = self.stats.life_points;
        match delta.signum() {
            1 => {
                self.stats.life_points = life.saturating_add(delta);
                self.mind_control *= WIN_GROWTH;
            }
            0 => self.mind_control *= FADE,
            _ => {
                let loss = i64::from(delta.unsigned_abs());
                if self.mind_control > 0.0 {
                    self.mind_control *= FADE;
                    self.stats.life_points = saturating_loss(life, loss - ABSORBED_DAMAGE);
                } else {
                    self.stats.life_points = saturating_loss(life, loss);
                }
            }
        }
        tracing::trace!(
            id = %self.stats.id,
            delta,
            life = self.stats.life_points,
            mind_control = self.mind_control,
            "elf updated"
        );
    }
}

impl fmt::Display for Elf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eowyn() -> Elf {
        Elf::new("2", "Eowyn", Weapon::Arrow)
    }

    #[test]
    fn test_win_grows_mind_control() {
        let mut e = eowyn();
        e.update_life_level(10);
        assert_eq!(e.life_points(), 60);
        assert_eq!(e.mind_control(), 1.875);
    }

    #[test]
    fn test_tie_fades_mind_control() {
        let mut e = eowyn();
        e.update_life_level(0);
        assert_eq!(e.life_points(), 50);
        assert_eq!(e.mind_control(), 1.125);
    }

    #[test]
    fn test_loss_softened_while_mind_control_positive() {
        let mut e = eowyn();
        e.update_life_level(-10);
        assert_eq!(e.life_points(), 45);
        assert_eq!(e.mind_control(), 1.125);
    }

    #[test]
    fn test_loss_with_no_mind_control() {
        let mut e = Elf::with_stats("2", "Eowyn", Weapon::Arrow, 50, 0.0).unwrap();
        e.update_life_level(-20);
        assert_eq!(e.life_points(), 30);
        assert_eq!(e.mind_control(), 0.0);
    }

    #[test]
    fn test_life_may_go_negative() {
        let mut e = Elf::with_stats("2", "Eowyn", Weapon::Arrow, 10, 0.0).unwrap();
        e.update_life_level(-20);
        assert_eq!(e.life_points(), -10);
        assert!(!e.is_alive());
    }

    #[test]
    fn test_with_stats_rejects_bad_mind_control() {
        assert!(Elf::with_stats("2", "Eowyn", Weapon::Arrow, 50, -1.0).is_err());
        assert!(Elf::with_stats("2", "Eowyn", Weapon::Arrow, 50, f64::NAN).is_err());
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut e = eowyn();
        e.update_life_level(i32::MIN);
        assert_eq!(e.life_points(), -2_147_483_593);
        assert_eq!(e.mind_control(), 1.125);

        let mut e = Elf::with_stats("2", "Eowyn", Weapon::Arrow, 50, 0.0).unwrap();
        e.update_life_level(i32::MIN);
        assert_eq!(e.life_points(), -2_147_483_598);
        e.update_life_level(i32::MIN);
        assert_eq!(e.life_points(), i32::MIN);

        let mut e = eowyn();
        e.update_life_level(i32::MAX);
        assert_eq!(e.life_points(), i32::MAX);
    }

    #[test]
    fn test_deserialize_validates_mind_control() {
        let json = concat!(
            r#"{"stats":{"id":"2","name":"Eowyn","weapon":"arrow","life_points":50},"#,
            r#""mind_control":-1.5}"#
        );
        assert!(serde_json::from_str::<Elf>(json).is_err());

        let json = concat!(
            r#"{"stats":{"id":"2","name":"Eowyn","weapon":"arrow","life_points":-1},"#,
            r#""mind_control":1.5}"#
        );
        assert!(serde_json::from_str::<Elf>(json).is_err());

        let elf = eowyn();
        let back: Elf = serde_json::from_str(&serde_json::to_string(&elf).unwrap()).unwrap();
        assert_eq!(back, elf);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            eowyn().to_string(),
            "id: 2 name: Eowyn  life level: 50 weapon: arrow is alive true mind control: 1.5"
        );
    }
}
