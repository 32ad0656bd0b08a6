//! Weapon ranks
//!
//! Every creature carries exactly one weapon. Weapons are compared by power
//! and the difference becomes the life-point delta of an engagement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SimError;

/// Weapon rank, declared weakest first so the derived ordering follows power
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weapon {
    Club,
    Arrow,
    Magic,
}

impl Weapon {
    pub const ALL: [Weapon; 3] = [Weapon::Magic, Weapon::Arrow, Weapon::Club];

    /// Integer power used in weapon comparison
    pub fn power(self) -> i32 {
        match self {
            Weapon::Magic => 30,
            Weapon::Arrow => 20,
            Weapon::Club => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weapon::Magic => "magic",
            Weapon::Arrow => "arrow",
            Weapon::Club => "club",
        }
    }

    /// Signed power difference `self - other`
    pub fn advantage_over(self, other: Weapon) -> i32 {
        self.power() - other.power()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weapon {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "magic" => Ok(Weapon::Magic),
            "arrow" => Ok(Weapon::Arrow),
            "club" => Ok(Weapon::Club),
            _ => Err(SimError::UnknownWeapon(s.to_string())),
        }
    }
}
