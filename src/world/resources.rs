//! Six-commodity resource vector
//!
//! Used both as a region's per-tick production record and as a faction's
//! stockpile or rate.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::core::types::FactionTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub food: f64,
    pub industry: f64,
    pub money: f64,
    pub science: f64,
    pub manpower: f64,
    pub materials: f64,
}

/// Cumulative stock per faction
pub type Stockpiles = FactionTable<Resources>;

/// Net change per faction for the current tick
pub type Rates = FactionTable<Resources>;

impl Resources {
    pub const ZERO: Resources = Resources {
        food: 0.0,
        industry: 0.0,
        money: 0.0,
        science: 0.0,
        manpower: 0.0,
        materials: 0.0,
    };

    /// True when every commodity is at least the matching amount in `cost`
    pub fn covers(&self, cost: &Resources) -> bool {
        self.food >= cost.food
            && self.industry >= cost.industry
            && self.money >= cost.money
            && self.science >= cost.science
            && self.manpower >= cost.manpower
            && self.materials >= cost.materials
    }

    /// Strict variant of [`covers`](Self::covers) with a safety margin on the
    /// money/industry/manpower components of `cost`
    pub fn exceeds(&self, cost: &Resources, factor: f64) -> bool {
        self.money > cost.money * factor
            && self.industry > cost.industry * factor
            && self.manpower > cost.manpower * factor
    }

    pub fn scaled(&self, factor: f64) -> Resources {
        Resources {
            food: self.food * factor,
            industry: self.industry * factor,
            money: self.money * factor,
            science: self.science * factor,
            manpower: self.manpower * factor,
            materials: self.materials * factor,
        }
    }

    /// Add `amount` to money, flooring the result at zero
    pub fn credit_money_clamped(&mut self, amount: f64) {
        self.money = (self.money + amount).max(0.0);
    }

    pub fn is_finite(&self) -> bool {
        [
            self.food,
            self.industry,
            self.money,
            self.science,
            self.manpower,
            self.materials,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Add for Resources {
    type Output = Resources;

    fn add(self, rhs: Resources) -> Resources {
        Resources {
            food: self.food + rhs.food,
            industry: self.industry + rhs.industry,
            money: self.money + rhs.money,
            science: self.science + rhs.science,
            manpower: self.manpower + rhs.manpower,
            materials: self.materials + rhs.materials,
        }
    }
}

impl AddAssign for Resources {
    fn add_assign(&mut self, rhs: Resources) {
        *self = *self + rhs;
    }
}

impl Sub for Resources {
    type Output = Resources;

    fn sub(self, rhs: Resources) -> Resources {
        self + rhs.scaled(-1.0)
    }
}

impl SubAssign for Resources {
    fn sub_assign(&mut self, rhs: Resources) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_requires_every_component() {
        let stock = Resources {
            money: 100.0,
            industry: 10.0,
            ..Resources::ZERO
        };
        let cost = Resources {
            money: 50.0,
            industry: 20.0,
            ..Resources::ZERO
        };
        assert!(!stock.covers(&cost));
        assert!(stock.covers(&Resources { industry: 10.0, ..cost }));
    }

    #[test]
    fn test_money_clamp() {
        let mut stock = Resources {
            money: 5.0,
            ..Resources::ZERO
        };
        stock.credit_money_clamped(-12.0);
        assert_eq!(stock.money, 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Resources {
            food: 1.0,
            money: 2.0,
            ..Resources::ZERO
        };
        let mut b = a + a;
        assert_eq!(b.money, 4.0);
        b -= a;
        assert_eq!(b, a);
    }
}
