//! The action catalog: one named operation per day, each with its own cost
//! and success rule.
//!
//! Every action takes the sheet by exclusive mutable reference and either
//! mutates it and reports an [`ActionOutcome`], or reports
//! [`InsufficientResources`] and leaves it untouched. Costs are checked in
//! full before any field is mutated; there are no partial spends.

use rand::Rng;
use std::fmt;

use crate::character::creation::GrowthPath;
use crate::character::sheet::Sheet;
use crate::combat::encounter::{resolve, EncounterOutcome};
use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GatherWood,
    GatherFood,
    BuildFarmland,
    DevelopTech,
    UpgradeShelter,
    Train,
    Adventure,
}

impl Action {
    /// All actions in menu order.
    pub const ALL: [Action; 7] = [
        Action::GatherWood,
        Action::GatherFood,
        Action::BuildFarmland,
        Action::DevelopTech,
        Action::UpgradeShelter,
        Action::Train,
        Action::Adventure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::GatherWood => "Gather wood",
            Action::GatherFood => "Gather food",
            Action::BuildFarmland => "Build farmland",
            Action::DevelopTech => "Develop tech",
            Action::UpgradeShelter => "Upgrade shelter",
            Action::Train => "Train (attack/magic)",
            Action::Adventure => "Adventure",
        }
    }

    /// Required (wood, food) for this action at the sheet's current levels,
    /// or `None` for uncosted actions. Costs rise linearly with level.
    pub fn cost(&self, sheet: &Sheet) -> Option<(i32, i32)> {
        match self {
            Action::BuildFarmland => Some((
                FARMLAND_BASE_WOOD_COST + sheet.farmland as i32 * FARMLAND_WOOD_COST_PER_LEVEL,
                FARMLAND_FOOD_COST,
            )),
            Action::DevelopTech => Some((
                TECH_BASE_WOOD_COST + sheet.tech as i32 * TECH_WOOD_COST_PER_LEVEL,
                TECH_FOOD_COST,
            )),
            Action::UpgradeShelter => Some((
                SHELTER_BASE_WOOD_COST + sheet.shelter as i32 * SHELTER_WOOD_COST_PER_LEVEL,
                0,
            )),
            _ => None,
        }
    }
}

/// What an action did on success. The presentation layer turns these into
/// flavor text; the core never prints.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    WoodGathered { amount: i32 },
    FoodGathered { amount: i32 },
    FarmlandBuilt { level: u32 },
    TechDeveloped { level: u32 },
    ShelterUpgraded { level: u32 },
    Trained { path: GrowthPath, gain: i32 },
    Adventured(EncounterOutcome),
}

/// A costed action was attempted without the resources to pay for it.
/// Carries the exact requirement so the player can be told the shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientResources {
    pub wood_needed: i32,
    pub food_needed: i32,
}

impl fmt::Display for InsufficientResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.food_needed > 0 {
            write!(
                f,
                "requires {} wood and {} food",
                self.wood_needed, self.food_needed
            )
        } else {
            write!(f, "requires {} wood", self.wood_needed)
        }
    }
}

impl std::error::Error for InsufficientResources {}

/// Executes one action against the sheet.
///
/// Uncosted actions never fail. Costed actions check sufficiency first and
/// return the exact requirement on failure, leaving the sheet unchanged.
pub fn perform(
    action: Action,
    sheet: &mut Sheet,
    rng: &mut impl Rng,
) -> Result<ActionOutcome, InsufficientResources> {
    if let Some((wood_needed, food_needed)) = action.cost(sheet) {
        if sheet.wood < wood_needed || sheet.food < food_needed {
            return Err(InsufficientResources {
                wood_needed,
                food_needed,
            });
        }
        sheet.wood -= wood_needed;
        sheet.food -= food_needed;
    }

    let outcome = match action {
        Action::GatherWood => {
            let amount = rng.gen_range(WOOD_GATHER_MIN..=WOOD_GATHER_MAX);
            sheet.wood += amount;
            ActionOutcome::WoodGathered { amount }
        }
        Action::GatherFood => {
            let amount = rng.gen_range(FOOD_GATHER_MIN..=FOOD_GATHER_MAX);
            sheet.food += amount;
            ActionOutcome::FoodGathered { amount }
        }
        Action::BuildFarmland => {
            sheet.farmland += 1;
            ActionOutcome::FarmlandBuilt {
                level: sheet.farmland,
            }
        }
        Action::DevelopTech => {
            sheet.tech += 1;
            match sheet.path {
                GrowthPath::Martial => sheet.attack += TECH_COMBAT_BONUS,
                GrowthPath::Arcane => sheet.magic += TECH_COMBAT_BONUS,
            }
            ActionOutcome::TechDeveloped { level: sheet.tech }
        }
        Action::UpgradeShelter => {
            sheet.shelter += 1;
            sheet.hp += SHELTER_HP_BONUS;
            ActionOutcome::ShelterUpgraded {
                level: sheet.shelter,
            }
        }
        Action::Train => {
            let gain = rng.gen_range(TRAIN_GAIN_MIN..=TRAIN_GAIN_MAX);
            match sheet.path {
                GrowthPath::Martial => sheet.attack += gain,
                GrowthPath::Arcane => sheet.magic += gain,
            }
            ActionOutcome::Trained {
                path: sheet.path,
                gain,
            }
        }
        Action::Adventure => ActionOutcome::Adventured(resolve(sheet, rng)),
    };

    Ok(outcome)
}
