use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::character::creation::{Faction, GrowthPath, Race};

/// One-time narrative markers. Adding a marker twice has no effect; the
/// membership check gates the associated acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    FirstAdventure,
}

/// The full mutable state of the player character.
///
/// Created once by character creation and mutated in place by actions and
/// end-of-day settlement. Identity fields are never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub race: Race,
    pub faction: Faction,
    pub path: GrowthPath,
    pub hp: i32,
    pub attack: i32,
    pub magic: i32,
    pub wood: i32,
    pub food: i32,
    pub farmland: u32,
    pub shelter: u32,
    pub tech: u32,
    pub day: u32,
    pub flags: HashSet<Flag>,
}

impl Sheet {
    /// Sets a flag. Returns true if it was newly set, false if already present.
    pub fn set_flag(&mut self, flag: Flag) -> bool {
        self.flags.insert(flag)
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Renders the five-line status block shown at the start of each day.
    pub fn status(&self) -> String {
        format!(
            "\n===== Day {} =====\n\
             Name: {} | Race: {} | Faction: {} | Path: {}\n\
             HP: {} | Attack: {} | Magic: {}\n\
             Wood: {} | Food: {} | Farmland: lvl {}\n\
             Shelter: lvl {} | Tech: lvl {}",
            self.day,
            self.name,
            self.race.name(),
            self.faction.name(),
            self.path.name(),
            self.hp,
            self.attack,
            self.magic,
            self.wood,
            self.food,
            self.farmland,
            self.shelter,
            self.tech,
        )
    }
}
