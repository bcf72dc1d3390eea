//! One-time character creation: maps the player's categorical choices into
//! starting-attribute modifiers and produces the initial sheet.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::character::sheet::Sheet;
use crate::core::constants::*;

/// Substituted when the entered name is empty or whitespace-only.
pub const DEFAULT_NAME: &str = "Nameless Wanderer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    Human,
    Orc,
    Elf,
    Dwarf,
}

impl Race {
    /// All races in creation-menu order.
    pub const ALL: [Race; 4] = [Race::Human, Race::Orc, Race::Elf, Race::Dwarf];

    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Orc => "Orc",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    DawnAlliance,
    IronTribes,
    DuskCouncil,
}

impl Faction {
    /// All factions in creation-menu order.
    pub const ALL: [Faction; 3] = [
        Faction::DawnAlliance,
        Faction::IronTribes,
        Faction::DuskCouncil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Faction::DawnAlliance => "Dawn Alliance",
            Faction::IronTribes => "Iron Tribes",
            Faction::DuskCouncil => "Dusk Council",
        }
    }
}

/// The player's chosen specialization, governing which combat attribute
/// training and technology enhance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPath {
    Martial,
    Arcane,
}

impl GrowthPath {
    /// Both paths in creation-menu order.
    pub const ALL: [GrowthPath; 2] = [GrowthPath::Martial, GrowthPath::Arcane];

    pub fn name(&self) -> &'static str {
        match self {
            GrowthPath::Martial => "Martial Training",
            GrowthPath::Arcane => "Arcane Study",
        }
    }
}

/// The three categorical selections plus the free-text name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterChoices {
    pub name: String,
    pub race: Race,
    pub faction: Faction,
    pub path: GrowthPath,
}

/// Builds a fully initialized sheet from the creation choices.
///
/// Bonuses are additive and applied once; they touch disjoint or summable
/// attributes, so application order does not matter.
pub fn create_sheet(choices: CharacterChoices) -> Sheet {
    let name = if choices.name.trim().is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        choices.name
    };

    let mut sheet = Sheet {
        name,
        race: choices.race,
        faction: choices.faction,
        path: choices.path,
        hp: BASE_HP,
        attack: BASE_ATTACK,
        magic: BASE_MAGIC,
        wood: 0,
        food: STARTING_FOOD,
        farmland: 0,
        shelter: 0,
        tech: 0,
        day: 1,
        flags: HashSet::new(),
    };

    match sheet.race {
        Race::Orc => {
            sheet.attack += ORC_ATTACK_BONUS;
            sheet.hp += ORC_HP_BONUS;
        }
        Race::Elf => sheet.magic += ELF_MAGIC_BONUS,
        Race::Dwarf => sheet.wood += DWARF_WOOD_BONUS,
        Race::Human => {}
    }

    match sheet.path {
        GrowthPath::Martial => sheet.attack += MARTIAL_ATTACK_BONUS,
        GrowthPath::Arcane => sheet.magic += ARCANE_MAGIC_BONUS,
    }

    match sheet.faction {
        Faction::DawnAlliance => sheet.food += DAWN_ALLIANCE_FOOD_BONUS,
        Faction::IronTribes => sheet.wood += IRON_TRIBES_WOOD_BONUS,
        Faction::DuskCouncil => sheet.magic += DUSK_COUNCIL_MAGIC_BONUS,
    }

    sheet
}
