//! Resolves an adventure: a randomized duel of a derived player-power score
//! against a randomized enemy-power score, with win/loss payoffs.
//!
//! This is the only place the day count feeds back into difficulty, so
//! encounters escalate as the game runs long.

use rand::Rng;

use crate::character::sheet::{Flag, Sheet};
use crate::core::constants::*;

/// The fixed set of foes roamed into on an adventure.
pub const ENEMY_NAMES: [&str; 4] = [
    "Wildland Wolfpack",
    "Fallen Orc",
    "Mist Wraith",
    "Ruin Sentinel",
];

/// Full report of a resolved encounter, including both power scores so the
/// interface can render the duel.
#[derive(Debug, Clone)]
pub struct EncounterOutcome {
    pub enemy: &'static str,
    pub enemy_power: i32,
    pub player_power: i32,
    pub result: EncounterResult,
}

#[derive(Debug, Clone)]
pub enum EncounterResult {
    /// Ties favor the player.
    Victory {
        wood_gained: i32,
        food_gained: i32,
        /// True exactly once per game, when this win sets [`Flag::FirstAdventure`].
        first_adventure: bool,
    },
    Defeat {
        damage: i32,
    },
}

/// Resolves one encounter against the sheet.
///
/// enemy power = uniform(8,20) + day/2; player power = attack + magic/2 +
/// uniform(0,6). The player wins on `player_power >= enemy_power`. A win
/// pays out wood and food; a loss costs hp. Nothing else is touched.
pub fn resolve(sheet: &mut Sheet, rng: &mut impl Rng) -> EncounterOutcome {
    let enemy = ENEMY_NAMES[rng.gen_range(0..ENEMY_NAMES.len())];
    let enemy_power =
        rng.gen_range(ENEMY_POWER_MIN..=ENEMY_POWER_MAX) + sheet.day as i32 / 2;
    let player_power =
        sheet.attack + sheet.magic / 2 + rng.gen_range(0..=PLAYER_POWER_ROLL_MAX);

    let result = if player_power >= enemy_power {
        let wood_gained = rng.gen_range(ADVENTURE_WOOD_REWARD_MIN..=ADVENTURE_WOOD_REWARD_MAX);
        let food_gained = rng.gen_range(ADVENTURE_FOOD_REWARD_MIN..=ADVENTURE_FOOD_REWARD_MAX);
        sheet.wood += wood_gained;
        sheet.food += food_gained;
        let first_adventure = sheet.set_flag(Flag::FirstAdventure);
        EncounterResult::Victory {
            wood_gained,
            food_gained,
            first_adventure,
        }
    } else {
        let damage = rng.gen_range(DEFEAT_DAMAGE_MIN..=DEFEAT_DAMAGE_MAX);
        sheet.hp -= damage;
        EncounterResult::Defeat { damage }
    };

    EncounterOutcome {
        enemy,
        enemy_power,
        player_power,
        result,
    }
}
