//! End-of-day settlement: food consumption, periodic harvest, day increment,
//! and the terminal checks.

use rand::Rng;

use crate::character::sheet::Sheet;
use crate::core::constants::*;

/// Where the day left the game. Loss is checked before victory, so a sheet
/// that starves to death on the day it would win still loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayVerdict {
    Playing,
    Lost,
    Won,
}

/// What settlement did to the sheet, for presentation.
#[derive(Debug, Clone)]
pub struct SettlementReport {
    pub consumed: i32,
    /// Food ran out and the shortfall was taken out of hp.
    pub starved: bool,
    /// Food gained from farmland, on harvest days only.
    pub harvest: Option<i32>,
    pub verdict: DayVerdict,
}

/// Runs the end-of-day sequence on the sheet.
///
/// Consumption shrinks with farmland down to a floor. Food may go negative
/// only inside this function: the deficit is converted 1:1 into hp damage
/// and food is floored to zero before returning. The day increments exactly
/// once, after consumption and harvest, before the terminal checks.
pub fn settle(sheet: &mut Sheet, rng: &mut impl Rng) -> SettlementReport {
    let consumed =
        (BASE_DAILY_CONSUMPTION - sheet.farmland as i32).max(MIN_DAILY_CONSUMPTION);
    sheet.food -= consumed;
    let starved = sheet.food < 0;
    if starved {
        sheet.hp += sheet.food;
        sheet.food = 0;
    }

    let harvest = if sheet.day % HARVEST_INTERVAL_DAYS == 0 && sheet.farmland > 0 {
        let yield_per_level =
            rng.gen_range(HARVEST_YIELD_PER_LEVEL_MIN..=HARVEST_YIELD_PER_LEVEL_MAX);
        let gained = sheet.farmland as i32 * yield_per_level;
        sheet.food += gained;
        Some(gained)
    } else {
        None
    };

    sheet.day += 1;

    let verdict = if sheet.hp <= 0 {
        DayVerdict::Lost
    } else if sheet.shelter >= VICTORY_SHELTER_LEVEL
        && sheet.tech >= VICTORY_TECH_LEVEL
        && sheet.day > VICTORY_DAY_THRESHOLD
    {
        DayVerdict::Won
    } else {
        DayVerdict::Playing
    };

    SettlementReport {
        consumed,
        starved,
        harvest,
        verdict,
    }
}
