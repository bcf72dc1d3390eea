//! The day-cycle controller: presents state, takes one action choice,
//! executes it, settles the day, and loops until a terminal state.

use rand::Rng;

use crate::character::creation::{
    create_sheet, CharacterChoices, Faction, GrowthPath, Race,
};
use crate::character::sheet::Sheet;
use crate::combat::encounter::{EncounterOutcome, EncounterResult};
use crate::core::actions::{perform, Action, ActionOutcome};
use crate::core::settlement::{settle, DayVerdict, SettlementReport};
use crate::interface::PlayerInterface;

const END_GAME_OPTION: &str = "End game";

/// How a finished game ended. Quitting is a normal outcome, reachable only
/// from the menu, and skips that day's settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Lost,
    Won,
    Quit,
}

/// Owns the character sheet for the lifetime of one game and drives the
/// day cycle against a player interface.
pub struct Game<I: PlayerInterface> {
    sheet: Sheet,
    interface: I,
}

impl<I: PlayerInterface> Game<I> {
    /// Runs character creation against the interface and returns a game
    /// ready to play.
    pub fn create(mut interface: I) -> Self {
        interface.notify("Welcome to Wildland: a text survival adventure.");
        interface.notify(
            "You begin in the wilds: fell timber, gather food, raise farmland \
             and technology, grow your shelter, and set out on adventures.\n",
        );

        let name = interface.prompt_name();
        let race_names = Race::ALL.map(|race| race.name());
        let race = Race::ALL[interface.choose("Choose your race:", &race_names)];
        let faction_names = Faction::ALL.map(|faction| faction.name());
        let faction = Faction::ALL[interface.choose("Choose a faction to join:", &faction_names)];
        let path_names = GrowthPath::ALL.map(|path| path.name());
        let path = GrowthPath::ALL[interface.choose("Choose your growth path:", &path_names)];

        let sheet = create_sheet(CharacterChoices {
            name,
            race,
            faction,
            path,
        });
        interface.notify("\nYou step into the wildland. Day one begins with survival!");

        Self { sheet, interface }
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Plays day cycles until a terminal state is reached.
    ///
    /// Each iteration shows the status block, takes one menu choice,
    /// executes it (a failed costed action still consumes the day), then
    /// settles. Choosing "End game" ends the loop before settlement.
    pub fn run(&mut self, rng: &mut impl Rng) -> GameEnding {
        loop {
            let status = self.sheet.status();
            self.interface.notify(&status);

            let mut options: Vec<&str> =
                Action::ALL.iter().map(|action| action.name()).collect();
            options.push(END_GAME_OPTION);
            let selection = self.interface.choose("What will you do today?", &options);
            if selection == Action::ALL.len() {
                self.interface
                    .notify("You choose to leave the wildland, for now.");
                return GameEnding::Quit;
            }

            let action = Action::ALL[selection];
            match perform(action, &mut self.sheet, rng) {
                Ok(outcome) => self.report_action(&outcome),
                Err(shortfall) => self.interface.notify(&format!(
                    "Not enough resources: {} {}.",
                    action.name(),
                    shortfall
                )),
            }

            let report = settle(&mut self.sheet, rng);
            self.report_settlement(&report);
            match report.verdict {
                DayVerdict::Playing => {}
                DayVerdict::Lost => return GameEnding::Lost,
                DayVerdict::Won => return GameEnding::Won,
            }
        }
    }

    fn report_action(&mut self, outcome: &ActionOutcome) {
        let message = match outcome {
            ActionOutcome::WoodGathered { amount } => {
                format!("You fell trees and haul back {amount} wood.")
            }
            ActionOutcome::FoodGathered { amount } => {
                format!("You forage and hunt, gaining {amount} food.")
            }
            ActionOutcome::FarmlandBuilt { level } => {
                format!("You clear new farmland. Farmland is now level {level}.")
            }
            ActionOutcome::TechDeveloped { level } => {
                format!("You work out new techniques. Tech is now level {level}.")
            }
            ActionOutcome::ShelterUpgraded { level } => {
                format!("Shelter upgraded to level {level}. You feel hardier!")
            }
            ActionOutcome::Trained { path, gain } => match path {
                GrowthPath::Martial => format!("You drill with your weapons. Attack +{gain}."),
                GrowthPath::Arcane => {
                    format!("You meditate on the currents of magic. Magic +{gain}.")
                }
            },
            ActionOutcome::Adventured(encounter) => {
                self.report_encounter(encounter);
                return;
            }
        };
        self.interface.notify(&message);
    }

    fn report_encounter(&mut self, encounter: &EncounterOutcome) {
        self.interface.notify(&format!(
            "You set out adventuring and run into the {}!",
            encounter.enemy
        ));
        self.interface.notify(&format!(
            "Enemy power: {} | Your power roll: {}",
            encounter.enemy_power, encounter.player_power
        ));
        match encounter.result {
            EncounterResult::Victory {
                wood_gained,
                food_gained,
                first_adventure,
            } => {
                self.interface.notify(&format!(
                    "You prevail! Spoils: {wood_gained} wood, {food_gained} food."
                ));
                if first_adventure {
                    self.interface.notify(
                        "Your first adventure is behind you. Your renown grows within the faction!",
                    );
                }
            }
            EncounterResult::Defeat { damage } => {
                self.interface
                    .notify(&format!("You are beaten back and retreat. HP -{damage}."));
            }
        }
    }

    fn report_settlement(&mut self, report: &SettlementReport) {
        if report.starved {
            self.interface
                .notify("Food ran short. Hunger gnaws at you through the night!");
        }
        if let Some(gained) = report.harvest {
            self.interface
                .notify(&format!("The farmland comes to harvest: +{gained} food."));
        }
        match report.verdict {
            DayVerdict::Playing => {}
            DayVerdict::Lost => {
                self.interface
                    .notify("\nYou have fallen in the wildland. The game is over.");
            }
            DayVerdict::Won => {
                self.interface.notify(
                    "\nYou have raised a lasting stronghold! The wildland finds order under your hand.",
                );
                self.interface.notify("Victory achieved: Pioneer Lord");
            }
        }
    }
}
