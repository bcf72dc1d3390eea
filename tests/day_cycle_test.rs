//! Integration test: the day cycle end to end.
//!
//! Drives the full game through a scripted player interface with a seeded
//! RNG, plus longer policy-driven runs through the action and settlement
//! layers directly.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wildland::character::creation::{create_sheet, CharacterChoices, Faction, GrowthPath, Race};
use wildland::character::sheet::Sheet;
use wildland::core::actions::{perform, Action};
use wildland::core::settlement::{settle, DayVerdict};
use wildland::core::day_cycle::{Game, GameEnding};
use wildland::interface::PlayerInterface;

/// Feeds canned selections to the game and records every message.
struct ScriptedInterface {
    name: &'static str,
    selections: VecDeque<usize>,
    messages: Vec<String>,
}

impl ScriptedInterface {
    fn new(name: &'static str, selections: &[usize]) -> Self {
        Self {
            name,
            selections: selections.iter().copied().collect(),
            messages: Vec::new(),
        }
    }
}

impl PlayerInterface for ScriptedInterface {
    fn prompt_name(&mut self) -> String {
        self.name.to_string()
    }

    fn choose(&mut self, _prompt: &str, options: &[&str]) -> usize {
        match self.selections.pop_front() {
            Some(index) if index < options.len() => index,
            // An exhausted script picks the last option, which on the day
            // menu is "End game" - every scripted run terminates.
            _ => options.len() - 1,
        }
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

fn human_sheet() -> Sheet {
    create_sheet(CharacterChoices {
        name: "Settler".to_string(),
        race: Race::Human,
        faction: Faction::DawnAlliance,
        path: GrowthPath::Martial,
    })
}

// =============================================================================
// Scripted full-game runs
// =============================================================================

#[test]
fn test_quit_on_day_one() {
    // Creation (Human, Dawn Alliance, Martial), then "End game".
    let mut interface = ScriptedInterface::new("Settler", &[0, 0, 0, 7]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut game = Game::create(&mut interface);
    let ending = game.run(&mut rng);

    assert_eq!(ending, GameEnding::Quit);
    assert_eq!(game.sheet().day, 1);
    assert!(interface
        .messages
        .iter()
        .any(|m| m.contains("Day 1")));
    assert!(interface
        .messages
        .iter()
        .any(|m| m.contains("leave the wildland")));
}

#[test]
fn test_training_only_run_starves_to_death() {
    // Training yields no food, so the five-a-day consumption drains the
    // starting stock and then eats into hp until the game is lost.
    let mut selections = vec![0, 0, 0];
    selections.extend(std::iter::repeat(5).take(100)); // Train every day
    let mut interface = ScriptedInterface::new("Ascetic", &selections);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let mut game = Game::create(&mut interface);
    let ending = game.run(&mut rng);

    assert_eq!(ending, GameEnding::Lost);
    assert!(game.sheet().hp <= 0);
    assert_eq!(game.sheet().food, 0);
    assert!(game.sheet().day < 40, "starvation must end the game quickly");
    assert!(interface
        .messages
        .iter()
        .any(|m| m.contains("Hunger gnaws at you")));
    assert!(interface
        .messages
        .iter()
        .any(|m| m.contains("fallen in the wildland")));
}

#[test]
fn test_first_adventure_acknowledged_at_most_once() {
    // An Orc adventuring every day wins some encounters; the first-adventure
    // line must never repeat no matter how many wins follow.
    let mut selections = vec![1, 1, 0]; // Orc, Iron Tribes, Martial
    selections.extend(std::iter::repeat(6).take(30)); // Adventure daily
    let mut interface = ScriptedInterface::new("Rover", &selections);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut game = Game::create(&mut interface);
    let _ending = game.run(&mut rng);

    let acknowledgments = interface
        .messages
        .iter()
        .filter(|m| m.contains("first adventure"))
        .count();
    assert!(acknowledgments <= 1);
}

#[test]
fn test_same_seed_and_script_reproduce_the_run() {
    let script: &[usize] = &[0, 0, 0, 0, 1, 6, 5, 1, 0, 2, 1, 7];

    let mut first = ScriptedInterface::new("Echo", script);
    let mut first_rng = ChaCha8Rng::seed_from_u64(9);
    let mut first_game = Game::create(&mut first);
    let first_ending = first_game.run(&mut first_rng);

    let mut second = ScriptedInterface::new("Echo", script);
    let mut second_rng = ChaCha8Rng::seed_from_u64(9);
    let mut second_game = Game::create(&mut second);
    let second_ending = second_game.run(&mut second_rng);

    assert_eq!(first_ending, second_ending);
    assert_eq!(first_game.sheet(), second_game.sheet());
    assert_eq!(first.messages, second.messages);
}

// =============================================================================
// Policy-driven run through the action and settlement layers
// =============================================================================

/// A simple survival policy: rush farmland to cut consumption, then bank
/// wood into shelter and tech, topping up whichever resource blocks the
/// next build.
fn choose_action(sheet: &Sheet) -> Action {
    let targets = [
        (Action::BuildFarmland, sheet.farmland >= 2),
        (Action::UpgradeShelter, sheet.shelter >= 3),
        (Action::DevelopTech, sheet.tech >= 3),
    ];
    for (structure, done) in targets {
        if done {
            continue;
        }
        let (wood_needed, food_needed) =
            structure.cost(sheet).expect("structure actions are costed");
        // Keep a cushion over the food cost so the build never triggers
        // starvation at settlement.
        if sheet.wood >= wood_needed && sheet.food >= food_needed + 4 {
            return structure;
        }
        return if sheet.food < 6 {
            Action::GatherFood
        } else {
            Action::GatherWood
        };
    }
    Action::GatherFood
}

#[test]
fn test_steady_policy_reaches_victory() {
    let mut sheet = human_sheet();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..200 {
        let action = choose_action(&sheet);
        perform(action, &mut sheet, &mut rng)
            .expect("policy only picks actions it can afford");
        let report = settle(&mut sheet, &mut rng);
        match report.verdict {
            DayVerdict::Playing => {}
            DayVerdict::Won => {
                assert!(sheet.day > 12);
                assert!(sheet.shelter >= 3);
                assert!(sheet.tech >= 3);
                assert!(sheet.hp > 0);
                return;
            }
            DayVerdict::Lost => panic!("the survival policy must not die (day {})", sheet.day),
        }
    }
    panic!("no victory within 200 days");
}

#[test]
fn test_resources_stay_non_negative_over_long_runs() {
    let mut sheet = human_sheet();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..200 {
        let action = choose_action(&sheet);
        let _ = perform(action, &mut sheet, &mut rng);
        let report = settle(&mut sheet, &mut rng);
        assert!(sheet.wood >= 0);
        assert!(sheet.food >= 0);
        if report.verdict != DayVerdict::Playing {
            return;
        }
    }
}
