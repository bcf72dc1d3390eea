// Starting attributes
pub const BASE_HP: i32 = 100;
pub const BASE_ATTACK: i32 = 8;
pub const BASE_MAGIC: i32 = 8;
pub const STARTING_FOOD: i32 = 5;

// Creation bonuses
pub const ORC_ATTACK_BONUS: i32 = 4;
pub const ORC_HP_BONUS: i32 = 15;
pub const ELF_MAGIC_BONUS: i32 = 4;
pub const DWARF_WOOD_BONUS: i32 = 3;
pub const MARTIAL_ATTACK_BONUS: i32 = 3;
pub const ARCANE_MAGIC_BONUS: i32 = 3;
pub const DAWN_ALLIANCE_FOOD_BONUS: i32 = 2;
pub const IRON_TRIBES_WOOD_BONUS: i32 = 2;
pub const DUSK_COUNCIL_MAGIC_BONUS: i32 = 2;

// Gathering yields (inclusive ranges)
pub const WOOD_GATHER_MIN: i32 = 3;
pub const WOOD_GATHER_MAX: i32 = 8;
pub const FOOD_GATHER_MIN: i32 = 2;
pub const FOOD_GATHER_MAX: i32 = 6;

// Build costs scale linearly with the current level
pub const FARMLAND_BASE_WOOD_COST: i32 = 6;
pub const FARMLAND_WOOD_COST_PER_LEVEL: i32 = 2;
pub const FARMLAND_FOOD_COST: i32 = 3;
pub const TECH_BASE_WOOD_COST: i32 = 5;
pub const TECH_WOOD_COST_PER_LEVEL: i32 = 3;
pub const TECH_FOOD_COST: i32 = 4;
pub const SHELTER_BASE_WOOD_COST: i32 = 8;
pub const SHELTER_WOOD_COST_PER_LEVEL: i32 = 4;

// Development payoffs
pub const TECH_COMBAT_BONUS: i32 = 2;
pub const SHELTER_HP_BONUS: i32 = 8;
pub const TRAIN_GAIN_MIN: i32 = 1;
pub const TRAIN_GAIN_MAX: i32 = 3;

// Encounter resolution
pub const ENEMY_POWER_MIN: i32 = 8;
pub const ENEMY_POWER_MAX: i32 = 20;
pub const PLAYER_POWER_ROLL_MAX: i32 = 6;
pub const ADVENTURE_WOOD_REWARD_MIN: i32 = 2;
pub const ADVENTURE_WOOD_REWARD_MAX: i32 = 6;
pub const ADVENTURE_FOOD_REWARD_MIN: i32 = 2;
pub const ADVENTURE_FOOD_REWARD_MAX: i32 = 6;
pub const DEFEAT_DAMAGE_MIN: i32 = 8;
pub const DEFEAT_DAMAGE_MAX: i32 = 18;

// End-of-day settlement
pub const BASE_DAILY_CONSUMPTION: i32 = 5;
pub const MIN_DAILY_CONSUMPTION: i32 = 3;
pub const HARVEST_INTERVAL_DAYS: u32 = 3;
pub const HARVEST_YIELD_PER_LEVEL_MIN: i32 = 2;
pub const HARVEST_YIELD_PER_LEVEL_MAX: i32 = 4;

// Victory requires an established settlement past the early days
pub const VICTORY_SHELTER_LEVEL: u32 = 3;
pub const VICTORY_TECH_LEVEL: u32 = 3;
pub const VICTORY_DAY_THRESHOLD: u32 = 12;
