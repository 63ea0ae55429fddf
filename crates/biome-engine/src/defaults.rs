//! Built-in biome defaults
//!
//! Climate and color values for the base game's biomes. A Terra biome that
//! names one of these keys in its `vanilla` field is seeded with the entry
//! before its own colors are applied.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::attributes::BiomeAttributes;

/// One row of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinBiome {
    pub watercolor: Option<&'static str>,
    pub foliagecolor: Option<&'static str>,
    pub grasscolor: Option<&'static str>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl BuiltinBiome {
    /// Owned attribute set for seeding a graph node.
    pub fn to_attributes(&self) -> BiomeAttributes {
        BiomeAttributes {
            watercolor: self.watercolor.map(str::to_string),
            foliagecolor: self.foliagecolor.map(str::to_string),
            grasscolor: self.grasscolor.map(str::to_string),
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

/// Table rows in declaration order.
const BUILTIN_BIOMES: &[(&str, BuiltinBiome)] = &[
    (
        "minecraft:the_void",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:plains",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.8),
            humidity: Some(0.4),
        },
    ),
    (
        "minecraft:sunflower_plains",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.8),
            humidity: Some(0.4),
        },
    ),
    (
        "minecraft:snowy_plains",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.0),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:ice_spikes",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.0),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:desert",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:swamp",
        BuiltinBiome {
            watercolor: Some("#617b64"),
            foliagecolor: Some("#6a7039"),
            grasscolor: Some("#6a7039"),
            temperature: Some(0.8),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:mangrove_swamp",
        BuiltinBiome {
            watercolor: Some("#3a7a6a"),
            foliagecolor: Some("#8db127"),
            grasscolor: Some("#6a7039"),
            temperature: Some(0.8),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.7),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:flower_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.7),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:birch_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.6),
            humidity: Some(0.6),
        },
    ),
    (
        "minecraft:dark_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: Some("#28340a55"),
            grasscolor: Some("#28340a88"),
            temperature: Some(0.7),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:old_growth_birch_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.6),
            humidity: Some(0.6),
        },
    ),
    (
        "minecraft:old_growth_pine_taiga",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.3),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:old_growth_spruce_taiga",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.25),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:taiga",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.25),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:snowy_taiga",
        BuiltinBiome {
            watercolor: Some("#3d57d6"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(-0.5),
            humidity: Some(0.4),
        },
    ),
    (
        "minecraft:savanna",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(1.2),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:savanna_plateau",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(1.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:windswept_hills",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.2),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:windswept_gravelly_hills",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.2),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:windswept_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.2),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:windswept_savanna",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(1.1),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:jungle",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.95),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:sparse_jungle",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.95),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:bamboo_jungle",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.95),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:badlands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: Some("#9e814d"),
            grasscolor: Some("#90814d"),
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:eroded_badlands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: Some("#9e814d"),
            grasscolor: Some("#90814d"),
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:wooded_badlands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: Some("#9e814d"),
            grasscolor: Some("#90814d"),
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:meadow",
        BuiltinBiome {
            watercolor: Some("#0e4ecf"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:grove",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(-0.2),
            humidity: Some(0.8),
        },
    ),
    (
        "minecraft:snowy_slopes",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(-0.3),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:frozen_peaks",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(-0.7),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:jagged_peaks",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(-0.7),
            humidity: Some(0.9),
        },
    ),
    (
        "minecraft:stony_peaks",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(1.0),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:river",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:frozen_river",
        BuiltinBiome {
            watercolor: Some("#3938c9"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.0),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:beach",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.8),
            humidity: Some(0.4),
        },
    ),
    (
        "minecraft:snowy_beach",
        BuiltinBiome {
            watercolor: Some("#3d57d6"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.05),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:stony_shore",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.2),
            humidity: Some(0.3),
        },
    ),
    (
        "minecraft:warm_ocean",
        BuiltinBiome {
            watercolor: Some("#43d5ee"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:lukewarm_ocean",
        BuiltinBiome {
            watercolor: Some("#45adf2"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:deep_lukewarm_ocean",
        BuiltinBiome {
            watercolor: Some("#45adf2"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:ocean",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:deep_ocean",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:cold_ocean",
        BuiltinBiome {
            watercolor: Some("#3d57d6"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:deep_cold_ocean",
        BuiltinBiome {
            watercolor: Some("#3d57d6"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:frozen_ocean",
        BuiltinBiome {
            watercolor: Some("#3938c9"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.0),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:deep_frozen_ocean",
        BuiltinBiome {
            watercolor: Some("#3938c9"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:mushroom_fields",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.9),
            humidity: Some(1.0),
        },
    ),
    (
        "minecraft:dripstone_caves",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.8),
            humidity: Some(0.4),
        },
    ),
    (
        "minecraft:lush_caves",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:nether_wastes",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:warped_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:crimson_forest",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:soul_sand_valley",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:basalt_deltas",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(2.0),
            humidity: Some(0.0),
        },
    ),
    (
        "minecraft:the_end",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:end_highlands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:end_midlands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:small_end_islands",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),
    (
        "minecraft:end_barrens",
        BuiltinBiome {
            watercolor: Some("#3f76e4"),
            foliagecolor: None,
            grasscolor: None,
            temperature: Some(0.5),
            humidity: Some(0.5),
        },
    ),];

static BUILTIN_INDEX: LazyLock<HashMap<&'static str, &'static BuiltinBiome>> =
    LazyLock::new(|| BUILTIN_BIOMES.iter().map(|(key, biome)| (*key, biome)).collect());

/// Look up a built-in biome by its namespaced key (e.g. `minecraft:plains`).
pub fn builtin_biome(key: &str) -> Option<&'static BuiltinBiome> {
    BUILTIN_INDEX.get(key).copied()
}

/// All built-in biomes in declaration order.
pub fn builtin_biomes() -> impl Iterator<Item = (&'static str, &'static BuiltinBiome)> {
    BUILTIN_BIOMES.iter().map(|(key, biome)| (*key, biome))
}
