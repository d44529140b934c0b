//! Typed view over the slice of the server database tables the tweak pass touches.
//!
//! Field names follow the server's JSON. Every record keeps the fields it does
//! not model in a flattened map so the tables survive a round-trip untouched.
//! Modelled numbers are normalized to their Rust type on the way out: the
//! price modifiers are `f64`, so an integer price such as `2` is written as `2.0`.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unmodelled fields carried through serialization in their original order.
pub type Extra = Map<String, Value>;

/// Root of the server database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTables {
    pub globals: Globals,
    pub locations: IndexMap<String, Location>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl DatabaseTables {
    /// Load tables from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lacks the transit or fence settings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the tables back to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if an unmodelled field cannot be serialized.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Globals {
    pub config: GlobalsConfig,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalsConfig {
    #[serde(rename = "TransitSettings")]
    pub transit_settings: TransitSettings,
    #[serde(rename = "FenceSettings")]
    pub fence_settings: FenceSettings,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Faction-specific transit price modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSettings {
    #[serde(rename = "BearPriceMod")]
    pub bear_price_mod: f64,
    #[serde(rename = "UsecPriceMod")]
    pub usec_price_mod: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceSettings {
    /// Fence standing levels keyed as the server stores them, in file order.
    #[serde(rename = "Levels")]
    pub levels: IndexMap<String, FenceLevel>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceLevel {
    #[serde(rename = "TransitGridSize")]
    pub transit_grid_size: GridSize,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Container grid dimensions. The server never uses `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
    #[serde(default)]
    pub z: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<LocationBase>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBase {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transits: Option<Vec<Transit>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A transit point out of a location; `time` is the trip length in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transit {
    #[serde(default)]
    pub name: String,
    pub time: i64,
    #[serde(flatten)]
    pub extra: Extra,
}
