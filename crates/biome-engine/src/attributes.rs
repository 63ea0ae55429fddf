//! Per-biome color and climate attributes.

use serde::{Deserialize, Serialize};

/// The five attributes a resolved biome carries.
///
/// Every field is optional and absence is meaningful: renderers fall back to
/// their own defaults for anything left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watercolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foliagecolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grasscolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl BiomeAttributes {
    /// Layer `self` over `base`: each field defined on `self` wins, anything
    /// else falls through to `base`.
    pub fn overlay(&self, base: BiomeAttributes) -> BiomeAttributes {
        BiomeAttributes {
            watercolor: self.watercolor.clone().or(base.watercolor),
            foliagecolor: self.foliagecolor.clone().or(base.foliagecolor),
            grasscolor: self.grasscolor.clone().or(base.grasscolor),
            temperature: self.temperature.or(base.temperature),
            humidity: self.humidity.or(base.humidity),
        }
    }

    /// Whether no attribute is set at all.
    pub fn is_empty(&self) -> bool {
        self.watercolor.is_none()
            && self.foliagecolor.is_none()
            && self.grasscolor.is_none()
            && self.temperature.is_none()
            && self.humidity.is_none()
    }
}

/// Format an integer color the way pack authors expect to read it back:
/// `#` followed by lowercase hex, zero-padded to six digits.
pub fn format_hex_color(value: u64) -> String {
    format!("#{:06x}", value)
}
