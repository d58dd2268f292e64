//! Harmony rules and the palette they derive.
//!
//! Each [`HarmonyType`] maps to a fixed, ordered list of hue offsets in
//! degrees. [`harmonize`] rotates the base hue by every offset while keeping
//! saturation and value, so the palette is fully determined by
//! `(ColorState, HarmonyType)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorState;

/// Named rule selecting which companion hues accompany the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmonyType {
    /// Only the base color
    #[default]
    None,
    Complementary,
    SplitComplementary,
    Analogous,
    AnalogousAccent,
    Triadic,
    Square,
    TetradicPlus,
    TetradicMinus,
    Clash,
    FiveTone,
    SixTone,
}

impl HarmonyType {
    /// All harmony types in declaration (ordinal) order.
    pub const ALL: [HarmonyType; 12] = [
        HarmonyType::None,
        HarmonyType::Complementary,
        HarmonyType::SplitComplementary,
        HarmonyType::Analogous,
        HarmonyType::AnalogousAccent,
        HarmonyType::Triadic,
        HarmonyType::Square,
        HarmonyType::TetradicPlus,
        HarmonyType::TetradicMinus,
        HarmonyType::Clash,
        HarmonyType::FiveTone,
        HarmonyType::SixTone,
    ];

    /// Hue offsets in degrees, in emission order.
    pub fn offsets(self) -> &'static [f32] {
        match self {
            HarmonyType::None => &[0.0],
            HarmonyType::Complementary => &[0.0, 180.0],
            HarmonyType::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyType::Analogous => &[0.0, 330.0, 30.0],
            HarmonyType::AnalogousAccent => &[0.0, 330.0, 30.0, 180.0],
            HarmonyType::Triadic => &[0.0, 120.0, 240.0],
            HarmonyType::Square => &[0.0, 90.0, 180.0, 270.0],
            HarmonyType::TetradicPlus => &[0.0, 60.0, 180.0, 240.0],
            HarmonyType::TetradicMinus => &[0.0, 120.0, 180.0, 300.0],
            HarmonyType::Clash => &[0.0, 90.0, 270.0],
            HarmonyType::FiveTone => &[0.0, 60.0, 120.0, 240.0, 300.0],
            HarmonyType::SixTone => &[30.0, 90.0, 120.0, 240.0, 270.0, 330.0],
        }
    }

    /// Number of colors this harmony produces.
    pub fn color_count(self) -> usize {
        self.offsets().len()
    }

    /// Position in [`HarmonyType::ALL`]; used by persisted records.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Inverse of [`HarmonyType::ordinal`].
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Canonical upper-case name, e.g. `SPLIT_COMPLEMENTARY`.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyType::None => "NONE",
            HarmonyType::Complementary => "COMPLEMENTARY",
            HarmonyType::SplitComplementary => "SPLIT_COMPLEMENTARY",
            HarmonyType::Analogous => "ANALOGOUS",
            HarmonyType::AnalogousAccent => "ANALOGOUS_ACCENT",
            HarmonyType::Triadic => "TRIADIC",
            HarmonyType::Square => "SQUARE",
            HarmonyType::TetradicPlus => "TETRADIC_PLUS",
            HarmonyType::TetradicMinus => "TETRADIC_MINUS",
            HarmonyType::Clash => "CLASH",
            HarmonyType::FiveTone => "FIVE_TONE",
            HarmonyType::SixTone => "SIX_TONE",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no harmony type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown harmony type: {0}")]
pub struct ParseHarmonyTypeError(pub String);

impl FromStr for HarmonyType {
    type Err = ParseHarmonyTypeError;

    /// Accepts `SPLIT_COMPLEMENTARY`, `split-complementary` or
    /// `split_complementary`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|harmony| harmony.name() == normalized)
            .ok_or_else(|| ParseHarmonyTypeError(s.to_string()))
    }
}

/// A palette entry: the base saturation/value at a rotated hue.
pub type HarmonizedColor = ColorState;

/// Derive the palette for `base` under `harmony`, in table order.
pub fn harmonize(base: ColorState, harmony: HarmonyType) -> Vec<HarmonizedColor> {
    harmony
        .offsets()
        .iter()
        .map(|offset| base.with_hue(base.hue() + offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hues(colors: &[HarmonizedColor]) -> Vec<f32> {
        colors.iter().map(|c| c.hue()).collect()
    }

    #[test]
    fn test_none_yields_base_only() {
        let base = ColorState::new(123.0, 0.4, 0.6);
        assert_eq!(harmonize(base, HarmonyType::None), vec![base]);
    }

    #[test]
    fn test_lengths_match_table() {
        let expected = [1, 2, 3, 3, 4, 3, 4, 4, 4, 3, 5, 6];
        for (harmony, len) in HarmonyType::ALL.iter().zip(expected) {
            assert_eq!(harmonize(ColorState::default(), *harmony).len(), len, "{harmony}");
            assert_eq!(harmony.color_count(), len);
        }
    }

    #[test]
    fn test_offsets_are_pairwise_distinct() {
        for harmony in HarmonyType::ALL {
            let offsets = harmony.offsets();
            for (i, a) in offsets.iter().enumerate() {
                for b in &offsets[i + 1..] {
                    assert_ne!(a.rem_euclid(360.0), b.rem_euclid(360.0), "{harmony}");
                }
            }
        }
    }

    #[test]
    fn test_complementary_of_red() {
        let base = ColorState::new(0.0, 1.0, 1.0);
        let palette = harmonize(base, HarmonyType::Complementary);
        assert_eq!(palette, vec![base, ColorState::new(180.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_triadic_wraps_hue() {
        let base = ColorState::new(350.0, 0.5, 1.0);
        let palette = harmonize(base, HarmonyType::Triadic);
        assert_eq!(hues(&palette), vec![350.0, 110.0, 230.0]);
        assert!(palette.iter().all(|c| c.saturation() == 0.5 && c.value() == 1.0));
    }

    #[test]
    fn test_base_stays_first_except_six_tone() {
        let base = ColorState::new(42.0, 0.3, 0.9);
        for harmony in HarmonyType::ALL {
            let palette = harmonize(base, harmony);
            if harmony.offsets()[0] == 0.0 {
                assert_eq!(palette[0], base, "{harmony}");
            }
        }
        // The six-tone rule surrounds the base hue instead of including it
        assert_eq!(hues(&harmonize(base, HarmonyType::SixTone))[0], 72.0);
    }

    #[test]
    fn test_ordinal_round_trip() {
        for (i, harmony) in HarmonyType::ALL.iter().enumerate() {
            assert_eq!(harmony.ordinal(), i as u32);
            assert_eq!(HarmonyType::from_ordinal(i as u32), Some(*harmony));
        }
        assert_eq!(HarmonyType::from_ordinal(12), None);
    }

    #[test]
    fn test_parse_accepts_several_spellings() {
        assert_eq!("TRIADIC".parse::<HarmonyType>(), Ok(HarmonyType::Triadic));
        assert_eq!(
            "split-complementary".parse::<HarmonyType>(),
            Ok(HarmonyType::SplitComplementary)
        );
        assert_eq!("five_tone".parse::<HarmonyType>(), Ok(HarmonyType::FiveTone));
        assert!("pentagon".parse::<HarmonyType>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&HarmonyType::TetradicPlus).unwrap();
        assert_eq!(json, "\"TETRADIC_PLUS\"");
    }
}
