//! Color tokens for category badges and the per-club override settings.
//!
//! A token is an opaque pair of background/foreground classes; how it is
//! rendered is up to the stylesheet.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Number of color families in each palette
pub const PALETTE_SIZE: usize = 16;

/// Regular badge palette. Family order: blue, green, yellow, red, purple,
/// pink, indigo, teal, orange, cyan, lime, emerald, rose, violet, sky, amber.
pub const NORMAL_PALETTE: [&str; PALETTE_SIZE] = [
    "bg-blue-100 text-blue-800",
    "bg-green-100 text-green-800",
    "bg-yellow-100 text-yellow-800",
    "bg-red-100 text-red-800",
    "bg-purple-100 text-purple-800",
    "bg-pink-100 text-pink-800",
    "bg-indigo-100 text-indigo-800",
    "bg-teal-100 text-teal-800",
    "bg-orange-100 text-orange-800",
    "bg-cyan-100 text-cyan-800",
    "bg-lime-100 text-lime-800",
    "bg-emerald-100 text-emerald-800",
    "bg-rose-100 text-rose-800",
    "bg-violet-100 text-violet-800",
    "bg-sky-100 text-sky-800",
    "bg-amber-100 text-amber-800",
];

/// Same families as [`NORMAL_PALETTE`], index for index, at a stronger weight.
pub const INTENSE_PALETTE: [&str; PALETTE_SIZE] = [
    "bg-blue-500 text-white",
    "bg-green-500 text-white",
    "bg-yellow-500 text-white",
    "bg-red-500 text-white",
    "bg-purple-500 text-white",
    "bg-pink-500 text-white",
    "bg-indigo-500 text-white",
    "bg-teal-500 text-white",
    "bg-orange-500 text-white",
    "bg-cyan-500 text-white",
    "bg-lime-500 text-white",
    "bg-emerald-500 text-white",
    "bg-rose-500 text-white",
    "bg-violet-500 text-white",
    "bg-sky-500 text-white",
    "bg-amber-500 text-white",
];

pub const NEUTRAL: &str = "bg-gray-100 text-gray-800";
pub const NEUTRAL_INTENSE: &str = "bg-gray-500 text-white";

/// Index of each family inside the palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Blue = 0,
    Green = 1,
    Yellow = 2,
    Red = 3,
    Purple = 4,
    Pink = 5,
    Indigo = 6,
    Teal = 7,
    Orange = 8,
    Cyan = 9,
    Lime = 10,
    Emerald = 11,
    Rose = 12,
    Violet = 13,
    Sky = 14,
    Amber = 15,
}

impl ColorFamily {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn normal(self) -> ColorClass {
        ColorClass::from_static(NORMAL_PALETTE[self.index()])
    }

    pub fn intense(self) -> ColorClass {
        ColorClass::from_static(INTENSE_PALETTE[self.index()])
    }
}

/// Opaque color token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorClass(Cow<'static, str>);

impl ColorClass {
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    pub const fn neutral() -> Self {
        Self::from_static(NEUTRAL)
    }

    pub const fn neutral_intense() -> Self {
        Self::from_static(NEUTRAL_INTENSE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for either neutral token (label was empty or absent)
    pub fn is_fallback(&self) -> bool {
        self.as_str() == NEUTRAL || self.as_str() == NEUTRAL_INTENSE
    }

    /// True if the token belongs to one of the two palettes
    pub fn is_palette_token(&self) -> bool {
        NORMAL_PALETTE.contains(&self.as_str()) || INTENSE_PALETTE.contains(&self.as_str())
    }
}

impl From<String> for ColorClass {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl From<&str> for ColorClass {
    fn from(token: &str) -> Self {
        Self(Cow::Owned(token.to_string()))
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Manual category → token overrides stored in the club settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubColorConfig {
    #[serde(rename = "categoryColors", default)]
    pub category_colors: HashMap<String, String>,
}

impl ClubColorConfig {
    /// Parse the settings JSON saved by the club configuration screen
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid club color configuration")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialize club color configuration")
    }

    /// Explicit override for `label`. Empty tokens count as unset.
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.category_colors
            .get(label)
            .map(String::as_str)
            .filter(|token| !token.is_empty())
    }

    pub fn set_color(&mut self, label: impl Into<String>, token: impl Into<String>) {
        self.category_colors.insert(label.into(), token.into());
    }

    pub fn clear_color(&mut self, label: &str) -> Option<String> {
        self.category_colors.remove(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_parallel() {
        for (normal, intense) in NORMAL_PALETTE.iter().zip(INTENSE_PALETTE.iter()) {
            let family = normal.split('-').nth(1).unwrap();
            assert!(intense.starts_with(&format!("bg-{}-", family)), "{normal} vs {intense}");
        }
        assert_eq!(ColorFamily::Amber.normal().as_str(), "bg-amber-100 text-amber-800");
    }

    #[test]
    fn fallback_tokens_are_not_palette_tokens() {
        assert!(ColorClass::neutral().is_fallback());
        assert!(ColorClass::neutral_intense().is_fallback());
        assert!(!ColorClass::neutral().is_palette_token());
        assert!(ColorFamily::Pink.intense().is_palette_token());
    }

    #[test]
    fn config_reads_category_colors_key() {
        let config =
            ClubColorConfig::from_json(r#"{"categoryColors":{"Hombre Avanzado":"TOKEN","Vacío":""}}"#)
                .unwrap();
        assert_eq!(config.color_for("Hombre Avanzado"), Some("TOKEN"));
        assert_eq!(config.color_for("Vacío"), None);
        assert_eq!(config.color_for("Otra"), None);
    }

    #[test]
    fn config_defaults_when_key_missing() {
        let config = ClubColorConfig::from_json("{}").unwrap();
        assert!(config.category_colors.is_empty());
        assert!(ClubColorConfig::from_json("not json").is_err());
    }

    #[test]
    fn config_serializes_back() {
        let mut config = ClubColorConfig::default();
        config.set_color("Mujer", "bg-pink-100 text-pink-800");
        let parsed = ClubColorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
        config.clear_color("Mujer");
        assert_eq!(config.color_for("Mujer"), None);
    }

    #[test]
    fn color_class_is_a_plain_string_on_the_wire() {
        let json = serde_json::to_string(&ColorClass::from("custom")).unwrap();
        assert_eq!(json, "\"custom\"");
        let back: ColorClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "custom");
    }
}
