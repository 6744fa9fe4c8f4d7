//! Badge colors for membership categories.
//!
//! Three policies, from weakest to strongest: a stable hash of the label,
//! keyword rules for the usual category names, and the club's own overrides.

use contracts::shared::category_colors::{
    ClubColorConfig, ColorClass, ColorFamily, INTENSE_PALETTE, NORMAL_PALETTE, PALETTE_SIZE,
};

/// Keyword groups checked against the lower-cased label. First match wins.
const SEMANTIC_RULES: [(&[&str], ColorFamily); 7] = [
    (&["hombre", "masculino"], ColorFamily::Blue),
    (&["mujer", "femenino"], ColorFamily::Pink),
    (&["niño", "infantil", "junior"], ColorFamily::Green),
    (&["principiante", "básico"], ColorFamily::Yellow),
    (&["intermedio", "medio"], ColorFamily::Orange),
    (&["avanzado", "experto"], ColorFamily::Red),
    (&["senior", "adulto"], ColorFamily::Purple),
];

/// Which policy a badge uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    #[default]
    Hash,
    HashIntense,
    Semantic,
    Config,
}

fn non_empty<'a>(label: impl Into<Option<&'a str>>) -> Option<&'a str> {
    label.into().filter(|l| !l.is_empty())
}

/// Rolling "times 31" hash over UTF-16 code units, wrapped to i32 at every step.
pub fn label_hash(label: &str) -> i32 {
    label.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Palette slot shared by the normal and intense variants.
/// `None` for an empty or absent label.
pub fn palette_index<'a>(label: impl Into<Option<&'a str>>) -> Option<usize> {
    let label = non_empty(label)?;
    // unsigned_abs keeps i32::MIN defined
    Some((label_hash(label).unsigned_abs() % PALETTE_SIZE as u32) as usize)
}

pub fn color_by_hash<'a>(label: impl Into<Option<&'a str>>) -> ColorClass {
    match palette_index(label) {
        Some(index) => ColorClass::from_static(NORMAL_PALETTE[index]),
        None => ColorClass::neutral(),
    }
}

pub fn color_by_hash_intense<'a>(label: impl Into<Option<&'a str>>) -> ColorClass {
    match palette_index(label) {
        Some(index) => ColorClass::from_static(INTENSE_PALETTE[index]),
        None => ColorClass::neutral_intense(),
    }
}

/// Fixed colors for recognizable category names, hash otherwise.
pub fn color_by_semantic_type<'a>(label: impl Into<Option<&'a str>>) -> ColorClass {
    let Some(label) = non_empty(label) else {
        return ColorClass::neutral();
    };

    let lower = label.to_lowercase();
    SEMANTIC_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, family)| family.normal())
        .unwrap_or_else(|| color_by_hash(label))
}

/// Club override when one is set for the label, hash otherwise.
/// The override is returned as stored, even if it is not a palette token.
pub fn color_by_config<'a>(
    label: impl Into<Option<&'a str>>,
    config: Option<&ClubColorConfig>,
) -> ColorClass {
    let label = label.into();
    label
        .zip(config)
        .and_then(|(label, config)| config.color_for(label))
        .map(ColorClass::from)
        .unwrap_or_else(|| color_by_hash(label))
}

/// Club override when the label has one, keyword rules otherwise
pub fn badge_policy(label: &str, config: Option<&ClubColorConfig>) -> ColorPolicy {
    match config.and_then(|c| c.color_for(label)) {
        Some(_) => ColorPolicy::Config,
        None => ColorPolicy::Semantic,
    }
}

pub fn resolve_color<'a>(
    policy: ColorPolicy,
    label: impl Into<Option<&'a str>>,
    config: Option<&ClubColorConfig>,
) -> ColorClass {
    match policy {
        ColorPolicy::Hash => color_by_hash(label),
        ColorPolicy::HashIntense => color_by_hash_intense(label),
        ColorPolicy::Semantic => color_by_semantic_type(label),
        ColorPolicy::Config => color_by_config(label, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::category_colors::{NEUTRAL, NEUTRAL_INTENSE};

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(label_hash(""), 0);
        assert_eq!(label_hash("a"), 97);
        assert_eq!(label_hash("ab"), 97 * 31 + 98);
        // "hello world".hashCode() in 32-bit wrapping arithmetic
        assert_eq!(label_hash("hello world"), 1_794_106_052);
        assert_eq!(label_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn min_hash_maps_to_first_slot() {
        assert_eq!(palette_index("polygenelubricants"), Some(0));
    }

    #[test]
    fn hash_color_is_deterministic() {
        for label in ["Hombre Avanzado", "Mujer", "Infantil", "Zumba", "niño pequeño"] {
            assert_eq!(color_by_hash(label), color_by_hash(label));
            assert!(color_by_hash(label).is_palette_token());
        }
    }

    #[test]
    fn hash_color_picks_palette_slot() {
        // 97 % 16 == 1 → green
        assert_eq!(color_by_hash("a").as_str(), NORMAL_PALETTE[1]);
        assert_eq!(color_by_hash_intense("a").as_str(), INTENSE_PALETTE[1]);
    }

    #[test]
    fn empty_or_absent_label_falls_back() {
        assert_eq!(color_by_hash("").as_str(), NEUTRAL);
        assert_eq!(color_by_hash(None).as_str(), NEUTRAL);
        assert_eq!(color_by_hash_intense("").as_str(), NEUTRAL_INTENSE);
        assert_eq!(color_by_hash_intense(None).as_str(), NEUTRAL_INTENSE);
        assert_eq!(color_by_semantic_type(None).as_str(), NEUTRAL);
        assert_eq!(color_by_config(None, None).as_str(), NEUTRAL);
        assert!(!color_by_hash(None).is_palette_token());
    }

    #[test]
    fn normal_and_intense_share_the_family() {
        for label in ["Hombre", "Senior", "Grupo A", "Grupo B", "ñandú", "🥋 Judo"] {
            let index = palette_index(label).unwrap();
            assert_eq!(color_by_hash(label).as_str(), NORMAL_PALETTE[index]);
            assert_eq!(color_by_hash_intense(label).as_str(), INTENSE_PALETTE[index]);
        }
    }

    #[test]
    fn astral_characters_hash_as_surrogate_pairs() {
        let units: Vec<u16> = "🥋".encode_utf16().collect();
        assert_eq!(units.len(), 2);
        let expected = (units[0] as i32) * 31 + units[1] as i32;
        assert_eq!(label_hash("🥋"), expected);
    }

    #[test]
    fn semantic_first_rule_wins() {
        assert_eq!(color_by_semantic_type("Hombre Avanzado"), ColorFamily::Blue.normal());
        assert_eq!(color_by_semantic_type("Mujer Intermedio"), ColorFamily::Pink.normal());
    }

    #[test]
    fn semantic_rules_ignore_case_and_accents_survive() {
        assert_eq!(color_by_semantic_type("FEMENINO"), ColorFamily::Pink.normal());
        assert_eq!(color_by_semantic_type("Niño"), ColorFamily::Green.normal());
        assert_eq!(color_by_semantic_type("Nivel BÁSICO"), ColorFamily::Yellow.normal());
        assert_eq!(color_by_semantic_type("Junior"), ColorFamily::Green.normal());
        assert_eq!(color_by_semantic_type("Medio"), ColorFamily::Orange.normal());
        assert_eq!(color_by_semantic_type("Experto"), ColorFamily::Red.normal());
        assert_eq!(color_by_semantic_type("Adulto"), ColorFamily::Purple.normal());
    }

    #[test]
    fn semantic_falls_back_to_hash() {
        assert_eq!(color_by_semantic_type("Zumba"), color_by_hash("Zumba"));
    }

    #[test]
    fn config_override_is_verbatim() {
        let mut config = ClubColorConfig::default();
        config.set_color("X", "TOKEN");
        let color = color_by_config("X", Some(&config));
        assert_eq!(color.as_str(), "TOKEN");
        assert!(!color.is_palette_token());
    }

    #[test]
    fn config_without_entry_uses_hash() {
        let mut config = ClubColorConfig::default();
        config.set_color("X", "TOKEN");
        assert_eq!(color_by_config("Y", Some(&config)), color_by_hash("Y"));
        assert_eq!(color_by_config("Y", None), color_by_hash("Y"));
    }

    #[test]
    fn badge_policy_prefers_override_then_keywords() {
        let mut config = ClubColorConfig::default();
        config.set_color("Hombre Avanzado", "bg-club-navy");
        assert_eq!(badge_policy("Hombre Avanzado", Some(&config)), ColorPolicy::Config);
        assert_eq!(badge_policy("Mujer", Some(&config)), ColorPolicy::Semantic);
        assert_eq!(badge_policy("Mujer", None), ColorPolicy::Semantic);

        let policy = badge_policy("Mujer", Some(&config));
        assert_eq!(resolve_color(policy, "Mujer", Some(&config)), ColorFamily::Pink.normal());
        let policy = badge_policy("Hombre Avanzado", Some(&config));
        assert_eq!(
            resolve_color(policy, "Hombre Avanzado", Some(&config)).as_str(),
            "bg-club-navy"
        );
    }

    #[test]
    fn resolve_dispatches_by_policy() {
        assert_eq!(
            resolve_color(ColorPolicy::Semantic, "Hombre", None),
            ColorFamily::Blue.normal()
        );
        assert_eq!(
            resolve_color(ColorPolicy::HashIntense, "Zumba", None),
            color_by_hash_intense("Zumba")
        );
        assert_eq!(resolve_color(ColorPolicy::default(), "Zumba", None), color_by_hash("Zumba"));
    }
}
