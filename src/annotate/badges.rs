//! Badge configuration: `tag:color` pairs from the command line.
//!
//! Example: `admin:red, beta:#ffaa00`  =>  { admin -> red, beta -> #ffaa00 }

use std::collections::BTreeMap;

pub const ENTRY_DELIMITER: char = ',';
pub const KEY_VALUE_DELIMITER: char = ':';

/// Tag -> color mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeConfig {
    colors: BTreeMap<String, String>,
}

impl BadgeConfig {
    /// Parse with the command-line delimiters (`,` between entries, `:` inside).
    pub fn parse(input: &str) -> Self {
        Self::parse_with(input, ENTRY_DELIMITER, KEY_VALUE_DELIMITER)
    }

    /// Parse `input` split on `entry` into candidates, each split on `key_value`.
    ///
    /// Candidates that do not yield exactly two fields are dropped. Later
    /// duplicates overwrite earlier ones.
    pub fn parse_with(input: &str, entry: char, key_value: char) -> Self {
        let mut colors = BTreeMap::new();
        if input.is_empty() {
            return Self { colors };
        }

        for candidate in input.split(entry) {
            let fields: Vec<&str> = candidate.split(key_value).collect();
            match fields.as_slice() {
                [tag, color] => {
                    colors.insert(tag.trim().to_string(), color.trim().to_string());
                }
                _ => {
                    tracing::debug!(candidate, "ignoring malformed badge entry");
                }
            }
        }

        Self { colors }
    }

    pub fn color_for(&self, tag: &str) -> Option<&str> {
        self.colors.get(tag).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entries(cfg: &BadgeConfig) -> Vec<(String, String)> {
        cfg.colors
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        assert!(BadgeConfig::parse("").is_empty());
    }

    #[test]
    fn trims_keys_and_values() {
        let cfg = BadgeConfig::parse(" admin : red ,beta:#ffaa00");
        assert_eq!(cfg.color_for("admin"), Some("red"));
        assert_eq!(cfg.color_for("beta"), Some("#ffaa00"));
        assert_eq!(cfg.colors.len(), 2);
    }

    #[test]
    fn malformed_pairs_are_dropped() {
        let cfg = BadgeConfig::parse("admin:red,nocolor,a:b:c,,beta:blue");
        assert_eq!(
            entries(&cfg),
            vec![
                ("admin".to_string(), "red".to_string()),
                ("beta".to_string(), "blue".to_string()),
            ]
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let cfg = BadgeConfig::parse("admin:red,admin:green");
        assert_eq!(cfg.color_for("admin"), Some("green"));
        assert_eq!(cfg.colors.len(), 1);
    }

    #[test]
    fn custom_delimiters() {
        let cfg = BadgeConfig::parse_with("admin=red;beta=blue", ';', '=');
        assert_eq!(cfg.color_for("beta"), Some("blue"));
        assert_eq!(cfg.colors.len(), 2);
    }

    #[test]
    fn empty_color_is_still_two_fields() {
        let cfg = BadgeConfig::parse("admin:");
        assert_eq!(cfg.color_for("admin"), Some(""));
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9#_-]{1,8}"
    }

    proptest! {
        #[test]
        fn well_formed_pairs_resolve_exactly(
            pairs in prop::collection::vec((token(), token()), 0..12),
            pad in " {0,2}",
        ) {
            let input = pairs
                .iter()
                .map(|(t, c)| format!("{pad}{t}{pad}:{pad}{c}{pad}"))
                .collect::<Vec<_>>()
                .join(",");

            let mut expected = BTreeMap::new();
            for (t, c) in &pairs {
                expected.insert(t.clone(), c.clone());
            }

            let cfg = BadgeConfig::parse(&input);
            prop_assert_eq!(cfg.colors, expected);
        }

        #[test]
        fn malformed_pair_does_not_hide_neighbours(
            before in prop::collection::vec((token(), token()), 0..5),
            after in prop::collection::vec((token(), token()), 0..5),
            junk in prop_oneof![token(), (token(), token(), token()).prop_map(|(a, b, c)| format!("{a}:{b}:{c}"))],
        ) {
            let mut parts: Vec<String> = before.iter().map(|(t, c)| format!("{t}:{c}")).collect();
            parts.push(junk.clone());
            parts.extend(after.iter().map(|(t, c)| format!("{t}:{c}")));

            let cfg = BadgeConfig::parse(&parts.join(","));

            let mut expected = BTreeMap::new();
            for (t, c) in before.iter().chain(after.iter()) {
                expected.insert(t.clone(), c.clone());
            }
            prop_assert_eq!(cfg.colors, expected);
        }
    }
}
