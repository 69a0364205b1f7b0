/// Built-in draughts variants and loading of custom rulesets from JSON.
/// A ruleset is immutable once selected; switching variants starts a fresh game.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::VariantError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Short lookup key used on the command line (`american`, `russian`, ...)
    pub key: String,
    pub name: String,
    pub description: String,
    pub board_dimension: usize,
    pub initial_rows: usize,
    pub flying_kings: bool,
    pub mandatory_capture: bool,
    pub backward_capture: bool,
}

impl Ruleset {
    /// Geometry check applied to every ruleset loaded from outside the crate.
    pub fn validate(&self) -> Result<(), VariantError> {
        let invalid = |reason: &str| VariantError::Invalid { name: self.key.clone(), reason: reason.to_string() };
        if self.key.trim().is_empty() { return Err(invalid("empty key")); }
        if self.board_dimension == 0 { return Err(invalid("board_dimension must be positive")); }
        if self.initial_rows == 0 { return Err(invalid("initial_rows must be positive")); }
        if 2 * self.initial_rows >= self.board_dimension {
            return Err(invalid("initial_rows must be less than half the board dimension"));
        }
        Ok(())
    }
}

/// Get all built-in variants, in display order
pub fn list_variants() -> Vec<Ruleset> {
    vec![
        Ruleset {
            key: "american".to_string(),
            name: "American Checkers".to_string(),
            description: "Standard 8x8 board, kings move one square diagonally".to_string(),
            board_dimension: 8,
            initial_rows: 3,
            flying_kings: false,
            mandatory_capture: true,
            backward_capture: false,
        },
        Ruleset {
            key: "international".to_string(),
            name: "International Draughts".to_string(),
            description: "Played on 10x10 board, flying kings, backward captures allowed".to_string(),
            board_dimension: 10,
            initial_rows: 4,
            flying_kings: true,
            mandatory_capture: true,
            backward_capture: true,
        },
        Ruleset {
            key: "russian".to_string(),
            name: "Russian Draughts".to_string(),
            description: "Flying kings, mandatory captures in any direction including backwards".to_string(),
            board_dimension: 8,
            initial_rows: 3,
            flying_kings: true,
            mandatory_capture: true,
            backward_capture: true,
        },
    ]
}

/// The default variant (American Checkers)
pub fn default_variant() -> Ruleset {
    list_variants().swap_remove(0)
}

/// Case-insensitive lookup by key
pub fn find_variant(catalog: &[Ruleset], key: &str) -> Result<Ruleset, VariantError> {
    catalog
        .iter()
        .find(|v| v.key.eq_ignore_ascii_case(key.trim()))
        .cloned()
        .ok_or_else(|| VariantError::Unknown(key.to_string()))
}

/// Parse a JSON array of rulesets. Every entry must validate and keys must be unique.
pub fn parse_variants(json: &str) -> Result<Vec<Ruleset>, VariantError> {
    let rulesets: Vec<Ruleset> = serde_json::from_str(json)?;
    if rulesets.is_empty() {
        return Err(VariantError::Invalid { name: String::new(), reason: "catalog is empty".to_string() });
    }
    let mut seen = HashSet::new();
    for r in &rulesets {
        if let Err(e) = r.validate() {
            warn!("rejecting variant catalog: {}", e);
            return Err(e);
        }
        if !seen.insert(r.key.to_ascii_lowercase()) {
            return Err(VariantError::Invalid { name: r.key.clone(), reason: "duplicate key".to_string() });
        }
    }
    Ok(rulesets)
}

/// Load a catalog from a JSON file, replacing the built-ins
pub fn load_variants<P: AsRef<Path>>(path: P) -> Result<Vec<Ruleset>, VariantError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let rulesets = parse_variants(&text)?;
    info!("loaded {} variants from {}", rulesets.len(), path.as_ref().display());
    Ok(rulesets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_variants() {
        let variants = list_variants();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].name, "American Checkers");
        assert_eq!(variants[1].board_dimension, 10);
        assert_eq!(variants[2].key, "russian");
        for v in &variants { assert!(v.validate().is_ok(), "{} should validate", v.key); }
    }

    #[test]
    fn test_find_variant_ignores_case() {
        let catalog = list_variants();
        assert_eq!(find_variant(&catalog, "International").unwrap().initial_rows, 4);
        assert!(matches!(find_variant(&catalog, "turkish"), Err(VariantError::Unknown(_))));
    }

    #[test]
    fn test_validate_rejects_crowded_board() {
        let mut r = default_variant();
        r.initial_rows = 4;
        assert!(r.validate().is_err());
        r.initial_rows = 0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_keys() {
        let one = serde_json::to_string(&default_variant()).unwrap();
        let json = format!("[{one},{one}]");
        assert!(matches!(parse_variants(&json), Err(VariantError::Invalid { .. })));
    }
}
