//! Fixed catalogues: supply categories and units of measure.
//!
//! Stored records may carry codes this build does not know about (older or
//! hand-edited data). Those are kept verbatim in an `Unrecognized` variant so
//! a load/save cycle never rewrites them; only the display falls back.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use babykit_core::{DomainError, ValueObject};

/// Supply category of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Diapers,
    Feeding,
    Clothing,
    Health,
    Toys,
    Other,
    /// A stored code outside the catalogue.
    Unrecognized(String),
}

/// Unit of measure for stock quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[default]
    Pieces,
    Bottles,
    Packs,
    Boxes,
    Oz,
    Lbs,
    /// A stored code outside the catalogue.
    Unrecognized(String),
}

impl Category {
    /// Known categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Diapers,
        Category::Feeding,
        Category::Clothing,
        Category::Health,
        Category::Toys,
        Category::Other,
    ];

    /// Resolve an exact catalogue code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "diapers" => Some(Category::Diapers),
            "feeding" => Some(Category::Feeding),
            "clothing" => Some(Category::Clothing),
            "health" => Some(Category::Health),
            "toys" => Some(Category::Toys),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Category::Diapers => "diapers",
            Category::Feeding => "feeding",
            Category::Clothing => "clothing",
            Category::Health => "health",
            Category::Toys => "toys",
            Category::Other => "other",
            Category::Unrecognized(code) => code,
        }
    }

    /// Human-readable label. Unrecognized codes display as "Other".
    pub fn label(&self) -> &'static str {
        match self {
            Category::Diapers => "Diapers & Wipes",
            Category::Feeding => "Feeding Supplies",
            Category::Clothing => "Clothing",
            Category::Health => "Health & Safety",
            Category::Toys => "Toys & Books",
            Category::Other | Category::Unrecognized(_) => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Diapers | Category::Feeding => "🍼",
            Category::Clothing => "👕",
            Category::Health => "🏥",
            Category::Toys => "🧸",
            Category::Other | Category::Unrecognized(_) => "📦",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl Unit {
    /// Known units, in display order.
    pub const ALL: [Unit; 6] = [
        Unit::Pieces,
        Unit::Bottles,
        Unit::Packs,
        Unit::Boxes,
        Unit::Oz,
        Unit::Lbs,
    ];

    /// Resolve an exact catalogue code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pieces" => Some(Unit::Pieces),
            "bottles" => Some(Unit::Bottles),
            "packs" => Some(Unit::Packs),
            "boxes" => Some(Unit::Boxes),
            "oz" => Some(Unit::Oz),
            "lbs" => Some(Unit::Lbs),
            _ => None,
        }
    }

    /// Catalogue code, also used as the display text.
    pub fn code(&self) -> &str {
        match self {
            Unit::Pieces => "pieces",
            Unit::Bottles => "bottles",
            Unit::Packs => "packs",
            Unit::Boxes => "boxes",
            Unit::Oz => "oz",
            Unit::Lbs => "lbs",
            Unit::Unrecognized(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Unit::Unrecognized(_))
    }
}

impl ValueObject for Category {}
impl ValueObject for Unit {}

macro_rules! impl_catalogue_codec {
    ($t:ident, $name:literal) => {
        impl From<String> for $t {
            fn from(value: String) -> Self {
                $t::from_code(&value).unwrap_or($t::Unrecognized(value))
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                match value {
                    $t::Unrecognized(code) => code,
                    known => known.code().to_string(),
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.code())
            }
        }

        /// Parses user input (case-insensitive); only catalogue codes are accepted.
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim().to_ascii_lowercase();
                $t::from_code(&code).ok_or_else(|| {
                    let known = $t::ALL.iter().map(|c| c.code()).collect::<Vec<_>>().join(", ");
                    DomainError::validation(format!(
                        "unknown {} {:?} (expected one of: {known})",
                        $name, s
                    ))
                })
            }
        }
    };
}

impl_catalogue_codec!(Category, "category");
impl_catalogue_codec!(Unit, "unit");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category.clone()));
        }
        for unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit.clone()));
        }
    }

    #[test]
    fn unrecognized_category_falls_back_for_display_only() {
        let category = Category::from("nursery".to_string());
        assert_eq!(category, Category::Unrecognized("nursery".to_string()));
        assert_eq!(category.label(), "Other");
        assert_eq!(category.icon(), "📦");
        assert_eq!(category.code(), "nursery");
        assert_eq!(String::from(category), "nursery");
    }

    #[test]
    fn unrecognized_unit_keeps_stored_text() {
        let unit = Unit::from("tins".to_string());
        assert!(!unit.is_known());
        assert_eq!(unit.to_string(), "tins");
    }

    #[test]
    fn user_input_is_case_insensitive_but_strict() {
        assert_eq!(" Feeding ".parse::<Category>().unwrap(), Category::Feeding);
        assert_eq!("OZ".parse::<Unit>().unwrap(), Unit::Oz);

        let err = "nursery".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("diapers")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn serde_uses_plain_codes() {
        let json = serde_json::to_string(&Category::Health).unwrap();
        assert_eq!(json, "\"health\"");

        let unit: Unit = serde_json::from_str("\"bottles\"").unwrap();
        assert_eq!(unit, Unit::Bottles);

        let stored: Category = serde_json::from_str("\"Diapers\"").unwrap();
        assert_eq!(stored, Category::Unrecognized("Diapers".to_string()));
        assert_eq!(serde_json::to_string(&stored).unwrap(), "\"Diapers\"");
    }

    #[test]
    fn form_defaults() {
        assert_eq!(Category::default(), Category::Diapers);
        assert_eq!(Unit::default(), Unit::Pieces);
    }
}
