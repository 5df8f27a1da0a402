//! Form boundary: raw text in, validated draft out.
//!
//! A presentation layer hands over whatever the user typed (`ItemForm`). The
//! model only ever sees an `ItemDraft`, which can only be built from input
//! that passed validation.

use core::fmt::Display;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use babykit_core::{DomainError, DomainResult};

use crate::catalogue::{Category, Unit};
use crate::item::Item;

/// Raw, unvalidated field values as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub current_stock: String,
    pub min_threshold: String,
    pub unit: String,
    pub notes: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::default().code().to_string(),
            current_stock: String::new(),
            min_threshold: String::new(),
            unit: Unit::default().code().to_string(),
            notes: String::new(),
        }
    }
}

impl ItemForm {
    /// Pre-fill an edit form from an existing record.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().code().to_string(),
            current_stock: item.current_stock().to_string(),
            min_threshold: item.min_threshold().to_string(),
            unit: item.unit().code().to_string(),
            notes: item.notes().unwrap_or_default().to_string(),
        }
    }

    /// True when any of the fields required to create an item is blank.
    pub fn is_incomplete(&self) -> bool {
        self.name.trim().is_empty()
            || self.current_stock.trim().is_empty()
            || self.min_threshold.trim().is_empty()
    }
}

/// Validated field values for creating or editing an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) current_stock: u32,
    pub(crate) min_threshold: u32,
    pub(crate) unit: Unit,
    pub(crate) notes: Option<String>,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        current_stock: u32,
        min_threshold: u32,
        unit: Unit,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        Ok(Self {
            name,
            category,
            current_stock,
            min_threshold,
            unit,
            notes: None,
        })
    }

    /// Attach notes; blank text clears them.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into().trim().to_string();
        self.notes = (!notes.is_empty()).then_some(notes);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn min_threshold(&self) -> u32 {
        self.min_threshold
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Validate an edit of `current`.
    ///
    /// Category and unit go through the same strict parse as new input, except
    /// that the record's own stored code is always accepted, so a record
    /// holding a code outside the catalogue can be edited without losing it.
    pub fn for_edit(form: &ItemForm, current: &Item) -> DomainResult<Self> {
        Self::from_form(
            form,
            keep_or_parse(&form.category, current.category())?,
            keep_or_parse(&form.unit, current.unit())?,
        )
    }

    fn from_form(form: &ItemForm, category: Category, unit: Unit) -> DomainResult<Self> {
        let current_stock = parse_quantity("current stock", &form.current_stock)?;
        let min_threshold = parse_quantity("minimum threshold", &form.min_threshold)?;

        Ok(ItemDraft::new(form.name.as_str(), category, current_stock, min_threshold, unit)?
            .with_notes(form.notes.as_str()))
    }
}

impl TryFrom<&ItemForm> for ItemDraft {
    type Error = DomainError;

    fn try_from(form: &ItemForm) -> Result<Self, Self::Error> {
        Self::from_form(form, form.category.parse()?, form.unit.parse()?)
    }
}

fn keep_or_parse<T>(raw: &str, stored: &T) -> DomainResult<T>
where
    T: FromStr<Err = DomainError> + Display + Clone,
{
    if raw.trim() == stored.to_string() {
        Ok(stored.clone())
    } else {
        raw.parse()
    }
}

/// Parse a stock field as a non-negative whole number.
pub fn parse_quantity(field: &str, raw: &str) -> DomainResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    raw.parse::<u32>().map_err(|_| {
        DomainError::validation(format!(
            "{field} must be a non-negative whole number, got {raw:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use babykit_core::ItemId;
    use chrono::Utc;

    fn filled_form() -> ItemForm {
        ItemForm {
            name: "  Formula  ".to_string(),
            category: "feeding".to_string(),
            current_stock: "3".to_string(),
            min_threshold: " 4 ".to_string(),
            unit: "bottles".to_string(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let draft = ItemDraft::try_from(&filled_form()).unwrap();
        assert_eq!(draft.name(), "Formula");
        assert_eq!(draft.category(), &Category::Feeding);
        assert_eq!(draft.current_stock(), 3);
        assert_eq!(draft.min_threshold(), 4);
        assert_eq!(draft.unit(), &Unit::Bottles);
        assert_eq!(draft.notes(), None);
    }

    #[test]
    fn zero_stock_is_a_value_not_a_blank() {
        let mut form = filled_form();
        form.current_stock = "0".to_string();
        let draft = ItemDraft::try_from(&form).unwrap();
        assert_eq!(draft.current_stock(), 0);
    }

    #[test]
    fn rejects_missing_required_fields() {
        for blank in ["name", "current_stock", "min_threshold"] {
            let mut form = filled_form();
            match blank {
                "name" => form.name = " ".to_string(),
                "current_stock" => form.current_stock.clear(),
                _ => form.min_threshold.clear(),
            }
            assert!(form.is_incomplete());
            let err = ItemDraft::try_from(&form).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{blank}: {err:?}");
        }
    }

    #[test]
    fn rejects_negative_and_non_numeric_quantities() {
        assert!(parse_quantity("current stock", "-3").is_err());
        assert!(parse_quantity("current stock", "twelve").is_err());
        assert!(parse_quantity("current stock", "1.5").is_err());
        assert_eq!(parse_quantity("current stock", "12").unwrap(), 12);
    }

    #[test]
    fn rejects_unknown_category_on_input() {
        let mut form = filled_form();
        form.category = "nursery".to_string();
        assert!(ItemDraft::try_from(&form).is_err());
    }

    #[test]
    fn default_form_uses_catalogue_defaults() {
        let form = ItemForm::default();
        assert_eq!(form.category, "diapers");
        assert_eq!(form.unit, "pieces");
        assert!(form.is_incomplete());
    }

    #[test]
    fn edit_form_round_trips_an_item() {
        let draft = ItemDraft::new("Onesies", Category::Clothing, 6, 4, Unit::Pieces)
            .unwrap()
            .with_notes("6-9 months");
        let item = Item::create(ItemId::new(), draft.clone(), Utc::now());

        let form = ItemForm::from_item(&item);
        assert_eq!(form.current_stock, "6");
        assert_eq!(form.notes, "6-9 months");
        assert_eq!(ItemDraft::try_from(&form).unwrap(), draft);
        assert_eq!(ItemDraft::for_edit(&form, &item).unwrap(), draft);
    }

    #[test]
    fn edit_keeps_the_records_own_unrecognized_codes() {
        let nursery = Category::from("nursery".to_string());
        let each = Unit::from("each".to_string());
        let draft = ItemDraft::new("Night light", nursery.clone(), 1, 1, each.clone()).unwrap();
        let item = Item::create(ItemId::new(), draft, Utc::now());

        let mut form = ItemForm::from_item(&item);
        form.current_stock = "5".to_string();
        assert!(ItemDraft::try_from(&form).is_err());

        let edited = ItemDraft::for_edit(&form, &item).unwrap();
        assert_eq!(edited.current_stock(), 5);
        assert_eq!(edited.category(), &nursery);
        assert_eq!(edited.unit(), &each);

        form.category = "toys".to_string();
        assert_eq!(ItemDraft::for_edit(&form, &item).unwrap().category(), &Category::Toys);

        form.category = "garage".to_string();
        let err = ItemDraft::for_edit(&form, &item).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
