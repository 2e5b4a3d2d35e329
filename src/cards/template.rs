//! Card templates and the template catalog.
//!
//! Templates are the static side of cards: the shop offers them and the
//! `ADD_CARD` side-effect instantiates them. The [`TemplateCatalog`]
//! provides lookup by [`TemplateId`].
//!
//! ## Example
//!
//! ```
//! use rust_tavern::cards::{CardTemplate, TemplateCatalog, UnitType};
//! use rust_tavern::core::CardId;
//!
//! let mut catalog = TemplateCatalog::new();
//! catalog.register(CardTemplate::new("c_escort", "Escort", UnitType::Melee).with_tier(0));
//!
//! let escort = catalog.get("c_escort").unwrap().instantiate(CardId::new(5));
//! assert_eq!(escort.name, "Escort");
//! assert_eq!(escort.id, CardId::new(5));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, UnitType};
use crate::core::{CardId, TemplateId};
use crate::hooks::TraitKey;

/// Static definition of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: u32,
    pub tier: u8,
    /// Sale value shown in the shop.
    pub value: u32,
    pub unit_type: UnitType,
    pub unit_count: i64,
    #[serde(default)]
    pub traits: Vec<TraitKey>,
}

impl CardTemplate {
    /// Create a template with the usual defaults (cost 3, tier 1, one unit).
    pub fn new(id: impl Into<TemplateId>, name: impl Into<String>, unit_type: UnitType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost: 3,
            tier: 1,
            value: 0,
            unit_type,
            unit_count: 1,
            traits: Vec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the tier (builder pattern).
    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    /// Set the sale value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Set the starting unit count (builder pattern).
    #[must_use]
    pub fn with_unit_count(mut self, count: i64) -> Self {
        self.unit_count = count;
        self
    }

    /// Add a capability tag (builder pattern).
    #[must_use]
    pub fn with_trait(mut self, tag: impl Into<TraitKey>) -> Self {
        let tag = tag.into();
        if !self.traits.contains(&tag) {
            self.traits.push(tag);
        }
        self
    }

    /// Create a fresh instance of this template.
    #[must_use]
    pub fn instantiate(&self, id: CardId) -> Card {
        Card {
            id,
            template_id: self.id.clone(),
            name: self.name.clone(),
            tier: self.tier,
            cost: self.cost,
            unit_type: self.unit_type,
            unit_count: self.unit_count,
            is_golden: false,
            traits: self.traits.clone(),
            upgrades: Vec::new(),
        }
    }
}

/// Lookup table of templates.
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    templates: FxHashMap<TemplateId, CardTemplate>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, returning the one it replaced.
    pub fn register(&mut self, template: CardTemplate) -> Option<CardTemplate> {
        self.templates.insert(template.id.clone(), template)
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardTemplate> {
        self.templates.get(id)
    }

    /// Check if a template is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates available at or below a tavern tier.
    pub fn up_to_tier(&self, tier: u8) -> impl Iterator<Item = &CardTemplate> {
        self.templates
            .values()
            .filter(move |t| t.tier >= 1 && t.tier <= tier)
    }
}

impl FromIterator<CardTemplate> for TemplateCatalog {
    fn from_iter<I: IntoIterator<Item = CardTemplate>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for template in iter {
            catalog.register(template);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_copies_fields() {
        let template = CardTemplate::new("c_militia", "Militia", UnitType::Melee)
            .with_unit_count(3)
            .with_trait("MILITIA_GROWTH")
            .with_value(10);

        let card = template.instantiate(CardId::new(42));
        assert_eq!(card.id, CardId::new(42));
        assert_eq!(card.template_id, TemplateId::from("c_militia"));
        assert_eq!(card.unit_count, 3);
        assert!(card.has_trait("MILITIA_GROWTH"));
        assert!(!card.is_golden);
    }

    #[test]
    fn test_register_replaces() {
        let mut catalog = TemplateCatalog::new();
        assert!(catalog.register(CardTemplate::new("a", "A", UnitType::Melee)).is_none());
        let old = catalog.register(CardTemplate::new("a", "A2", UnitType::Ranged));

        assert_eq!(old.map(|t| t.name), Some("A".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").map(|t| t.unit_type), Some(UnitType::Ranged));
    }

    #[test]
    fn test_up_to_tier_skips_tokens() {
        let catalog: TemplateCatalog = [
            CardTemplate::new("t1", "T1", UnitType::Melee).with_tier(1),
            CardTemplate::new("t3", "T3", UnitType::Melee).with_tier(3),
            CardTemplate::new("token", "Token", UnitType::Melee).with_tier(0),
        ]
        .into_iter()
        .collect();

        let mut ids: Vec<_> = catalog.up_to_tier(2).map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["t1"]);
    }
}
