//! Strategy registry: category name -> update rule, plus one fallback.

use std::collections::HashMap;

use gildedrose_core::{ConfigResult, ConfigurationError};

use crate::rule::UpdateRule;

/// Maps item names to update rules.
///
/// Built once at startup and read-only afterwards; share it between
/// inventories with an `Arc`. Registering a non-default rule under a name that
/// is already taken replaces the earlier rule (last registration wins).
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    rules: HashMap<String, UpdateRule>,
    default_rule: Option<UpdateRule>,
}

impl StrategyRegistry {
    /// An empty registry with no default rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rule table, with the ordinary rule as the default.
    pub fn standard() -> Self {
        Self {
            rules: UpdateRule::specials()
                .into_iter()
                .map(|rule| (rule.name().to_string(), rule))
                .collect(),
            default_rule: Some(UpdateRule::ordinary()),
        }
    }

    /// Add `rule` under its own name, or install it as the default.
    pub fn register(&mut self, rule: UpdateRule, is_default: bool) -> ConfigResult<()> {
        if is_default {
            if let Some(existing) = &self.default_rule {
                return Err(ConfigurationError::duplicate_default(
                    existing.name(),
                    rule.name(),
                ));
            }
            tracing::debug!(rule = rule.name(), "default rule installed");
            self.default_rule = Some(rule);
            return Ok(());
        }

        let name = rule.name().to_string();
        if self.rules.insert(name.clone(), rule).is_some() {
            tracing::warn!(rule = %name, "rule re-registered; replacing previous definition");
        } else {
            tracing::debug!(rule = %name, "rule registered");
        }
        Ok(())
    }

    /// The rule registered under `name`, falling back to the default rule.
    pub fn resolve(&self, name: &str) -> ConfigResult<&UpdateRule> {
        self.rules
            .get(name)
            .or(self.default_rule.as_ref())
            .ok_or_else(|| ConfigurationError::no_rule_resolved(name))
    }

    /// Whether a non-default rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn default_rule(&self) -> Option<&UpdateRule> {
        self.default_rule.as_ref()
    }

    /// Number of installed rules, the default included.
    pub fn len(&self) -> usize {
        self.rules.len() + usize::from(self.default_rule.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::rule::categories;

    fn frozen(name: &str) -> UpdateRule {
        UpdateRule::new(name, |item| item.sell_in(), |item| item.quality())
    }

    #[test]
    fn standard_registry_resolves_every_category() {
        let registry = StrategyRegistry::standard();
        for name in [
            categories::AGED_BRIE,
            categories::BACKSTAGE_PASSES,
            categories::SULFURAS,
            categories::CONJURED,
        ] {
            assert_eq!(registry.resolve(name).unwrap().name(), name);
        }
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.default_rule().map(UpdateRule::name),
            Some(categories::DEFAULT)
        );
    }

    #[test]
    fn unregistered_name_falls_back_to_default() {
        let registry = StrategyRegistry::standard();
        let rule = registry.resolve("foo").unwrap();
        assert_eq!(rule.name(), categories::DEFAULT);

        let update = rule.apply(&Item::new("foo", 10, 12));
        assert_eq!((update.sell_in, update.quality), (9, 11));
    }

    #[test]
    fn resolve_without_default_is_an_error() {
        let mut registry = StrategyRegistry::new();
        registry.register(UpdateRule::aged_brie(), false).unwrap();

        let err = registry.resolve("foo").unwrap_err();
        assert_eq!(err, ConfigurationError::NoRuleResolved("foo".to_string()));

        // Exact matches still resolve.
        assert!(registry.resolve(categories::AGED_BRIE).is_ok());
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        match registry.resolve(categories::AGED_BRIE) {
            Err(ConfigurationError::NoRuleResolved(name)) => assert_eq!(name, categories::AGED_BRIE),
            other => panic!("Expected NoRuleResolved, got {other:?}"),
        }
    }

    #[test]
    fn len_counts_the_default_rule() {
        let mut registry = StrategyRegistry::new();
        assert_eq!(registry.len(), 0);

        registry.register(UpdateRule::ordinary(), true).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());

        registry.register(UpdateRule::conjured(), false).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn second_default_is_rejected() {
        let mut registry = StrategyRegistry::new();
        registry.register(UpdateRule::ordinary(), true).unwrap();

        let err = registry.register(frozen("other"), true).unwrap_err();
        match err {
            ConfigurationError::DuplicateDefault { existing, rejected } => {
                assert_eq!(existing, categories::DEFAULT);
                assert_eq!(rejected, "other");
            }
            _ => panic!("Expected DuplicateDefault error"),
        }

        // The original default stays installed.
        assert_eq!(registry.resolve("foo").unwrap().name(), categories::DEFAULT);
    }

    #[test]
    fn standard_registry_rejects_another_default() {
        let mut registry = StrategyRegistry::standard();
        assert!(matches!(
            registry.register(UpdateRule::conjured(), true),
            Err(ConfigurationError::DuplicateDefault { .. })
        ));
    }

    #[test]
    fn re_registering_a_name_replaces_the_rule() {
        let mut registry = StrategyRegistry::new();
        registry.register(UpdateRule::aged_brie(), false).unwrap();
        registry.register(frozen(categories::AGED_BRIE), false).unwrap();

        assert_eq!(registry.len(), 1);
        let update = registry
            .resolve(categories::AGED_BRIE)
            .unwrap()
            .apply(&Item::new(categories::AGED_BRIE, 5, 10));
        assert_eq!((update.sell_in, update.quality), (5, 10));
    }

    #[test]
    fn custom_rule_takes_precedence_over_default() {
        let mut registry = StrategyRegistry::new();
        registry.register(UpdateRule::ordinary(), true).unwrap();
        registry.register(frozen("Vintage Wine"), false).unwrap();

        assert!(registry.contains("Vintage Wine"));
        assert!(!registry.contains("foo"));
        assert_eq!(registry.resolve("Vintage Wine").unwrap().name(), "Vintage Wine");
    }
}
