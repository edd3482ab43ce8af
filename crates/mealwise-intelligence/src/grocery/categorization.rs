// ABOUTME: Ingredient classification strategy mapping ingredient names to aisle categories
// ABOUTME: Keyword classifier checks categories in priority order and falls back to Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::GroceryConfig;
use mealwise_core::models::CategoryTag;

/// Strategy for assigning an aisle category to an ingredient name
pub trait IngredientClassifier: Send + Sync {
    /// Category for the ingredient; never fails
    fn classify(&self, ingredient: &str) -> CategoryTag;
}

impl<F> IngredientClassifier for F
where
    F: Fn(&str) -> CategoryTag + Send + Sync,
{
    fn classify(&self, ingredient: &str) -> CategoryTag {
        self(ingredient)
    }
}

/// One category and the lowercase keywords that select it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Category assigned on match
    pub category: CategoryTag,
    /// Lowercase substrings to look for
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Build a rule, lowercasing the keywords
    #[must_use]
    pub fn new<I, S>(category: CategoryTag, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Case-insensitive substring classifier
///
/// Rules are evaluated in order and the first rule with a matching keyword
/// wins, so "Tomato Sauce" is Produce even though "sauce" is a Pantry keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
}

impl KeywordClassifier {
    /// Classifier with the default keyword lists
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&GroceryConfig::default())
    }

    /// Classifier using configured keyword lists in Produce, Protein, Dairy, Pantry order
    ///
    /// Spice exceptions form a leading Pantry rule so "Black Pepper" is not
    /// swallowed by the produce keyword "pepper".
    #[must_use]
    pub fn from_config(config: &GroceryConfig) -> Self {
        Self::from_rules(vec![
            KeywordRule::new(CategoryTag::Pantry, &config.spice_exceptions),
            KeywordRule::new(CategoryTag::Produce, &config.produce_keywords),
            KeywordRule::new(CategoryTag::Protein, &config.protein_keywords),
            KeywordRule::new(CategoryTag::Dairy, &config.dairy_keywords),
            KeywordRule::new(CategoryTag::Pantry, &config.pantry_keywords),
        ])
    }

    /// Classifier from explicit rules, evaluated in the given order
    #[must_use]
    pub const fn from_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Add keywords to a category, appending a new lowest-priority rule if none exists
    ///
    /// When a category has several rules the keywords join the last one.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, category: CategoryTag, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = KeywordRule::new(category, keywords);
        match self.rules.iter_mut().rev().find(|r| r.category == category) {
            Some(rule) => rule.keywords.extend(extra.keywords),
            None => self.rules.push(extra),
        }
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientClassifier for KeywordClassifier {
    fn classify(&self, ingredient: &str) -> CategoryTag {
        let lowered = ingredient.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(CategoryTag::Other, |rule| rule.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_category_wins() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Tomato Sauce"), CategoryTag::Produce);
        assert_eq!(classifier.classify("Eggplant"), CategoryTag::Produce);
        assert_eq!(classifier.classify("Egg"), CategoryTag::Protein);
        assert_eq!(classifier.classify("Paneer"), CategoryTag::Dairy);
        assert_eq!(classifier.classify("Basmati Rice"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("Black Pepper"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("Saffron"), CategoryTag::Other);
    }

    #[test]
    fn test_named_keywords_reach_their_category() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Red Pepper"), CategoryTag::Produce);
        assert_eq!(classifier.classify("Green Bell Pepper"), CategoryTag::Produce);
        assert_eq!(classifier.classify("Parmesan"), CategoryTag::Dairy);
        assert_eq!(classifier.classify("Feta"), CategoryTag::Dairy);
        assert_eq!(classifier.classify("Caesar Dressing"), CategoryTag::Pantry);
    }

    #[test]
    fn test_spice_exceptions_beat_produce() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Whole Peppercorns"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("Kashmiri Chili Powder"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("Green Chili"), CategoryTag::Produce);
    }

    #[test]
    fn test_extra_pantry_keywords_keep_pantry_priority() {
        let classifier = KeywordClassifier::new().with_keywords(CategoryTag::Pantry, ["tomato"]);
        assert_eq!(classifier.classify("Tomato"), CategoryTag::Produce);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("BREAD"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("greek YOGURT"), CategoryTag::Dairy);
    }

    #[test]
    fn test_with_keywords_extends_category() {
        let classifier = KeywordClassifier::new().with_keywords(CategoryTag::Pantry, ["Saffron"]);
        assert_eq!(classifier.classify("Kashmiri saffron"), CategoryTag::Pantry);
    }

    #[test]
    fn test_custom_rule_order() {
        let classifier = KeywordClassifier::from_rules(vec![
            KeywordRule::new(CategoryTag::Pantry, ["sauce"]),
            KeywordRule::new(CategoryTag::Produce, ["tomato"]),
        ]);
        assert_eq!(classifier.classify("Tomato Sauce"), CategoryTag::Pantry);
        assert_eq!(classifier.classify("Tomato"), CategoryTag::Produce);
    }

    #[test]
    fn test_closure_classifier() {
        let everything_is_pantry = |_: &str| CategoryTag::Pantry;
        assert_eq!(everything_is_pantry.classify("Milk"), CategoryTag::Pantry);
    }
}
