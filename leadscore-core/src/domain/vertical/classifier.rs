// leadscore-core/src/domain/vertical/classifier.rs

use serde::{Deserialize, Serialize};

use crate::domain::vertical::Vertical;

/// Keyword sets used to map a free-text category label onto a vertical.
/// Matching is a case-insensitive substring test.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VerticalKeywords {
    #[serde(default = "default_restaurant_keywords")]
    pub restaurants: Vec<String>,
    #[serde(default = "default_grocery_keywords")]
    pub grocery: Vec<String>,
    #[serde(default = "default_retail_keywords")]
    pub retail: Vec<String>,
}

impl Default for VerticalKeywords {
    fn default() -> Self {
        Self {
            restaurants: default_restaurant_keywords(),
            grocery: default_grocery_keywords(),
            retail: default_retail_keywords(),
        }
    }
}

impl VerticalKeywords {
    /// Keyword sets in precedence order.
    pub fn by_precedence(&self) -> [(Vertical, &[String]); 3] {
        [
            (Vertical::Restaurants, self.restaurants.as_slice()),
            (Vertical::Grocery, self.grocery.as_slice()),
            (Vertical::Retail, self.retail.as_slice()),
        ]
    }
}

fn default_restaurant_keywords() -> Vec<String> {
    ["restaurant", "meal_takeaway", "meal_delivery", "cafe", "bakery"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_grocery_keywords() -> Vec<String> {
    ["grocery", "supermarket"].into_iter().map(String::from).collect()
}

fn default_retail_keywords() -> Vec<String> {
    ["store", "shopping", "clothing", "convenience"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Maps category labels to verticals with a fixed precedence:
/// restaurants, then grocery, then retail.
#[derive(Debug, Clone)]
pub struct VerticalClassifier {
    rules: Vec<(Vertical, Vec<String>)>,
}

impl VerticalClassifier {
    pub fn new(keywords: &VerticalKeywords) -> Self {
        let rules = keywords
            .by_precedence()
            .into_iter()
            .map(|(vertical, terms)| {
                let lowered = terms
                    .iter()
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect();
                (vertical, lowered)
            })
            .collect();
        Self { rules }
    }

    pub fn classify(&self, category: Option<&str>) -> Vertical {
        let label = category.unwrap_or_default().to_lowercase();
        if label.trim().is_empty() {
            return Vertical::Unknown;
        }

        self.rules
            .iter()
            .find(|(_, terms)| terms.iter().any(|t| label.contains(t.as_str())))
            .map(|(vertical, _)| *vertical)
            .unwrap_or(Vertical::Unknown)
    }
}

impl Default for VerticalClassifier {
    fn default() -> Self {
        Self::new(&VerticalKeywords::default())
    }
}
