use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry: a food portion and its calorie count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: u32,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}

/// Immutable mapping from food name to calories.
///
/// Lookups are exact on the name. Entries keep the order they were supplied
/// in, which is the order they are listed to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog from a list of items.
    ///
    /// A repeated name replaces the earlier calories but keeps the earlier
    /// position.
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            match catalog.index.get(&item.name) {
                Some(&pos) => catalog.items[pos].calories = item.calories,
                None => {
                    catalog.index.insert(item.name.clone(), catalog.items.len());
                    catalog.items.push(item);
                }
            }
        }
        catalog
    }

    /// Calories for a food, if the name is in the catalog.
    pub fn calories(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&pos| self.items[pos].calories)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<FoodItem> for FoodCatalog {
    fn from_iter<T: IntoIterator<Item = FoodItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
