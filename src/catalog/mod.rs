use std::fs;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::calculator::constants::REFERENCE_FOODS;
use crate::error::{HealthError, Result};
use crate::models::{FoodCatalog, FoodItem};

/// The built-in ten-item food table.
pub fn reference_catalog() -> FoodCatalog {
    REFERENCE_FOODS
        .iter()
        .map(|&(name, calories)| FoodItem::new(name, calories))
        .collect()
}

/// Load a catalog from a JSON file.
///
/// The file holds an array of `{"Name": ..., "Calories": ...}` objects.
/// Repeated names keep the last calories (see [`FoodCatalog::new`]).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;

    if let Some(blank) = items.iter().position(|i| i.name.trim().is_empty()) {
        return Err(HealthError::InvalidInput(format!(
            "catalog entry {} has an empty name",
            blank + 1
        )));
    }

    let count = items.len();
    let catalog = FoodCatalog::new(items);
    if catalog.len() < count {
        warn!(
            path = %path.display(),
            duplicates = count - catalog.len(),
            "catalog contains repeated names; last entry wins"
        );
    }
    info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Save a catalog to a JSON file, in catalog order.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}

/// Load from `path` when given, otherwise fall back to the reference catalog.
pub fn resolve_catalog<P: AsRef<Path>>(path: Option<P>) -> Result<FoodCatalog> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(reference_catalog()),
    }
}

/// Minimum similarity for a catalog name to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest catalog name to `input`, for "did you mean" hints.
///
/// Compares case-insensitively; returns nothing below the threshold.
pub fn suggest_food<'a>(catalog: &'a FoodCatalog, input: &str) -> Option<&'a str> {
    let input = input.to_lowercase();
    catalog
        .names()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reference_catalog_contents() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.calories("Nasi putih (1 pinggan)"), Some(250));
        assert_eq!(catalog.calories("Nasi lemak (1 bungkus)"), Some(500));
        assert_eq!(catalog.calories("Air kosong"), Some(0));
        assert_eq!(catalog.names().next(), Some("Nasi putih (1 pinggan)"));
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"Name": "Kuih lapis", "Calories": 150},
            {"Name": "Cendol", "Calories": 250}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.calories("Cendol"), Some(250));

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_negative_calories_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"Name": "Odd", "Calories": -5}]"#)
            .unwrap();

        assert!(matches!(load_catalog(file.path()), Err(HealthError::Json(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"Name": "  ", "Calories": 10}]"#).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(HealthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_suggest_food() {
        let catalog = reference_catalog();
        assert_eq!(
            suggest_food(&catalog, "nasi lemak"),
            Some("Nasi lemak (1 bungkus)")
        );
        assert_eq!(suggest_food(&catalog, "Air kosong"), Some("Air kosong"));
        assert_eq!(suggest_food(&catalog, "zzzz"), None);
    }

    #[test]
    fn test_resolve_defaults_to_reference() {
        let catalog = resolve_catalog(None::<&Path>).unwrap();
        assert_eq!(catalog, reference_catalog());
    }
}
