use super::{CatalogError, CatalogProvider};
use crate::filter::{FilterItem, FilterOption};

/// Sample travel catalog used when no catalog file is configured.
pub struct BuiltinCatalog;

fn option(id: &str, name: &str, description: Option<&str>) -> FilterOption {
    FilterOption {
        id: id.into(),
        name: name.into(),
        description: description.map(Into::into),
    }
}

impl CatalogProvider for BuiltinCatalog {
    fn fetch(&self) -> Result<Vec<FilterItem>, CatalogError> {
        Ok(vec![
            FilterItem {
                id: "stars".into(),
                name: "Hotel class".into(),
                description: Some("Official star rating of the property".into()),
                options: vec![
                    option("3", "3 stars", None),
                    option("4", "4 stars", None),
                    option("5", "5 stars", None),
                ],
            },
            FilterItem {
                id: "meal".into(),
                name: "Meal plan".into(),
                description: None,
                options: vec![
                    option("ro", "Room only", None),
                    option("bb", "Breakfast", Some("Breakfast included for all guests")),
                    option("hb", "Half board", Some("Breakfast and dinner")),
                    option("ai", "All inclusive", Some("Meals, snacks and drinks")),
                ],
            },
            FilterItem {
                id: "price".into(),
                name: "Price per night".into(),
                description: Some("Per room, taxes included".into()),
                options: vec![
                    option("cheap", "Budget", Some("Up to $80")),
                    option("mid", "Mid-range", Some("$80 to $200")),
                    option("lux", "Luxury", Some("Over $200")),
                ],
            },
            FilterItem {
                id: "amenities".into(),
                name: "Amenities".into(),
                description: None,
                options: vec![
                    option("pool", "Swimming pool", None),
                    option("wifi", "Free Wi-Fi", None),
                    option("parking", "Parking", None),
                    option("spa", "Spa", None),
                    option("pets", "Pets allowed", None),
                ],
            },
            FilterItem {
                id: "beach".into(),
                name: "Distance to beach".into(),
                description: None,
                options: vec![
                    option("first-line", "First line", None),
                    option("500m", "Up to 500 m", None),
                    option("1km", "Up to 1 km", None),
                ],
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let items = BuiltinCatalog.fetch().unwrap();
        let items = validate(items).unwrap();
        assert!(items.iter().all(|i| !i.options.is_empty()));
    }
}
