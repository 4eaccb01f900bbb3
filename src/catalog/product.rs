use serde::Deserialize;
use serde_json::Value;

/// Product category as shown in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub image: Option<String>,
}

/// A catalog entry with every optional field resolved.
///
/// Built once from the wire record; nothing downstream needs to know
/// which fields the endpoint left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// `None` when the endpoint sent no description or only whitespace.
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<Category>,
    /// String entries of the `images` array, unmodified.
    pub images: Vec<String>,
}

/// Product as the endpoint sends it. Every field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<CategoryRecord>,
    pub images: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let description = record
            .description
            .filter(|text| !text.trim().is_empty());

        let category = record.category.and_then(|category| {
            let name = category.name.filter(|name| !name.trim().is_empty())?;
            Some(Category {
                name,
                image: category.image,
            })
        });

        let images = record
            .images
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match value {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect();

        Self {
            id: record.id.unwrap_or_default(),
            title: record.title.unwrap_or_default(),
            description,
            price: record.price.unwrap_or_default(),
            category,
            images,
        }
    }
}

/// Decode each array entry on its own. An entry that does not fit the
/// record shape is skipped so the rest of the catalog still shows.
pub(crate) fn decode_products(values: Vec<Value>) -> Vec<Product> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<ProductRecord>(value) {
            Ok(record) => Some(Product::from(record)),
            Err(err) => {
                tracing::warn!(index, "Skipping unreadable product record: {}", err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Product {
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        Product::from(record)
    }

    #[test]
    fn full_record_keeps_every_field() {
        let product = decode(
            r#"{
                "id": 4,
                "title": "Classic Grey Hoodie",
                "description": "Soft and warm",
                "price": 90,
                "category": {"name": "Clothes", "image": "https://i.imgur.com/QkIa5tT.jpeg"},
                "images": ["https://i.imgur.com/R2PN9Wq.jpeg"]
            }"#,
        );
        assert_eq!(product.id, 4);
        assert_eq!(product.title, "Classic Grey Hoodie");
        assert_eq!(product.description.as_deref(), Some("Soft and warm"));
        assert_eq!(product.price, 90.0);
        assert_eq!(product.category.as_ref().map(|c| c.name.as_str()), Some("Clothes"));
        assert_eq!(
            product.category.as_ref().and_then(|c| c.image.as_deref()),
            Some("https://i.imgur.com/QkIa5tT.jpeg")
        );
        assert_eq!(product.images, vec!["https://i.imgur.com/R2PN9Wq.jpeg".to_string()]);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let product = decode(r#"{"id": 7}"#);
        assert_eq!(product.title, "");
        assert!(product.description.is_none());
        assert_eq!(product.price, 0.0);
        assert!(product.category.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn null_and_blank_values_are_treated_as_missing() {
        let product = decode(
            r#"{"id": 1, "title": null, "description": "   ", "category": {"name": ""}, "images": null}"#,
        );
        assert_eq!(product.title, "");
        assert!(product.description.is_none());
        assert!(product.category.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn non_string_images_are_dropped() {
        let product = decode(r#"{"id": 1, "images": [42, "https://a.example/x.png", null]}"#);
        assert_eq!(product.images, vec!["https://a.example/x.png".to_string()]);
    }

    #[test]
    fn fractional_price_is_kept() {
        let product = decode(r#"{"id": 1, "price": 12.5}"#);
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn bad_records_are_skipped_and_the_rest_kept() {
        let values: Vec<Value> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Hat", "price": 5},
                {"id": 2, "title": "Scarf", "price": "cheap"},
                {"id": 3, "title": "Boots", "category": "Shoes"},
                42,
                {"id": 5, "title": "Gloves", "price": 7.5}
            ]"#,
        )
        .unwrap();

        let products = decode_products(values);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(products[1].price, 7.5);
    }
}
