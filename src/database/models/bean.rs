use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry. `user_id` is the owning user, or `None` for beans in
/// the shared global catalog. Prices travel as strings on the wire to
/// avoid floating-point drift.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeBean {
    pub bean_id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub origin: Option<String>,
    pub roast_level: Option<String>,
    pub image_url: Option<String>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub price_per_kg: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub description: Option<String>,
}

/// Fields accepted when creating a bean. The owner is never client-supplied;
/// it is fixed by the calling context.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBean {
    pub name: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub roast_level: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_per_kg: Option<Decimal>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bean_serializes_with_camel_case_and_string_price() {
        let bean = CoffeeBean {
            bean_id: 3,
            user_id: None,
            name: "Yirgacheffe".to_string(),
            origin: Some("Ethiopia".to_string()),
            roast_level: Some("light".to_string()),
            image_url: None,
            price_per_kg: Some("24.50".parse().unwrap()),
            stock_quantity: Some(120),
            description: None,
        };

        let value = serde_json::to_value(&bean).unwrap();
        assert_eq!(value["beanId"], 3);
        assert_eq!(value["userId"], json!(null));
        assert_eq!(value["roastLevel"], "light");
        assert_eq!(value["pricePerKg"], "24.50");
        assert_eq!(value["stockQuantity"], 120);
    }

    #[test]
    fn new_bean_accepts_sparse_input() {
        let args: NewBean = serde_json::from_value(json!({ "name": "House Blend" })).unwrap();
        assert_eq!(args.name, "House Blend");
        assert!(args.origin.is_none());
        assert!(args.price_per_kg.is_none());
    }
}
