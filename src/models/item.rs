use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, StockError};

/// A stock record.
///
/// Field names on the wire follow the item source file (`itemName`,
/// `unity_price`, ...). A missing, `null` or empty `expiryDate` means the
/// item never expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,

    #[serde(rename = "itemName")]
    pub name: String,

    pub category: String,

    pub quantity: u32,

    pub location: String,

    #[serde(
        rename = "expiryDate",
        default,
        deserialize_with = "deserialize_expiry"
    )]
    pub expiry_date: Option<NaiveDate>,

    #[serde(rename = "unity_price")]
    pub unit_price: f64,

    #[serde(rename = "ideal_quantity")]
    pub ideal_quantity: u32,
}

fn deserialize_expiry<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Item {
    /// Units missing to reach the ideal quantity (0 when at or above it).
    #[inline]
    pub fn deficit(&self) -> u32 {
        self.ideal_quantity.saturating_sub(self.quantity)
    }

    #[inline]
    pub fn is_below_ideal(&self) -> bool {
        self.quantity < self.ideal_quantity
    }

    /// Fraction by which stock falls short of ideal: `1 - quantity / ideal`.
    pub fn criticality(&self) -> f64 {
        if self.ideal_quantity == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.quantity) / f64::from(self.ideal_quantity)
    }

    /// Check the field contract an item source must satisfy.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.name.trim().is_empty() {
            Some("name must not be empty")
        } else if self.ideal_quantity == 0 {
            Some("ideal quantity must be positive")
        } else if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            Some("unit price must be a non-negative number")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(StockError::InvalidItem {
                name: self.name.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Expiry as text, for display.
    pub fn expiry_label(&self) -> String {
        self.expiry_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 9,
            name: "Atadura de Crepom 10cm".to_string(),
            category: "Curativos".to_string(),
            quantity: 200,
            location: "Prateleira B2".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2027, 9, 1),
            unit_price: 0.45,
            ideal_quantity: 300,
        }
    }

    #[test]
    fn test_deficit_and_criticality() {
        let item = sample_item();
        assert_eq!(item.deficit(), 100);
        assert!(item.is_below_ideal());
        assert!((item.criticality() - (1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_deficit_saturates_when_overstocked() {
        let mut item = sample_item();
        item.quantity = 500;
        assert_eq!(item.deficit(), 0);
        assert!(!item.is_below_ideal());
    }

    #[test]
    fn test_validate() {
        assert!(sample_item().validate().is_ok());

        let mut zero_ideal = sample_item();
        zero_ideal.ideal_quantity = 0;
        assert!(matches!(
            zero_ideal.validate(),
            Err(StockError::InvalidItem { .. })
        ));

        let mut negative_price = sample_item();
        negative_price.unit_price = -1.0;
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_deserialize_expiry_variants() {
        let dated = r#"{"id": 1, "itemName": "Gaze", "category": "C", "quantity": 1,
            "location": "A1", "expiryDate": "2026-01-31", "unity_price": 1.5, "ideal_quantity": 4}"#;
        let empty = r#"{"id": 2, "itemName": "Luva", "category": "C", "quantity": 1,
            "location": "A1", "expiryDate": "", "unity_price": 1.5, "ideal_quantity": 4}"#;
        let null = r#"{"id": 3, "itemName": "Soro", "category": "C", "quantity": 1,
            "location": "A1", "expiryDate": null, "unity_price": 1.5, "ideal_quantity": 4}"#;
        let missing = r#"{"id": 4, "itemName": "Seringa", "category": "C", "quantity": 1,
            "location": "A1", "unity_price": 1.5, "ideal_quantity": 4}"#;

        let dated: Item = serde_json::from_str(dated).unwrap();
        assert_eq!(dated.expiry_date, NaiveDate::from_ymd_opt(2026, 1, 31));

        for json in [empty, null, missing] {
            let item: Item = serde_json::from_str(json).unwrap();
            assert_eq!(item.expiry_date, None);
            assert_eq!(item.expiry_label(), "never");
        }
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"id": 1, "itemName": "Gaze", "category": "C", "quantity": 1,
            "location": "A1", "expiryDate": "31/01/2026", "unity_price": 1.5, "ideal_quantity": 4}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
