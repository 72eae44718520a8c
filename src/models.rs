//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Invoice line item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price_per_item: f64,
    /// Subtotal as last computed; recomputed client-side before sending
    #[serde(default)]
    pub total: f64,
    /// Backend fields this form doesn't edit (the item's `_id`), sent back as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Blank row used when adding an item to the form
    pub fn blank() -> Self {
        Self {
            item_name: String::new(),
            quantity: 1.0,
            price_per_item: 0.0,
            total: 0.0,
            extra: Map::new(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity * self.price_per_item
    }
}

/// Invoice data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    #[serde(default)]
    pub bill_date: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub bill_amount: f64,
}

/// Cheque data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cheque {
    /// Server-generated identifier, absent until created
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub billing_date: String,
    #[serde(default)]
    pub cheque_number: String,
    #[serde(default)]
    pub cheque_date: String,
    #[serde(default)]
    pub cheque_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_deserializes_backend_shape() {
        let json = r#"{
            "invoiceNumber": "INV-001",
            "billDate": "2024-03-01T00:00:00.000Z",
            "companyName": "Acme",
            "items": [{"itemName": "Widget", "quantity": 2, "pricePerItem": 10.0, "total": 20.0}],
            "billAmount": 20.0
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.invoice_number, "INV-001");
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].item_name, "Widget");
        assert_eq!(invoice.items[0].subtotal(), 20.0);
    }

    #[test]
    fn test_line_item_keeps_backend_id() {
        let item: LineItem = serde_json::from_str(
            r#"{"_id": "i1", "itemName": "Widget", "quantity": 2, "pricePerItem": 10.0, "total": 20.0}"#,
        )
        .unwrap();
        assert_eq!(item.extra.get("_id"), Some(&Value::from("i1")));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], "i1");
        assert_eq!(value["itemName"], "Widget");
        assert!(serde_json::to_value(LineItem::blank()).unwrap().get("_id").is_none());
    }

    #[test]
    fn test_invoice_missing_fields_default() {
        let invoice: Invoice = serde_json::from_str(r#"{"invoiceNumber": "INV-9"}"#).unwrap();
        assert!(invoice.items.is_empty());
        assert_eq!(invoice.bill_amount, 0.0);
        assert_eq!(invoice.company_name, "");
    }

    #[test]
    fn test_cheque_id_uses_underscore_name() {
        let cheque: Cheque = serde_json::from_str(
            r#"{"_id": "65f0c1", "invoiceNumber": "INV-001", "chequeNumber": "000123", "chequeAmount": 99.5}"#,
        )
        .unwrap();
        assert_eq!(cheque.id.as_deref(), Some("65f0c1"));
        assert_eq!(cheque.cheque_amount, 99.5);

        let value = serde_json::to_value(&cheque).unwrap();
        assert_eq!(value["_id"], "65f0c1");
        assert_eq!(value["chequeNumber"], "000123");
    }

    #[test]
    fn test_new_cheque_omits_id() {
        let cheque = Cheque {
            id: None,
            invoice_number: "INV-001".to_string(),
            billing_date: "2024-03-01".to_string(),
            cheque_number: "1".to_string(),
            cheque_date: String::new(),
            cheque_amount: 0.0,
        };
        let value = serde_json::to_value(&cheque).unwrap();
        assert!(value.get("_id").is_none());
    }
}
