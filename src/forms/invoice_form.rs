//! Invoice Form
//!
//! Draft invoice with an editable list of line items. The bill amount is
//! never stored here; it is always derived from the items.

use crate::error::ValidationError;
use crate::format::{input_date, parse_number};
use crate::models::{Invoice, LineItem};

use super::Modal;

/// Editable column of a line item row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Quantity,
    PricePerItem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    /// Closed, creating, or editing the invoice with this number
    pub modal: Modal<String>,
    invoice_number: String,
    pub bill_date: String,
    pub company_name: String,
    items: Vec<LineItem>,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self {
            modal: Modal::Closed,
            invoice_number: String::new(),
            bill_date: String::new(),
            company_name: String::new(),
            items: vec![LineItem::blank()],
        }
    }
}

impl InvoiceForm {
    /// Blank form for a new invoice, bill date defaulted to `today`
    pub fn open_create(&mut self, today: &str) {
        *self = Self {
            modal: Modal::Create,
            bill_date: today.to_string(),
            ..Self::default()
        };
    }

    /// Form pre-populated from an existing invoice
    pub fn open_edit(&mut self, invoice: &Invoice) {
        let mut items = invoice.items.clone();
        if items.is_empty() {
            items.push(LineItem::blank());
        }
        *self = Self {
            modal: Modal::Edit(invoice.invoice_number.clone()),
            invoice_number: invoice.invoice_number.clone(),
            bill_date: input_date(&invoice.bill_date),
            company_name: invoice.company_name.clone(),
            items,
        };
    }

    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    /// Ignored while editing: an invoice keeps its number for life
    pub fn set_invoice_number(&mut self, value: String) {
        if !self.modal.is_editing() {
            self.invoice_number = value;
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn add_item(&mut self) {
        self.items.push(LineItem::blank());
    }

    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        match field {
            ItemField::Name => item.item_name = value.to_string(),
            ItemField::Quantity => item.quantity = parse_number(value),
            ItemField::PricePerItem => item.price_per_item = parse_number(value),
        }
        item.total = item.subtotal();
    }

    /// Remove a row; the last remaining row can't be removed
    pub fn remove_item(&mut self, index: usize) -> Result<(), ValidationError> {
        if self.items.len() <= 1 {
            return Err(ValidationError::LastLineItem);
        }
        if index < self.items.len() {
            self.items.remove(index);
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.is_empty() {
            return Err(ValidationError::MissingCompanyName);
        }
        Ok(())
    }

    /// Wire invoice with item subtotals and bill amount recomputed.
    /// While editing, the number is the one the edit started with.
    pub fn to_invoice(&self) -> Invoice {
        let invoice_number = match self.modal.edit_key() {
            Some(number) => number.clone(),
            None => self.invoice_number.clone(),
        };
        let items = self
            .items
            .iter()
            .map(|item| LineItem { total: item.subtotal(), ..item.clone() })
            .collect();
        Invoice {
            invoice_number,
            bill_date: self.bill_date.clone(),
            company_name: self.company_name.clone(),
            items,
            bill_amount: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_invoice() -> Invoice {
        Invoice {
            invoice_number: "INV-001".to_string(),
            bill_date: "2024-03-01T00:00:00.000Z".to_string(),
            company_name: "Acme".to_string(),
            items: vec![LineItem {
                item_name: "Widget".to_string(),
                quantity: 2.0,
                price_per_item: 10.0,
                total: 20.0,
                extra: Default::default(),
            }],
            bill_amount: 20.0,
        }
    }

    #[test]
    fn test_widget_gadget_total() {
        let mut form = InvoiceForm::default();
        form.open_create("2024-03-01");
        form.update_item(0, ItemField::Name, "Widget");
        form.update_item(0, ItemField::Quantity, "2");
        form.update_item(0, ItemField::PricePerItem, "10.00");
        form.add_item();
        form.update_item(1, ItemField::Name, "Gadget");
        form.update_item(1, ItemField::Quantity, "1");
        form.update_item(1, ItemField::PricePerItem, "5.50");

        assert_eq!(form.total(), 25.5);
        assert_eq!(form.items()[0].total, 20.0);
        assert_eq!(form.items()[1].total, 5.5);
    }

    #[test]
    fn test_update_item_bad_number_is_zero() {
        let mut form = InvoiceForm::default();
        form.update_item(0, ItemField::PricePerItem, "7");
        form.update_item(0, ItemField::Quantity, "two");
        assert_eq!(form.items()[0].quantity, 0.0);
        assert_eq!(form.items()[0].total, 0.0);
        assert_eq!(form.total(), 0.0);
    }

    #[test]
    fn test_update_item_out_of_range_is_noop() {
        let mut form = InvoiceForm::default();
        form.update_item(5, ItemField::Name, "Ghost");
        assert_eq!(form.items().len(), 1);
        assert_eq!(form.items()[0].item_name, "");
    }

    #[test]
    fn test_remove_last_item_is_rejected() {
        let mut form = InvoiceForm::default();
        assert_eq!(form.remove_item(0), Err(ValidationError::LastLineItem));
        assert_eq!(form.items().len(), 1);
    }

    #[test]
    fn test_remove_item_keeps_order() {
        let mut form = InvoiceForm::default();
        form.update_item(0, ItemField::Name, "a");
        form.add_item();
        form.update_item(1, ItemField::Name, "b");
        form.add_item();
        form.update_item(2, ItemField::Name, "c");

        form.remove_item(1).unwrap();
        let names: Vec<_> = form.items().iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_open_create_resets_draft() {
        let mut form = InvoiceForm::default();
        form.open_edit(&sample_invoice());
        form.open_create("2024-05-06");

        assert_eq!(form.modal, Modal::Create);
        assert_eq!(form.invoice_number(), "");
        assert_eq!(form.company_name, "");
        assert_eq!(form.bill_date, "2024-05-06");
        assert_eq!(form.items(), &[LineItem::blank()]);
    }

    #[test]
    fn test_open_edit_populates_and_normalizes_date() {
        let mut form = InvoiceForm::default();
        form.open_edit(&sample_invoice());
        assert_eq!(form.modal, Modal::Edit("INV-001".to_string()));
        assert_eq!(form.bill_date, "2024-03-01");
        assert_eq!(form.company_name, "Acme");
        assert_eq!(form.total(), 20.0);
    }

    #[test]
    fn test_edit_keeps_item_server_fields() {
        let mut invoice = sample_invoice();
        invoice.items[0].extra.insert("_id".to_string(), "i1".into());
        let mut form = InvoiceForm::default();
        form.open_edit(&invoice);
        form.update_item(0, ItemField::Quantity, "3");

        let sent = form.to_invoice();
        assert_eq!(sent.items[0].total, 30.0);
        assert_eq!(sent.items[0].extra.get("_id"), Some(&serde_json::Value::from("i1")));
    }

    #[test]
    fn test_open_edit_without_items_gets_blank_row() {
        let mut invoice = sample_invoice();
        invoice.items.clear();
        let mut form = InvoiceForm::default();
        form.open_edit(&invoice);
        assert_eq!(form.items(), &[LineItem::blank()]);
    }

    #[test]
    fn test_edit_cannot_change_invoice_number() {
        let mut form = InvoiceForm::default();
        form.open_edit(&sample_invoice());
        form.set_invoice_number("INV-999".to_string());
        assert_eq!(form.invoice_number(), "INV-001");
        assert_eq!(form.to_invoice().invoice_number, "INV-001");
    }

    #[test]
    fn test_create_accepts_invoice_number() {
        let mut form = InvoiceForm::default();
        form.open_create("2024-03-01");
        form.set_invoice_number("INV-002".to_string());
        assert_eq!(form.to_invoice().invoice_number, "INV-002");
    }

    #[test]
    fn test_validate_requires_company_name() {
        let mut form = InvoiceForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingCompanyName));
        form.company_name = "Acme".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_to_invoice_recomputes_amounts() {
        let mut invoice = sample_invoice();
        invoice.items[0].total = 999.0;
        invoice.bill_amount = 999.0;
        let mut form = InvoiceForm::default();
        form.open_edit(&invoice);

        let out = form.to_invoice();
        assert_eq!(out.items[0].total, 20.0);
        assert_eq!(out.bill_amount, 20.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(usize),
        Update(usize, ItemField, String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let field = prop_oneof![
            Just(ItemField::Name),
            Just(ItemField::Quantity),
            Just(ItemField::PricePerItem),
        ];
        let value = prop_oneof![
            (0u32..1000).prop_map(|n| n.to_string()),
            (0u32..10_000).prop_map(|n| format!("{}.{:02}", n / 100, n % 100)),
            "[a-z]{0,6}",
        ];
        prop_oneof![
            Just(Op::Add),
            (0usize..8).prop_map(Op::Remove),
            (0usize..8, field, value).prop_map(|(i, f, v)| Op::Update(i, f, v)),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_matches_items(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut form = InvoiceForm::default();
            form.open_create("2024-03-01");
            for op in ops {
                match op {
                    Op::Add => form.add_item(),
                    Op::Remove(i) => { let _ = form.remove_item(i); }
                    Op::Update(i, f, v) => form.update_item(i, f, &v),
                }
                prop_assert!(!form.items().is_empty());
            }
            let expected: f64 = form.items().iter().map(|i| i.quantity * i.price_per_item).sum();
            prop_assert_eq!(form.total(), expected);
            prop_assert_eq!(form.to_invoice().bill_amount, expected);
        }
    }
}
