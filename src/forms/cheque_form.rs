//! Cheque Form
//!
//! Draft cheque. The invoice number comes from a selector fed by the loaded
//! invoices, but nothing checks that it still refers to one.

use crate::error::ValidationError;
use crate::format::{input_date, parse_number};
use crate::models::Cheque;

use super::Modal;

/// Input bound to a cheque form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChequeField {
    InvoiceNumber,
    BillingDate,
    ChequeNumber,
    ChequeDate,
    Amount,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChequeForm {
    /// Closed, creating, or editing the cheque with this server id
    pub modal: Modal<String>,
    pub invoice_number: String,
    pub billing_date: String,
    pub cheque_number: String,
    pub cheque_date: String,
    pub cheque_amount: f64,
}

impl ChequeForm {
    /// Blank form, billing date defaulted to `today`
    pub fn open_create(&mut self, today: &str) {
        *self = Self {
            modal: Modal::Create,
            billing_date: today.to_string(),
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, cheque: &Cheque) {
        *self = Self {
            modal: Modal::Edit(cheque.id.clone().unwrap_or_default()),
            invoice_number: cheque.invoice_number.clone(),
            billing_date: input_date(&cheque.billing_date),
            cheque_number: cheque.cheque_number.clone(),
            cheque_date: input_date(&cheque.cheque_date),
            cheque_amount: cheque.cheque_amount,
        };
    }

    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Store raw input for `field`; the amount is parsed, 0 when unparseable
    pub fn set(&mut self, field: ChequeField, value: String) {
        match field {
            ChequeField::InvoiceNumber => self.invoice_number = value,
            ChequeField::BillingDate => self.billing_date = value,
            ChequeField::ChequeNumber => self.cheque_number = value,
            ChequeField::ChequeDate => self.cheque_date = value,
            ChequeField::Amount => self.cheque_amount = parse_number(&value),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.invoice_number.is_empty() || self.cheque_number.is_empty() {
            return Err(ValidationError::MissingChequeFields);
        }
        Ok(())
    }

    /// Wire cheque; a blank edit key is left out of the body
    pub fn to_cheque(&self) -> Cheque {
        Cheque {
            id: self.modal.edit_key().filter(|id| !id.is_empty()).cloned(),
            invoice_number: self.invoice_number.clone(),
            billing_date: self.billing_date.clone(),
            cheque_number: self.cheque_number.clone(),
            cheque_date: self.cheque_date.clone(),
            cheque_amount: self.cheque_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cheque() -> Cheque {
        Cheque {
            id: Some("c1".to_string()),
            invoice_number: "INV-001".to_string(),
            billing_date: "2024-03-01T00:00:00.000Z".to_string(),
            cheque_number: "000123".to_string(),
            cheque_date: "2024-03-10T00:00:00.000Z".to_string(),
            cheque_amount: 25.5,
        }
    }

    #[test]
    fn test_open_create_defaults() {
        let mut form = ChequeForm::default();
        form.open_create("2024-03-01");
        assert_eq!(form.modal, Modal::Create);
        assert_eq!(form.billing_date, "2024-03-01");
        assert_eq!(form.cheque_date, "");
        assert_eq!(form.cheque_amount, 0.0);
        assert_eq!(form.to_cheque().id, None);
    }

    #[test]
    fn test_open_edit_normalizes_dates() {
        let mut form = ChequeForm::default();
        form.open_edit(&sample_cheque());
        assert_eq!(form.modal, Modal::Edit("c1".to_string()));
        assert_eq!(form.billing_date, "2024-03-01");
        assert_eq!(form.cheque_date, "2024-03-10");
        assert_eq!(form.to_cheque().id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_edit_without_server_id_omits_id() {
        let mut form = ChequeForm::default();
        form.open_edit(&Cheque { id: None, ..sample_cheque() });
        assert_eq!(form.modal, Modal::Edit(String::new()));

        let cheque = form.to_cheque();
        assert_eq!(cheque.id, None);
        let value = serde_json::to_value(&cheque).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["chequeNumber"], "000123");
    }

    #[test]
    fn test_validate_requires_invoice_and_cheque_number() {
        let mut form = ChequeForm::default();
        form.open_create("2024-03-01");
        assert_eq!(form.validate(), Err(ValidationError::MissingChequeFields));

        form.set(ChequeField::InvoiceNumber, "INV-001".to_string());
        assert_eq!(form.validate(), Err(ValidationError::MissingChequeFields));

        form.set(ChequeField::ChequeNumber, "000123".to_string());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_amount_parsing() {
        let mut form = ChequeForm::default();
        form.set(ChequeField::Amount, "120.75".to_string());
        assert_eq!(form.cheque_amount, 120.75);
        form.set(ChequeField::Amount, String::new());
        assert_eq!(form.cheque_amount, 0.0);
    }

    #[test]
    fn test_invoice_number_is_not_checked_against_invoices() {
        let mut form = ChequeForm::default();
        form.open_create("2024-03-01");
        form.set(ChequeField::InvoiceNumber, "NO-SUCH-INVOICE".to_string());
        form.set(ChequeField::ChequeNumber, "1".to_string());
        assert!(form.validate().is_ok());
    }
}
