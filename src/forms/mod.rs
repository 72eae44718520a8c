//! Form State
//!
//! Draft state behind the invoice and cheque modals.

mod modal;
mod invoice_form;
mod cheque_form;

pub use modal::Modal;
pub use invoice_form::{InvoiceForm, ItemField};
pub use cheque_form::{ChequeField, ChequeForm};
