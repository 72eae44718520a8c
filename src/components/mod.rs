//! UI Components
//!
//! Leptos components for the invoice and cheque desk.

mod cheque_details;
mod invoice_table;
mod cheque_table;
mod invoice_modal;
mod cheque_modal;

pub use cheque_details::ChequeDetails;
pub use invoice_table::InvoiceTable;
pub use cheque_table::ChequeTable;
pub use invoice_modal::InvoiceModal;
pub use cheque_modal::ChequeModal;
