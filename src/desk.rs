//! Desk Workflows
//!
//! Submit, delete and reload flows for invoices and cheques. Every mutation
//! is followed by a full reload of the affected list(s); nothing is patched
//! in place.

use crate::api::DeskApi;
use crate::forms::{ChequeForm, InvoiceForm};
use crate::models::{Cheque, Invoice};

/// What the workflows need from the view layer
pub trait DeskUi {
    fn show_invoices(&self, invoices: Vec<Invoice>);
    fn show_cheques(&self, cheques: Vec<Cheque>);
    fn close_invoice_form(&self);
    fn close_cheque_form(&self);
    /// Blocking, dismissible notification
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone)]
pub struct Desk<A, U> {
    api: A,
    ui: U,
}

impl<A: DeskApi, U: DeskUi> Desk<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Self { api, ui }
    }

    /// Failed loads are logged and leave the current list untouched
    pub async fn reload_invoices(&self) {
        match self.api.list_invoices().await {
            Ok(invoices) => {
                log::info!(target: "desk", "Loaded {} invoices", invoices.len());
                self.ui.show_invoices(invoices);
            }
            Err(e) => log::error!(target: "desk", "Error loading invoices: {}", e),
        }
    }

    pub async fn reload_cheques(&self) {
        match self.api.list_cheques().await {
            Ok(cheques) => {
                log::info!(target: "desk", "Loaded {} cheques", cheques.len());
                self.ui.show_cheques(cheques);
            }
            Err(e) => log::error!(target: "desk", "Error loading cheques: {}", e),
        }
    }

    pub async fn reload_all(&self) {
        self.reload_invoices().await;
        self.reload_cheques().await;
    }

    /// Drop a line item from the draft, alerting when it is the last one
    pub fn remove_invoice_item(&self, form: &mut InvoiceForm, index: usize) -> bool {
        match form.remove_item(index) {
            Ok(()) => true,
            Err(e) => {
                self.ui.alert(&e.to_string());
                false
            }
        }
    }

    /// Create or update the drafted invoice. Returns true once saved.
    pub async fn submit_invoice(&self, form: &InvoiceForm) -> bool {
        if let Err(e) = form.validate() {
            self.ui.alert(&e.to_string());
            return false;
        }

        let invoice = form.to_invoice();
        let (result, done) = match form.modal.edit_key() {
            Some(number) => (
                self.api.update_invoice(number, &invoice).await,
                "Invoice updated successfully!",
            ),
            None => (self.api.create_invoice(&invoice).await, "Invoice added successfully!"),
        };

        match result {
            Ok(()) => {
                self.ui.alert(done);
                self.ui.close_invoice_form();
                self.reload_invoices().await;
                true
            }
            Err(e) => {
                log::error!(target: "desk", "Saving invoice {} failed: {}", invoice.invoice_number, e);
                self.ui.alert(&e.user_message("Error saving invoice"));
                false
            }
        }
    }

    /// Create or update the drafted cheque. Returns true once saved.
    pub async fn submit_cheque(&self, form: &ChequeForm) -> bool {
        if let Err(e) = form.validate() {
            self.ui.alert(&e.to_string());
            return false;
        }

        let cheque = form.to_cheque();
        let (result, done) = match form.modal.edit_key() {
            Some(id) => (
                self.api.update_cheque(id, &cheque).await,
                "Cheque updated successfully!",
            ),
            None => (self.api.create_cheque(&cheque).await, "Cheque added successfully!"),
        };

        match result {
            Ok(()) => {
                self.ui.alert(done);
                self.ui.close_cheque_form();
                self.reload_cheques().await;
                true
            }
            Err(e) => {
                log::error!(target: "desk", "Saving cheque {} failed: {}", cheque.cheque_number, e);
                self.ui.alert(&e.user_message("Error saving cheque"));
                false
            }
        }
    }

    /// Cheques reference invoice numbers, so both lists are reloaded.
    pub async fn delete_invoice(&self, invoice_number: &str) -> bool {
        if !self.ui.confirm("Are you sure you want to delete this invoice?") {
            return false;
        }
        match self.api.delete_invoice(invoice_number).await {
            Ok(()) => {
                self.ui.alert("Invoice deleted successfully!");
                self.reload_invoices().await;
                self.reload_cheques().await;
                true
            }
            Err(e) => {
                log::error!(target: "desk", "Deleting invoice {} failed: {}", invoice_number, e);
                self.ui.alert(&e.user_message("Error deleting invoice"));
                false
            }
        }
    }

    pub async fn delete_cheque(&self, id: &str) -> bool {
        if !self.ui.confirm("Are you sure you want to delete this cheque?") {
            return false;
        }
        match self.api.delete_cheque(id).await {
            Ok(()) => {
                self.ui.alert("Cheque deleted successfully!");
                self.reload_cheques().await;
                true
            }
            Err(e) => {
                log::error!(target: "desk", "Deleting cheque {} failed: {}", id, e);
                self.ui.alert(&e.user_message("Error deleting cheque"));
                false
            }
        }
    }
}
