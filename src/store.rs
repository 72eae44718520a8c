//! Desk State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Both lists are
//! replaced wholesale after every reload.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Cheque, Invoice};

/// Lists shown by the desk, as last loaded from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct DeskState {
    /// All invoices
    pub invoices: Vec<Invoice>,
    /// All cheques
    pub cheques: Vec<Cheque>,
}

/// Type alias for the store
pub type DeskStore = Store<DeskState>;

/// Replace the invoice list
pub fn store_set_invoices(store: &DeskStore, invoices: Vec<Invoice>) {
    *store.invoices().write() = invoices;
}

/// Replace the cheque list
pub fn store_set_cheques(store: &DeskStore, cheques: Vec<Cheque>) {
    *store.cheques().write() = cheques;
}
