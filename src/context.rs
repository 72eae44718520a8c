//! Application Context
//!
//! Desk state and workflows provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::desk::{Desk, DeskUi};
use crate::format::date_from_millis;
use crate::forms::{ChequeForm, InvoiceForm};
use crate::models::{Cheque, Invoice};
use crate::store::{store_set_cheques, store_set_invoices, DeskState, DeskStore};

/// Browser side of the desk: reactive state plus window dialogs
#[derive(Clone, Copy)]
pub struct BrowserUi {
    store: DeskStore,
    invoice_form: RwSignal<InvoiceForm>,
    cheque_form: RwSignal<ChequeForm>,
}

impl DeskUi for BrowserUi {
    fn show_invoices(&self, invoices: Vec<Invoice>) {
        store_set_invoices(&self.store, invoices);
    }

    fn show_cheques(&self, cheques: Vec<Cheque>) {
        store_set_cheques(&self.store, cheques);
    }

    fn close_invoice_form(&self) {
        self.invoice_form.update(|f| f.close());
    }

    fn close_cheque_form(&self) {
        self.cheque_form.update(|f| f.close());
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

type BrowserDesk = Desk<HttpApi, BrowserUi>;

/// App-wide desk handle provided via context
#[derive(Clone, Copy)]
pub struct DeskContext {
    /// Loaded invoices and cheques
    pub store: DeskStore,
    /// Invoice modal draft
    pub invoice_form: RwSignal<InvoiceForm>,
    /// Cheque modal draft
    pub cheque_form: RwSignal<ChequeForm>,
    ui: BrowserUi,
    desk: StoredValue<BrowserDesk>,
}

impl DeskContext {
    pub fn new(api: HttpApi) -> Self {
        let store = Store::new(DeskState::default());
        let invoice_form = RwSignal::new(InvoiceForm::default());
        let cheque_form = RwSignal::new(ChequeForm::default());
        let ui = BrowserUi { store, invoice_form, cheque_form };
        Self {
            store,
            invoice_form,
            cheque_form,
            ui,
            desk: StoredValue::new(Desk::new(api, ui)),
        }
    }

    /// Run a workflow on the UI thread
    fn run<F, Fut>(&self, workflow: F)
    where
        F: FnOnce(BrowserDesk) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let desk = self.desk.get_value();
        spawn_local(workflow(desk));
    }

    pub fn reload_all(&self) {
        self.run(|desk| async move { desk.reload_all().await });
    }

    // ========================
    // Invoice actions
    // ========================

    pub fn open_invoice_create(&self) {
        let today = today();
        self.invoice_form.update(|f| f.open_create(&today));
    }

    pub fn open_invoice_edit(&self, invoice: &Invoice) {
        self.invoice_form.update(|f| f.open_edit(invoice));
    }

    pub fn close_invoice_form(&self) {
        self.ui.close_invoice_form();
    }

    pub fn remove_invoice_item(&self, index: usize) {
        let mut form = self.invoice_form.get_untracked();
        if self.desk.with_value(|desk| desk.remove_invoice_item(&mut form, index)) {
            self.invoice_form.set(form);
        }
    }

    pub fn submit_invoice(&self) {
        let form = self.invoice_form.get_untracked();
        self.run(|desk| async move {
            desk.submit_invoice(&form).await;
        });
    }

    pub fn delete_invoice(&self, invoice_number: String) {
        self.run(|desk| async move {
            desk.delete_invoice(&invoice_number).await;
        });
    }

    // ========================
    // Cheque actions
    // ========================

    pub fn open_cheque_create(&self) {
        let today = today();
        self.cheque_form.update(|f| f.open_create(&today));
    }

    pub fn open_cheque_edit(&self, cheque: &Cheque) {
        self.cheque_form.update(|f| f.open_edit(cheque));
    }

    pub fn close_cheque_form(&self) {
        self.ui.close_cheque_form();
    }

    pub fn submit_cheque(&self) {
        let form = self.cheque_form.get_untracked();
        self.run(|desk| async move {
            desk.submit_cheque(&form).await;
        });
    }

    pub fn delete_cheque(&self, id: String) {
        self.run(|desk| async move {
            desk.delete_cheque(&id).await;
        });
    }
}

/// Get the desk from context
pub fn use_desk() -> DeskContext {
    expect_context::<DeskContext>()
}

/// Today's date (UTC) in `YYYY-MM-DD`
fn today() -> String {
    date_from_millis(js_sys::Date::now()).unwrap_or_default()
}
