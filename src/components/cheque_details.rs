//! Cheque Details Component
//!
//! Invoice and cheque tables plus their modals; loads both lists on mount.

use leptos::prelude::*;

use crate::context::use_desk;
use crate::components::{ChequeModal, ChequeTable, InvoiceModal, InvoiceTable};

#[component]
pub fn ChequeDetails() -> impl IntoView {
    let desk = use_desk();

    // Load both lists on mount
    Effect::new(move |_| desk.reload_all());

    view! {
        <div class="cheque-details">
            <InvoiceTable />
            <ChequeTable />
            <InvoiceModal />
            <ChequeModal />
        </div>
    }
}
