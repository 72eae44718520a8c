//! Cheque Modal Component
//!
//! Add/edit form for a cheque; the invoice is picked from the loaded list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_desk;
use crate::forms::{ChequeField, ChequeForm};
use crate::store::DeskStateStoreFields;

/// Input handler storing the raw value of `field`
fn field_input<E: JsCast + 'static>(form: RwSignal<ChequeForm>, field: ChequeField) -> impl FnMut(E) + 'static {
    move |ev: E| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
    }
}

/// Add/Edit Cheque modal, shown while the cheque form is open
#[component]
pub fn ChequeModal() -> impl IntoView {
    let desk = use_desk();
    let form = desk.cheque_form;
    let editing = move || form.with(|f| f.modal.is_editing());
    let amount = Memo::new(move |_| form.with(|f| f.cheque_amount));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        desk.submit_cheque();
    };

    view! {
        <Show when=move || form.with(|f| f.modal.is_open())>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{move || if editing() { "Edit Cheque" } else { "Add New Cheque" }}</h2>
                        <button class="close-btn" on:click=move |_| desk.close_cheque_form()>"×"</button>
                    </div>

                    <form class="modal-form" on:submit=on_submit>
                        <div class="field">
                            <label>"Invoice Number *"</label>
                            <select required=true on:change=field_input(form, ChequeField::InvoiceNumber)>
                                <option value="" prop:selected=move || form.with(|f| f.invoice_number.is_empty())>
                                    "-- Select Invoice --"
                                </option>
                                {move || desk.store.invoices().get().into_iter().map(|invoice| {
                                    let label = format!("{} - {}", invoice.invoice_number, invoice.company_name);
                                    let number = invoice.invoice_number.clone();
                                    let selected = move || form.with(|f| f.invoice_number == number);
                                    view! {
                                        <option value=invoice.invoice_number prop:selected=selected>{label}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="field">
                            <label>"Billing Date *"</label>
                            <input
                                type="date"
                                required=true
                                prop:value=move || form.with(|f| f.billing_date.clone())
                                on:input=field_input(form, ChequeField::BillingDate)
                            />
                        </div>

                        <div class="field">
                            <label>"Cheque Number *"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || form.with(|f| f.cheque_number.clone())
                                on:input=field_input(form, ChequeField::ChequeNumber)
                            />
                        </div>

                        <div class="field">
                            <label>"Cheque Date *"</label>
                            <input
                                type="date"
                                required=true
                                prop:value=move || form.with(|f| f.cheque_date.clone())
                                on:input=field_input(form, ChequeField::ChequeDate)
                            />
                        </div>

                        <div class="field">
                            <label>"Cheque Amount (Rs.) *"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                required=true
                                prop:value=move || amount.get().to_string()
                                on:input=field_input(form, ChequeField::Amount)
                            />
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| desk.close_cheque_form()>
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn cheque">
                                {move || if editing() { "Update Cheque" } else { "Add Cheque" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
