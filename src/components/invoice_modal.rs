//! Invoice Modal Component
//!
//! Add/edit form with dynamic line items and a live total.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_desk;
use crate::format::money;
use crate::forms::{InvoiceForm, ItemField};

/// Input handler writing one field of the item at `index`
fn item_input<E: JsCast + 'static>(form: RwSignal<InvoiceForm>, index: usize, field: ItemField) -> impl FnMut(E) + 'static {
    move |ev: E| {
        let value = event_target_value(&ev);
        form.update(|f| f.update_item(index, field, &value));
    }
}

/// One editable line item row, keyed by position
#[component]
fn ItemRow(index: usize) -> impl IntoView {
    let desk = use_desk();
    let form = desk.invoice_form;

    let name = Memo::new(move |_| {
        form.with(|f| f.items().get(index).map(|i| i.item_name.clone()).unwrap_or_default())
    });
    // Memos: an input is only rewritten when its parsed value changes
    let quantity = Memo::new(move |_| form.with(|f| f.items().get(index).map_or(0.0, |i| i.quantity)));
    let price = Memo::new(move |_| form.with(|f| f.items().get(index).map_or(0.0, |i| i.price_per_item)));

    view! {
        <div class="item-row">
            <input
                type="text"
                class="item-name"
                placeholder="Item Name"
                required=true
                prop:value=move || name.get()
                on:input=item_input(form, index, ItemField::Name)
            />
            <input
                type="number"
                class="item-qty"
                placeholder="Qty"
                min="1"
                required=true
                prop:value=move || quantity.get().to_string()
                on:input=item_input(form, index, ItemField::Quantity)
            />
            <input
                type="number"
                class="item-price"
                placeholder="Price"
                step="0.01"
                min="0"
                required=true
                prop:value=move || price.get().to_string()
                on:input=item_input(form, index, ItemField::PricePerItem)
            />
            <div class="item-subtotal">
                <span>{move || money(quantity.get() * price.get())}</span>
                <Show when=move || form.with(|f| f.items().len() > 1)>
                    <button type="button" class="remove-btn" on:click=move |_| desk.remove_invoice_item(index)>
                        "×"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Add/Edit Invoice modal, shown while the invoice form is open
#[component]
pub fn InvoiceModal() -> impl IntoView {
    let desk = use_desk();
    let form = desk.invoice_form;
    let editing = move || form.with(|f| f.modal.is_editing());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        desk.submit_invoice();
    };

    view! {
        <Show when=move || form.with(|f| f.modal.is_open())>
            <div class="modal-backdrop">
                <div class="modal wide">
                    <div class="modal-header">
                        <h2>{move || if editing() { "Edit Invoice" } else { "Add New Invoice" }}</h2>
                        <button class="close-btn" on:click=move |_| desk.close_invoice_form()>"×"</button>
                    </div>

                    <form class="modal-form" on:submit=on_submit>
                        <div class="field-grid">
                            <div class="field">
                                <label>"Invoice Number *"</label>
                                <input
                                    type="text"
                                    placeholder="Enter invoice number (e.g., INV-001)"
                                    required=true
                                    prop:disabled=editing
                                    prop:value=move || form.with(|f| f.invoice_number().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.set_invoice_number(value));
                                    }
                                />
                                <Show when=editing>
                                    <p class="hint">"Invoice number cannot be changed"</p>
                                </Show>
                            </div>

                            <div class="field">
                                <label>"Bill Date *"</label>
                                <input
                                    type="date"
                                    required=true
                                    prop:value=move || form.with(|f| f.bill_date.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.bill_date = value);
                                    }
                                />
                            </div>
                        </div>

                        <div class="field">
                            <label>"Company Name *"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || form.with(|f| f.company_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.company_name = value);
                                }
                            />
                        </div>

                        <div class="field">
                            <div class="items-header">
                                <label>"Items"</label>
                                <button type="button" class="small-btn" on:click=move |_| form.update(|f| f.add_item())>
                                    "+ Add Item"
                                </button>
                            </div>
                            <div class="item-list">
                                <For
                                    each=move || 0..form.with(|f| f.items().len())
                                    key=|index| *index
                                    children=move |index| view! { <ItemRow index=index /> }
                                />
                            </div>
                        </div>

                        <div class="total-box">
                            <span class="total-label">"Total Bill Amount:"</span>
                            <span class="total-value">{move || money(form.with(|f| f.total()))}</span>
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| desk.close_invoice_form()>
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn invoice">
                                {move || if editing() { "Update Invoice" } else { "Add Invoice" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
