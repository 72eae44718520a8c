//! Invoice Table Component
//!
//! Invoice list with per-row edit/delete actions.

use leptos::prelude::*;

use crate::context::use_desk;
use crate::format::{display_date, line_summary, money};
use crate::models::Invoice;
use crate::store::DeskStateStoreFields;

/// Invoice Details panel
#[component]
pub fn InvoiceTable() -> impl IntoView {
    let desk = use_desk();

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Invoice Details"</h2>
                <button class="add-btn invoice" on:click=move |_| desk.open_invoice_create()>
                    "+ Add Invoice"
                </button>
            </div>

            <div class="table-scroll">
                <table class="desk-table">
                    <thead>
                        <tr>
                            <th>"Bill Date"</th>
                            <th>"Company Name"</th>
                            <th>"Invoice Number"</th>
                            <th>"Items"</th>
                            <th class="num">"Bill Amount"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || desk.store.invoices().get()
                            key=|invoice| invoice.invoice_number.clone()
                            children=move |invoice| view! { <InvoiceRow number=invoice.invoice_number/> }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || desk.store.invoices().with(|list| list.is_empty())>
                <div class="empty-state">"No invoices found"</div>
            </Show>
        </section>
    }
}

/// Row for the invoice with this number, kept in step with the store so an
/// edit refreshes the cells without recreating the row
#[component]
fn InvoiceRow(number: String) -> impl IntoView {
    let desk = use_desk();
    let key = number.clone();
    let badge = number.clone();
    let invoice = Memo::new(move |_| {
        desk.store
            .invoices()
            .with(|list| list.iter().find(|i| i.invoice_number == key).cloned())
    });
    let cell = move |f: fn(&Invoice) -> String| {
        move || invoice.with(|i| i.as_ref().map(f).unwrap_or_default())
    };
    let lines = move || {
        invoice
            .with(|i| {
                i.as_ref()
                    .map(|i| i.items.iter().map(line_summary).collect::<Vec<_>>())
                    .unwrap_or_default()
            })
            .into_iter()
            .map(|line| view! { <div>{line}</div> })
            .collect_view()
    };

    view! {
        <tr>
            <td>{cell(|i| display_date(&i.bill_date))}</td>
            <td class="strong">{cell(|i| i.company_name.clone())}</td>
            <td><span class="badge">{badge}</span></td>
            <td><div class="item-lines">{lines}</div></td>
            <td class="num strong">{cell(|i| money(i.bill_amount))}</td>
            <td>
                <div class="row-actions">
                    <button
                        class="link-btn"
                        on:click=move |_| {
                            if let Some(current) = invoice.get_untracked() {
                                desk.open_invoice_edit(&current);
                            }
                        }
                    >
                        "Edit"
                    </button>
                    <button class="link-btn danger" on:click=move |_| desk.delete_invoice(number.clone())>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
