//! Cheque Table Component

use leptos::prelude::*;

use crate::context::use_desk;
use crate::format::{display_date, money};
use crate::models::Cheque;
use crate::store::DeskStateStoreFields;

/// Server id, or the cheque number for a cheque loaded without one
fn row_key(cheque: &Cheque) -> String {
    cheque
        .id
        .clone()
        .unwrap_or_else(|| cheque.cheque_number.clone())
}

/// Cheque Details panel
#[component]
pub fn ChequeTable() -> impl IntoView {
    let desk = use_desk();

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Cheque Details"</h2>
                <button class="add-btn cheque" on:click=move |_| desk.open_cheque_create()>
                    "+ Add Cheque"
                </button>
            </div>

            <div class="table-scroll">
                <table class="desk-table">
                    <thead>
                        <tr>
                            <th>"Billing Date"</th>
                            <th>"Invoice Number"</th>
                            <th>"Cheque Number"</th>
                            <th>"Cheque Date"</th>
                            <th class="num">"Cheque Amount"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || desk.store.cheques().get()
                            key=row_key
                            children=move |cheque| view! { <ChequeRow row=row_key(&cheque)/> }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || desk.store.cheques().with(|list| list.is_empty())>
                <div class="empty-state">"No cheques found"</div>
            </Show>
        </section>
    }
}

#[component]
fn ChequeRow(row: String) -> impl IntoView {
    let desk = use_desk();
    let cheque = Memo::new(move |_| {
        desk.store
            .cheques()
            .with(|list| list.iter().find(|c| row_key(c) == row).cloned())
    });
    let cell = move |f: fn(&Cheque) -> String| {
        move || cheque.with(|c| c.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <tr>
            <td>{cell(|c| display_date(&c.billing_date))}</td>
            <td><span class="badge">{cell(|c| c.invoice_number.clone())}</span></td>
            <td class="strong">{cell(|c| c.cheque_number.clone())}</td>
            <td>{cell(|c| display_date(&c.cheque_date))}</td>
            <td class="num strong">{cell(|c| money(c.cheque_amount))}</td>
            <td>
                <div class="row-actions">
                    <button
                        class="link-btn"
                        on:click=move |_| {
                            if let Some(current) = cheque.get_untracked() {
                                desk.open_cheque_edit(&current);
                            }
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="link-btn danger"
                        on:click=move |_| {
                            let id = cheque.with_untracked(|c| c.as_ref().and_then(|c| c.id.clone()));
                            desk.delete_cheque(id.unwrap_or_default());
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
