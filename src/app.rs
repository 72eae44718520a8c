//! Cheque Desk App
//!
//! Root component: provides the desk context and renders the details view.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::components::ChequeDetails;
use crate::config::Config;
use crate::context::DeskContext;

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(DeskContext::new(HttpApi::new(config.api_base_url)));

    view! {
        <main class="app-layout">
            <ChequeDetails />
        </main>
    }
}
