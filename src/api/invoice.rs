//! Invoice Endpoints

use crate::error::ApiResult;
use crate::models::Invoice;

use super::http::{fetch_json, send, HttpApi};

const INVOICES: &str = "invoices";

pub async fn list(api: &HttpApi) -> ApiResult<Vec<Invoice>> {
    let url = api.url(INVOICES, None);
    log::debug!(target: "api", "GET {}", url);
    fetch_json(api.client().get(url)).await
}

pub async fn create(api: &HttpApi, invoice: &Invoice) -> ApiResult<()> {
    let url = api.url(INVOICES, None);
    log::debug!(target: "api", "POST {}", url);
    send(api.client().post(url).json(invoice)).await.map(|_| ())
}

pub async fn update(api: &HttpApi, invoice_number: &str, invoice: &Invoice) -> ApiResult<()> {
    let url = api.url(INVOICES, Some(invoice_number));
    log::debug!(target: "api", "PUT {}", url);
    send(api.client().put(url).json(invoice)).await.map(|_| ())
}

pub async fn delete(api: &HttpApi, invoice_number: &str) -> ApiResult<()> {
    let url = api.url(INVOICES, Some(invoice_number));
    log::debug!(target: "api", "DELETE {}", url);
    send(api.client().delete(url)).await.map(|_| ())
}
