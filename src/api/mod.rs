//! Backend API
//!
//! The remote invoice/cheque service, organized by domain.

mod http;
mod invoice;
mod cheque;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Cheque, Invoice};

pub use http::HttpApi;

/// Operations the desk needs from the backend.
///
/// `?Send` because browser futures stay on the UI thread.
#[async_trait(?Send)]
pub trait DeskApi {
    async fn list_invoices(&self) -> ApiResult<Vec<Invoice>>;
    async fn create_invoice(&self, invoice: &Invoice) -> ApiResult<()>;
    async fn update_invoice(&self, invoice_number: &str, invoice: &Invoice) -> ApiResult<()>;
    async fn delete_invoice(&self, invoice_number: &str) -> ApiResult<()>;

    async fn list_cheques(&self) -> ApiResult<Vec<Cheque>>;
    async fn create_cheque(&self, cheque: &Cheque) -> ApiResult<()>;
    async fn update_cheque(&self, id: &str, cheque: &Cheque) -> ApiResult<()>;
    async fn delete_cheque(&self, id: &str) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl DeskApi for HttpApi {
    async fn list_invoices(&self) -> ApiResult<Vec<Invoice>> {
        invoice::list(self).await
    }

    async fn create_invoice(&self, invoice: &Invoice) -> ApiResult<()> {
        invoice::create(self, invoice).await
    }

    async fn update_invoice(&self, invoice_number: &str, invoice: &Invoice) -> ApiResult<()> {
        invoice::update(self, invoice_number, invoice).await
    }

    async fn delete_invoice(&self, invoice_number: &str) -> ApiResult<()> {
        invoice::delete(self, invoice_number).await
    }

    async fn list_cheques(&self) -> ApiResult<Vec<Cheque>> {
        cheque::list(self).await
    }

    async fn create_cheque(&self, cheque: &Cheque) -> ApiResult<()> {
        cheque::create(self, cheque).await
    }

    async fn update_cheque(&self, id: &str, cheque: &Cheque) -> ApiResult<()> {
        cheque::update(self, id, cheque).await
    }

    async fn delete_cheque(&self, id: &str) -> ApiResult<()> {
        cheque::delete(self, id).await
    }
}
