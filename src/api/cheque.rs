//! Cheque Endpoints

use crate::error::ApiResult;
use crate::models::Cheque;

use super::http::{fetch_json, send, HttpApi};

const CHEQUES: &str = "cheques";

pub async fn list(api: &HttpApi) -> ApiResult<Vec<Cheque>> {
    let url = api.url(CHEQUES, None);
    log::debug!(target: "api", "GET {}", url);
    fetch_json(api.client().get(url)).await
}

pub async fn create(api: &HttpApi, cheque: &Cheque) -> ApiResult<()> {
    let url = api.url(CHEQUES, None);
    log::debug!(target: "api", "POST {}", url);
    send(api.client().post(url).json(cheque)).await.map(|_| ())
}

pub async fn update(api: &HttpApi, id: &str, cheque: &Cheque) -> ApiResult<()> {
    let url = api.url(CHEQUES, Some(id));
    log::debug!(target: "api", "PUT {}", url);
    send(api.client().put(url).json(cheque)).await.map(|_| ())
}

pub async fn delete(api: &HttpApi, id: &str) -> ApiResult<()> {
    let url = api.url(CHEQUES, Some(id));
    log::debug!(target: "api", "DELETE {}", url);
    send(api.client().delete(url)).await.map(|_| ())
}
