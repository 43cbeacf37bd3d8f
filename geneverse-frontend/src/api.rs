use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::UiError;

fn ensure_ok(resp: Response) -> Result<Response, UiError> {
    if !resp.ok() {
        return Err(UiError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }
    Ok(resp)
}

/// GET `url` and decode the JSON body. Non-2xx statuses are errors.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, UiError> {
    let resp = ensure_ok(Request::get(url).send().await?)?;
    Ok(resp.json::<T>().await?)
}

/// POST `body` as JSON to `url` and decode the JSON reply.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, UiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = ensure_ok(Request::post(url).json(body)?.send().await?)?;
    Ok(resp.json::<T>().await?)
}
