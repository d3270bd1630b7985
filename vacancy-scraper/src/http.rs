use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::{Error, Result};

const USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

pub(crate) fn client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Send the request and decode a JSON body, any non-2xx status is an error
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T> {
    let resp = request.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "request to {} failed with status {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    let body: T = resp.json().await?;
    Ok(body)
}
