use crate::error::ProxyError;

/// Fixed resource path requested on the upstream host.
pub const PETS_PATH: &str = "/pets";

/// Issues a single GET for `/pets` and returns the complete response body.
///
/// The body is returned verbatim as bytes. The upstream status code is not
/// inspected, so a non-2xx body is relayed exactly like a 2xx body.
pub async fn fetch_pets(base_url: &str) -> Result<Vec<u8>, ProxyError> {
    let url = pets_url(base_url);

    let response = reqwest::get(url).await?;
    let body = response.bytes().await?;

    Ok(body.to_vec())
}

fn pets_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PETS_PATH)
}
