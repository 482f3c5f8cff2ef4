use lambda_http::{tracing, Body, Error, Request, Response};

use crate::{config::Config, upstream};

/// Relays the upstream pet inventory to the invoker.
///
/// The invocation event and its context are opaque to this function. Each
/// invocation performs exactly one outbound GET and returns the raw response
/// body; any failure propagates to the runtime as an invocation fault.
pub async fn function_handler(_event: Request) -> Result<Response<Body>, Error> {
    let config = Config::from_env()?;

    tracing::info!("relaying GET {} from {}", upstream::PETS_PATH, config.endpoint);

    let body = upstream::fetch_pets(&config.base_url()).await?;

    let response = Response::builder().status(200).body(Body::from(body))?;

    Ok(response)
}
