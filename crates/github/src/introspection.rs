//! Schema introspection of live GraphQL endpoints.

use cynic::{QueryBuilder, http::ReqwestExt};
use cynic_introspection::IntrospectionQuery;
use inspector_core::{Error, Result};
use tracing::debug;

/// Run the standard introspection query against `url` and print the result as SDL.
///
/// # Errors
///
/// Returns a load error when the request fails, the endpoint answers with
/// GraphQL errors, or the introspection result is not a valid schema.
pub async fn introspect(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "Introspecting endpoint");

    let response = client
        .post(url)
        .run_graphql(IntrospectionQuery::build(()))
        .await
        .map_err(|e| Error::load(format!("Failed to introspect '{url}': {e}")))?;

    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::load(format!(
            "Endpoint '{url}' returned errors: {}",
            messages.join("; ")
        )));
    }

    let data = response
        .data
        .ok_or_else(|| Error::load(format!("Endpoint '{url}' returned no introspection data")))?;

    let schema = data
        .into_schema()
        .map_err(|e| Error::load(format!("Invalid introspection result from '{url}': {e}")))?;

    Ok(schema.to_sdl())
}
