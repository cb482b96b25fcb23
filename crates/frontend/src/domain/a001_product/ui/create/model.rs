use contracts::domain::a001_product::aggregate::{Product, ProductDraft};
use contracts::domain::common::RestCollection;

use crate::shared::rest::{RestClient, RestError, RestResponse};

/// POST the draft as-is to `/products`
///
/// Nothing is validated here; the server decides what a valid product is.
pub async fn create_product(
    client: &RestClient,
    draft: &ProductDraft,
) -> Result<RestResponse, RestError> {
    let response = client.post(&Product::collection_path(), draft).await?;
    log::info!("Product created: HTTP {} {}", response.status, response.body);
    Ok(response)
}
