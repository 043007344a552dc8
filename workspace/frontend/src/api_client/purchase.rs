use storefront_common::{PurchaseList, PurchaseQuery};
use crate::api_client;

/// Fetch the signed-in customer's purchase history
pub async fn get_purchases(query: &PurchaseQuery) -> Result<PurchaseList, String> {
    log::trace!("Fetching purchases with {:?}", query);
    let result: Result<PurchaseList, String> =
        api_client::get_with_query("/purchase", query.to_pairs()).await;
    match &result {
        Ok(list) => log::info!("Fetched {} purchases", list.items.len()),
        Err(e) => log::error!("Failed to fetch purchases: {}", e),
    }
    result
}
