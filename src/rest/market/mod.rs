//! `market` section selections.

mod types;

pub use types::*;

use crate::error::TornError;
use crate::rest::TornClient;
use crate::rest::endpoints::{section, selection};
use crate::rest::request::ApiRequest;
use crate::rest::transport::Transport;

impl<T: Transport> TornClient<T> {
    /// Get bazaar listings for an item, cheapest first.
    pub async fn get_bazaar(&self, item_id: u64) -> Result<Vec<Listing>, TornError> {
        let request =
            ApiRequest::new(section::MARKET, item_id.to_string()).selection(selection::BAZAAR);
        let response: BazaarResponse = self.fetch(&request).await?;
        Ok(response.bazaar.unwrap_or_default())
    }

    /// Get item market listings for an item, cheapest first.
    pub async fn get_item_market(&self, item_id: u64) -> Result<Vec<Listing>, TornError> {
        let request = ApiRequest::new(section::MARKET, item_id.to_string())
            .selection(selection::ITEM_MARKET);
        let response: ItemMarketResponse = self.fetch(&request).await?;
        Ok(response.itemmarket.unwrap_or_default())
    }

    /// Get all points market listings.
    pub async fn get_points_market(&self) -> Result<PointsMarket, TornError> {
        let request = ApiRequest::new(section::MARKET, "").selection(selection::POINTS_MARKET);
        let response: PointsMarketResponse = self.fetch(&request).await?;
        Ok(response.pointsmarket.unwrap_or_default())
    }
}
