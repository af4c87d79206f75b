//! Types for `market` selections.

use std::collections::HashMap;

use serde::Deserialize;

/// One bazaar or item market listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    /// Price per item.
    pub cost: u64,
    /// Items available at this price.
    pub quantity: u64,
}

/// One points market listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsListing {
    /// Price per point.
    pub cost: u64,
    /// Points on offer.
    pub quantity: u64,
    /// Price for the whole listing.
    pub total_cost: u64,
}

/// Points market listings keyed by listing id.
pub type PointsMarket = HashMap<String, PointsListing>;

// Torn sends `null` instead of an empty list when nothing is listed.
#[derive(Debug, Deserialize)]
pub(crate) struct BazaarResponse {
    #[serde(default)]
    pub bazaar: Option<Vec<Listing>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemMarketResponse {
    #[serde(default)]
    pub itemmarket: Option<Vec<Listing>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointsMarketResponse {
    #[serde(default)]
    pub pointsmarket: Option<PointsMarket>,
}
