//! `property` section selections.

use serde::Deserialize;

use crate::error::TornError;
use crate::rest::TornClient;
use crate::rest::endpoints::{section, selection};
use crate::rest::request::ApiRequest;
use crate::rest::transport::Transport;

/// A player property.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub owner_id: u64,
    pub property_type: u32,
    /// Happiness the property grants.
    #[serde(default)]
    pub happy: i64,
    /// Daily upkeep cost.
    #[serde(default)]
    pub upkeep: i64,
    #[serde(default)]
    pub users_living: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default)]
    pub staff: Vec<String>,
    /// Rental agreement, if the property is rented out.
    #[serde(default)]
    pub rented: Option<Rental>,
}

/// Rental agreement on a property.
#[derive(Debug, Clone, Deserialize)]
pub struct Rental {
    pub user_id: u64,
    pub days_left: u32,
    pub cost_per_day: u64,
    pub total_cost: u64,
}

#[derive(Debug, Deserialize)]
struct PropertyResponse {
    property: Property,
}

impl<T: Transport> TornClient<T> {
    /// Get a property by id.
    pub async fn get_property(&self, id: u64) -> Result<Property, TornError> {
        let request =
            ApiRequest::new(section::PROPERTY, id.to_string()).selection(selection::PROPERTY);
        let response: PropertyResponse = self.fetch(&request).await?;
        Ok(response.property)
    }
}
