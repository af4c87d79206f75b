//! `user` section selections.

mod types;

pub use types::*;

use crate::error::TornError;
use crate::rest::TornClient;
use crate::rest::endpoints::{section, selection};
use crate::rest::request::{ApiRequest, optional_id};
use crate::rest::transport::Transport;

impl<T: Transport> TornClient<T> {
    /// Get a player's name, level and status.
    ///
    /// `None` returns the key owner.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use torn_api_client::rest::TornClient;
    /// use torn_api_client::types::AccessLevel;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TornClient::from_env(AccessLevel::Public)?;
    ///     let me = client.get_user_basic(None).await?;
    ///     println!("{} [{}] is {}", me.name, me.player_id, me.status.description);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_user_basic(&self, id: Option<u64>) -> Result<UserBasic, TornError> {
        self.fetch(&user_request(id, selection::BASIC)).await
    }

    /// Get a player's energy, nerve, happy and life bars.
    pub async fn get_user_bars(&self, id: Option<u64>) -> Result<UserBars, TornError> {
        self.fetch(&user_request(id, selection::BARS)).await
    }

    /// Get a player's money. Requires a limited or full key.
    pub async fn get_user_money(&self, id: Option<u64>) -> Result<UserMoney, TornError> {
        self.fetch(&user_request(id, selection::MONEY)).await
    }

    /// Get a player's ammunition.
    pub async fn get_user_ammo(&self, id: Option<u64>) -> Result<Vec<AmmoItem>, TornError> {
        let response: AmmoResponse = self.fetch(&user_request(id, selection::AMMO)).await?;
        Ok(response.ammo.unwrap_or_default())
    }
}

fn user_request(id: Option<u64>, selection: &str) -> ApiRequest {
    ApiRequest::new(section::USER, optional_id(id)).selection(selection)
}
