//! `torn` section selections.

use serde::Deserialize;

use crate::error::TornError;
use crate::rest::TornClient;
use crate::rest::endpoints::{section, selection};
use crate::rest::request::ApiRequest;
use crate::rest::transport::Transport;
use crate::types::serde_helpers::number_or_string;

/// City bank interest rates by investment period, in percent.
#[derive(Debug, Clone, Deserialize)]
pub struct BankRates {
    #[serde(rename = "1w", deserialize_with = "number_or_string::deserialize")]
    pub one_week: f64,
    #[serde(rename = "2w", deserialize_with = "number_or_string::deserialize")]
    pub two_weeks: f64,
    #[serde(rename = "1m", deserialize_with = "number_or_string::deserialize")]
    pub one_month: f64,
    #[serde(rename = "2m", deserialize_with = "number_or_string::deserialize")]
    pub two_months: f64,
    #[serde(rename = "3m", deserialize_with = "number_or_string::deserialize")]
    pub three_months: f64,
}

#[derive(Debug, Deserialize)]
struct BankResponse {
    bank: BankRates,
}

impl<T: Transport> TornClient<T> {
    /// Get the current city bank interest rates.
    pub async fn get_bank_rates(&self) -> Result<BankRates, TornError> {
        let request = ApiRequest::new(section::TORN, "").selection(selection::BANK);
        let response: BankResponse = self.fetch(&request).await?;
        Ok(response.bank)
    }
}
