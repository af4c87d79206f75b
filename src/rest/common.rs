//! Selections every section supports.

use crate::error::TornError;
use crate::rest::TornClient;
use crate::rest::endpoints::selection;
use crate::rest::request::ApiRequest;
use crate::rest::transport::Transport;
use crate::types::{Lookup, Timestamp};

impl<T: Transport> TornClient<T> {
    /// List the selections a section supports.
    pub async fn get_lookup(&self, section: &str) -> Result<Lookup, TornError> {
        let request = ApiRequest::new(section, "").selection(selection::LOOKUP);
        self.fetch(&request).await
    }

    /// Get the server time through a section.
    pub async fn get_timestamp(&self, section: &str, id: &str) -> Result<Timestamp, TornError> {
        let request = ApiRequest::new(section, id).selection(selection::TIMESTAMP);
        self.fetch(&request).await
    }
}
