//! Request descriptor for a single API call.

use std::collections::BTreeMap;

use url::{Url, form_urlencoded};

use crate::config::ApiKey;
use crate::error::TornError;

/// Identifies one outbound call: section, id, selections and extra parameters.
///
/// Parameters are kept sorted by name, so two requests built with the same
/// parameters in a different order are equal and share a cache key.
///
/// # Example
///
/// ```rust
/// use torn_api_client::rest::ApiRequest;
///
/// let a = ApiRequest::new("user", "")
///     .selection("basic,attacks")
///     .param("from", "100")
///     .param("to", "200");
/// let b = ApiRequest::new("user", "")
///     .selections(["basic", "attacks"])
///     .param("to", "200")
///     .param("from", "100");
///
/// assert_eq!(a.cache_key(), b.cache_key());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ApiRequest {
    section: String,
    id: String,
    selections: Vec<String>,
    parameters: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Create a request for a section and id. An empty id targets the key owner.
    pub fn new(section: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a selection, or several already joined with commas.
    pub fn selection(mut self, selection: impl Into<String>) -> Self {
        let selection = selection.into();
        if !selection.is_empty() {
            self.selections.push(selection);
        }
        self
    }

    /// Add several selections.
    pub fn selections<I, S>(mut self, selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for selection in selections {
            self = self.selection(selection);
        }
        self
    }

    /// Add an extra query parameter, replacing any previous value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add several extra query parameters.
    pub fn params<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// API section.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Target id, possibly empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Selections joined with commas, as sent on the wire.
    pub fn selections_csv(&self) -> String {
        self.selections.join(",")
    }

    /// Extra parameters, sorted by name.
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Canonical cache key for this request.
    ///
    /// Path parts and query pairs are percent-encoded the same way as in the
    /// request URL, so distinct requests never share a key. Does not include the
    /// API key, so it is safe to log.
    pub fn cache_key(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("selections", &self.selections_csv());
        for (name, value) in &self.parameters {
            query.append_pair(name, value);
        }
        format!(
            "{}/{}?{}",
            encode_segment(&self.section),
            encode_segment(&self.id),
            query.finish()
        )
    }

    /// Build the request URL: `{base}/{section}/{id}?key=..&selections=..&..`.
    pub(crate) fn url(&self, base_url: &Url, api_key: &ApiKey) -> Result<Url, TornError> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TornError::Config(format!("cannot use {base_url} as a base URL")))?
            .pop_if_empty()
            .push(&self.section)
            .push(&self.id);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", api_key.expose_secret());
            let selections = self.selections_csv();
            if !selections.is_empty() {
                query.append_pair("selections", &selections);
            }
            for (name, value) in &self.parameters {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

/// Path id for an optional entity id. `None` targets the key owner.
pub(crate) fn optional_id(id: Option<u64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
