// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::HttpClient;

use super::model::RawEpisode;

/// Number of episodes requested per listing fetch
pub const EPISODES_PAGE_SIZE: usize = 12;

/// Typed client for the episodes REST API
#[derive(Clone)]
pub struct EpisodesApi<C> {
    client: C,
    base_url: Url,
}

impl<C: HttpClient> EpisodesApi<C> {
    /// Create an API client for the given base URL
    ///
    /// A base URL with a path component must end in `/`, otherwise the
    /// last path segment is replaced when endpoint paths are joined.
    pub fn new(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Fetch a page of episodes, ordered by publication date descending
    pub async fn list_episodes(&self, limit: usize) -> Result<Vec<RawEpisode>, ApiError> {
        let mut url = self.base_url.join("episodes")?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string())
            .append_pair("_sort", "published_at")
            .append_pair("_order", "desc");

        self.get_json(url).await
    }

    /// Fetch a single episode by its identifier
    ///
    /// An unknown identifier surfaces as an HTTP status error.
    pub async fn get_episode(&self, slug: &str) -> Result<RawEpisode, ApiError> {
        let url = self.base_url.join(&format!("episodes/{slug}"))?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url.as_str())
            .await
            .map_err(|e| ApiError::FetchFailed {
                url: url.to_string(),
                source: e,
            })?;

        if response.status >= 400 {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| ApiError::DecodeFailed {
            url: url.to_string(),
            source: e,
        })
    }
}
