// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{EPISODES_PAGE_SIZE, EpisodesApi};
use crate::episode::{EpisodeView, normalize_episode};
use crate::error::BuildError;
use crate::http::HttpClient;
use crate::report::{BuildEvent, SharedBuildReporter};

use super::artifact::PageArtifact;

/// How long a generated episode page stays fresh (24 hours)
pub const EPISODE_REVALIDATE_SECS: u64 = 60 * 60 * 24;

/// Fallback behavior for episode routes that were not pre-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Unknown routes answer with a not-found response
    NotFound,
    /// Unknown routes are generated on the server while the request
    /// waits, then cached like any pre-rendered route
    Blocking,
}

/// The set of episode routes to pre-render, plus the fallback policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPaths {
    pub slugs: Vec<String>,
    pub fallback: FallbackPolicy,
}

/// Props for a single episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeProps {
    pub episode: EpisodeView,
}

/// Enumerate the episode routes to pre-render at build time
///
/// Only the most recently published episodes get a static page up
/// front; older identifiers are served through the blocking fallback.
pub async fn enumerate_episode_paths<C: HttpClient>(
    api: &EpisodesApi<C>,
) -> Result<StaticPaths, BuildError> {
    let records = api.list_episodes(EPISODES_PAGE_SIZE).await?;

    Ok(StaticPaths {
        slugs: records.into_iter().map(|episode| episode.id).collect(),
        fallback: FallbackPolicy::Blocking,
    })
}

/// Generate the page for a single episode slug
///
/// Runs at build time for declared slugs and on first request for
/// blocking-fallback slugs. Fetch or normalization failure aborts this
/// slug's generation.
pub async fn build_episode_page<C: HttpClient>(
    api: &EpisodesApi<C>,
    slug: &str,
    now: DateTime<Utc>,
    reporter: &SharedBuildReporter,
) -> Result<PageArtifact<EpisodeProps>, BuildError> {
    reporter.report(BuildEvent::FetchingEpisode {
        slug: slug.to_string(),
    });

    let record = api.get_episode(slug).await?;
    let episode = normalize_episode(&record)?;

    reporter.report(BuildEvent::PageGenerated {
        route: format!("/episodes/{slug}"),
    });

    Ok(PageArtifact::new(
        EpisodeProps { episode },
        now,
        EPISODE_REVALIDATE_SECS,
    ))
}
