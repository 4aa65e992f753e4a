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

/// How long a generated home page stays fresh (8 hours)
pub const HOME_REVALIDATE_SECS: u64 = 60 * 60 * 8;

/// Number of episodes shown in the "latest releases" section
pub const LATEST_EPISODES_COUNT: usize = 2;

/// Props for the home page: the newest episodes, then the rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    pub latest_episodes: Vec<EpisodeView>,
    pub all_episodes: Vec<EpisodeView>,
}

/// Generate the home page from the most recent episodes
///
/// Fetches one page of episodes (newest first), normalizes every record
/// and splits the result into the "latest" teaser section and the full
/// listing, preserving API order in both. Any fetch or normalization
/// failure aborts the whole page; no partial output is produced.
pub async fn build_home_page<C: HttpClient>(
    api: &EpisodesApi<C>,
    now: DateTime<Utc>,
    reporter: &SharedBuildReporter,
) -> Result<PageArtifact<HomeProps>, BuildError> {
    reporter.report(BuildEvent::FetchingEpisodes {
        limit: EPISODES_PAGE_SIZE,
    });

    let records = api.list_episodes(EPISODES_PAGE_SIZE).await?;

    let mut episodes = Vec::with_capacity(records.len());
    for record in &records {
        episodes.push(normalize_episode(record)?);
    }

    let split = episodes.len().min(LATEST_EPISODES_COUNT);
    let all_episodes = episodes.split_off(split);
    let latest_episodes = episodes;

    reporter.report(BuildEvent::PageGenerated {
        route: "/".to_string(),
    });

    Ok(PageArtifact::new(
        HomeProps {
            latest_episodes,
            all_episodes,
        },
        now,
        HOME_REVALIDATE_SECS,
    ))
}
