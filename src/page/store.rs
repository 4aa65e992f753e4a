// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::api::EpisodesApi;
use crate::error::BuildError;
use crate::http::HttpClient;
use crate::report::{BuildEvent, SharedBuildReporter};

use super::artifact::PageArtifact;
use super::detail::{EpisodeProps, StaticPaths, build_episode_page, enumerate_episode_paths};
use super::home::{HomeProps, build_home_page};

/// How a cached episode route came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    /// Rendered up front during the full site build
    Prebuilt,
    /// First request arrived and generation is in flight
    OnDemandPending,
    /// Generated on first request and cached since
    OnDemandCached,
}

struct CachedRoute {
    status: RouteStatus,
    /// None only while the first generation for this route is pending
    artifact: Option<PageArtifact<EpisodeProps>>,
}

/// Holds generated page artifacts and drives their regeneration
///
/// Implements the hosting contract around the page builders: pages stay
/// cached until their valid-until instant passes, stale pages keep
/// being served when a rebuild fails, and routes outside the
/// pre-rendered set are generated on demand while the first requester
/// waits (blocking fallback). Concurrent requests for the same unbuilt
/// route share a single in-flight generation.
pub struct PageStore<C> {
    api: EpisodesApi<C>,
    reporter: SharedBuildReporter,
    home: Mutex<Option<PageArtifact<HomeProps>>>,
    routes: Mutex<HashMap<String, CachedRoute>>,
    guards: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<C: HttpClient> PageStore<C> {
    pub fn new(api: EpisodesApi<C>, reporter: SharedBuildReporter) -> Self {
        Self {
            api,
            reporter,
            home: Mutex::new(None),
            routes: Mutex::new(HashMap::new()),
            guards: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-render the home page and every declared episode route
    ///
    /// Any failure aborts the whole build; previously cached artifacts
    /// are left untouched so a failed rebuild never unpublishes pages.
    pub async fn prebuild(&self, now: DateTime<Utc>) -> Result<StaticPaths, BuildError> {
        let home = build_home_page(&self.api, now, &self.reporter).await?;
        let paths = enumerate_episode_paths(&self.api).await?;

        let mut built = Vec::with_capacity(paths.slugs.len());
        for slug in &paths.slugs {
            let artifact = build_episode_page(&self.api, slug, now, &self.reporter).await?;
            built.push((slug.clone(), artifact));
        }

        *self.home.lock().await = Some(home);
        let mut routes = self.routes.lock().await;
        for (slug, artifact) in built {
            routes.insert(
                slug,
                CachedRoute {
                    status: RouteStatus::Prebuilt,
                    artifact: Some(artifact),
                },
            );
        }

        self.reporter.report(BuildEvent::SiteBuilt {
            prerendered_routes: paths.slugs.len(),
        });

        Ok(paths)
    }

    /// Serve the home page, regenerating it once it has gone stale
    pub async fn home_page(&self, now: DateTime<Utc>) -> Result<PageArtifact<HomeProps>, BuildError> {
        {
            let cached = self.home.lock().await;
            if let Some(page) = cached.as_ref()
                && !page.is_stale(now)
            {
                return Ok(page.clone());
            }
        }

        match build_home_page(&self.api, now, &self.reporter).await {
            Ok(page) => {
                *self.home.lock().await = Some(page.clone());
                Ok(page)
            }
            Err(e) => {
                let cached = self.home.lock().await;
                match cached.as_ref() {
                    Some(page) => {
                        self.reporter.report(BuildEvent::ServingStale {
                            route: "/".to_string(),
                            error: e.to_string(),
                        });
                        Ok(page.clone())
                    }
                    None => {
                        self.reporter.report(BuildEvent::GenerationFailed {
                            route: "/".to_string(),
                            error: e.to_string(),
                        });
                        Err(e)
                    }
                }
            }
        }
    }

    /// Serve an episode page, generating it on demand if needed
    ///
    /// The first request for an unbuilt route generates while holding
    /// the route's guard; concurrent followers wait on the guard and
    /// then hit the cache instead of fetching a second time.
    pub async fn episode_page(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<PageArtifact<EpisodeProps>, BuildError> {
        if let Some(page) = self.cached_fresh(slug, now).await {
            return Ok(page);
        }

        let guard = self.route_guard(slug).await;
        let _locked = guard.lock().await;

        // another request may have finished the build while we waited
        if let Some(page) = self.cached_fresh(slug, now).await {
            return Ok(page);
        }

        self.mark_pending(slug).await;
        let route = format!("/episodes/{slug}");

        match build_episode_page(&self.api, slug, now, &self.reporter).await {
            Ok(page) => {
                let mut routes = self.routes.lock().await;
                let status = match routes.get(slug).map(|r| r.status) {
                    Some(RouteStatus::Prebuilt) => RouteStatus::Prebuilt,
                    _ => RouteStatus::OnDemandCached,
                };
                routes.insert(
                    slug.to_string(),
                    CachedRoute {
                        status,
                        artifact: Some(page.clone()),
                    },
                );
                Ok(page)
            }
            Err(e) => {
                let mut routes = self.routes.lock().await;
                if let Some(page) = routes.get(slug).and_then(|r| r.artifact.clone()) {
                    self.reporter.report(BuildEvent::ServingStale {
                        route,
                        error: e.to_string(),
                    });
                    return Ok(page);
                }

                // first generation failed; the route stays not-generated
                routes.remove(slug);
                self.reporter.report(BuildEvent::GenerationFailed {
                    route,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// How the given route was generated, if it is known at all
    pub async fn route_status(&self, slug: &str) -> Option<RouteStatus> {
        self.routes.lock().await.get(slug).map(|r| r.status)
    }

    /// Whether an external trigger should regenerate the route now
    ///
    /// Routes that were never generated do not need revalidation; they
    /// are built on first request instead.
    pub async fn needs_revalidation(&self, slug: &str, now: DateTime<Utc>) -> bool {
        self.routes
            .lock()
            .await
            .get(slug)
            .and_then(|r| r.artifact.as_ref())
            .is_some_and(|page| page.is_stale(now))
    }

    async fn cached_fresh(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Option<PageArtifact<EpisodeProps>> {
        self.routes
            .lock()
            .await
            .get(slug)
            .and_then(|r| r.artifact.as_ref())
            .filter(|page| !page.is_stale(now))
            .cloned()
    }

    async fn route_guard(&self, slug: &str) -> Arc<Mutex<()>> {
        let mut guards = self.guards.lock().await;
        guards
            .entry(slug.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn mark_pending(&self, slug: &str) {
        let mut routes = self.routes.lock().await;
        routes.entry(slug.to_string()).or_insert(CachedRoute {
            status: RouteStatus::OnDemandPending,
            artifact: None,
        });
    }
}
