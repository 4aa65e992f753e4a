use std::sync::Arc;

/// Events emitted while pages are fetched and generated
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// The episode listing is being fetched from the API
    FetchingEpisodes { limit: usize },

    /// A single episode record is being fetched
    FetchingEpisode { slug: String },

    /// A page finished generating
    PageGenerated { route: String },

    /// A regeneration failed and the stale copy is served instead
    ServingStale { route: String, error: String },

    /// A page could not be generated and no cached copy exists
    GenerationFailed { route: String, error: String },

    /// A full site build finished
    SiteBuilt { prerendered_routes: usize },
}

/// Trait for observing page generation.
///
/// Implementations can use this to display progress, log messages,
/// or collect statistics.
pub trait BuildReporter: Send + Sync {
    /// Report a build event
    fn report(&self, event: BuildEvent);
}

/// A shared reference to a build reporter
pub type SharedBuildReporter = Arc<dyn BuildReporter>;

/// A no-op reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl BuildReporter for NoopReporter {
    fn report(&self, _event: BuildEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedBuildReporter {
        Arc::new(Self)
    }
}
