pub mod api;
pub mod episode;
pub mod error;
pub mod http;
pub mod output;
pub mod page;
pub mod report;

// Re-export main types for convenience
pub use api::{EPISODES_PAGE_SIZE, EpisodesApi, RawDuration, RawEpisode, RawFile};
pub use episode::{EpisodeView, format_duration, normalize_episode};
pub use error::{ApiError, ArtifactError, BuildError, NormalizeError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use output::{write_episode_artifact, write_home_artifact};
pub use page::{
    EPISODE_REVALIDATE_SECS, EpisodeProps, FallbackPolicy, HOME_REVALIDATE_SECS, HomeProps,
    LATEST_EPISODES_COUNT, PageArtifact, PageStore, RouteStatus, StaticPaths, build_episode_page,
    build_home_page, enumerate_episode_paths,
};
pub use report::{BuildEvent, BuildReporter, NoopReporter, SharedBuildReporter};
