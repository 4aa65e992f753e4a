mod artifact;
mod detail;
mod home;
mod store;

pub use artifact::PageArtifact;
pub use detail::{
    EPISODE_REVALIDATE_SECS, EpisodeProps, FallbackPolicy, StaticPaths, build_episode_page,
    enumerate_episode_paths,
};
pub use home::{HOME_REVALIDATE_SECS, HomeProps, LATEST_EPISODES_COUNT, build_home_page};
pub use store::{PageStore, RouteStatus};
