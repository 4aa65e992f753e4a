mod duration;
mod normalize;

pub use duration::format_duration;
pub use normalize::{EpisodeView, normalize_episode};
