mod client;
mod model;

pub use client::{EPISODES_PAGE_SIZE, EpisodesApi};
pub use model::{RawDuration, RawEpisode, RawFile};
