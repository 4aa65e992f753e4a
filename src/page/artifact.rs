use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// A generated page together with its freshness window
///
/// Revalidation is modeled as an explicit valid-until timestamp rather
/// than a live timer, so the contract can be checked by handing in the
/// current instant. Artifacts are immutable; regeneration replaces the
/// whole value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArtifact<P> {
    pub props: P,
    pub generated_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl<P> PageArtifact<P> {
    /// Stamp freshly generated props with their revalidation window
    pub fn new(props: P, generated_at: DateTime<Utc>, revalidate_secs: u64) -> Self {
        Self {
            props,
            generated_at,
            valid_until: generated_at + TimeDelta::seconds(revalidate_secs as i64),
        }
    }

    /// Whether the page is due for regeneration at the given instant
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_until
    }
}
