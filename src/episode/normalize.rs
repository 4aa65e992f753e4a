// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::api::{RawDuration, RawEpisode};
use crate::error::NormalizeError;

use super::duration::format_duration;

/// Abbreviated month names for publication dates, pt-BR
const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Render-ready representation of a single episode
///
/// Immutable once constructed; a new value is built from scratch on
/// every generation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeView {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Publication date rendered as e.g. "10 mai. 21"
    pub published_at: String,
    /// Duration in whole seconds
    pub duration: u64,
    pub duration_as_string: String,
    /// Pre-sanitized HTML, copied verbatim from the API
    pub description: String,
    pub url: String,
}

/// Convert a raw API record into a render-ready view model
///
/// Fails when the publication date is not a parseable ISO date or the
/// duration is not numeric; a malformed record aborts the caller's
/// whole page generation.
pub fn normalize_episode(raw: &RawEpisode) -> Result<EpisodeView, NormalizeError> {
    let published = parse_published_at(&raw.published_at)?;
    let duration = parse_duration(raw)?;

    Ok(EpisodeView {
        id: raw.id.clone(),
        title: raw.title.clone(),
        thumbnail: raw.thumbnail.clone(),
        members: raw.members.clone(),
        published_at: format_published_at(published),
        duration,
        duration_as_string: format_duration(duration),
        description: raw.description.clone(),
        url: raw.file.url.clone(),
    })
}

fn parse_duration(raw: &RawEpisode) -> Result<u64, NormalizeError> {
    match &raw.file.duration {
        RawDuration::Seconds(seconds) => Ok(*seconds),
        RawDuration::Text(text) => {
            text.trim()
                .parse()
                .map_err(|_| NormalizeError::InvalidDuration {
                    id: raw.id.clone(),
                    value: text.clone(),
                })
        }
    }
}

/// Parse an ISO-8601 publication date, tolerating common variants
fn parse_published_at(date_str: &str) -> Result<NaiveDate, NormalizeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.date_naive());
    }

    let formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| NormalizeError::InvalidDate {
        value: date_str.to_string(),
        reason: e.to_string(),
    })
}

/// Render a date as "d MMM yy" under the pt-BR locale
fn format_published_at(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} {} {:02}", date.day(), month, date.year() % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::RawFile;

    fn make_raw(published_at: &str, duration: RawDuration) -> RawEpisode {
        RawEpisode {
            id: "ep-1".to_string(),
            title: "Episode One".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            members: "Alice, Bob".to_string(),
            published_at: published_at.to_string(),
            description: "<p>Hello</p>".to_string(),
            file: RawFile {
                url: "https://example.com/ep1.mp3".to_string(),
                duration,
            },
        }
    }

    #[test]
    fn normalizes_all_fields() {
        let raw = make_raw("2021-05-10T00:00:00.000Z", RawDuration::Seconds(3661));
        let view = normalize_episode(&raw).unwrap();

        assert_eq!(view.id, "ep-1");
        assert_eq!(view.title, "Episode One");
        assert_eq!(view.thumbnail, "https://example.com/thumb.jpg");
        assert_eq!(view.members, "Alice, Bob");
        assert_eq!(view.published_at, "10 mai. 21");
        assert_eq!(view.duration, 3661);
        assert_eq!(view.duration_as_string, "01:01:01");
        assert_eq!(view.description, "<p>Hello</p>");
        assert_eq!(view.url, "https://example.com/ep1.mp3");
    }

    #[test]
    fn parses_string_duration() {
        let raw = make_raw("2021-05-10T00:00:00.000Z", RawDuration::Text("3981".into()));
        let view = normalize_episode(&raw).unwrap();

        assert_eq!(view.duration, 3981);
        assert_eq!(view.duration_as_string, "01:06:21");
    }

    #[test]
    fn is_a_pure_function() {
        let raw = make_raw("2021-05-10T00:00:00.000Z", RawDuration::Seconds(3661));

        let first = normalize_episode(&raw).unwrap();
        let second = normalize_episode(&raw).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn accepts_space_separated_datetimes() {
        let raw = make_raw("2021-01-22 18:25:40", RawDuration::Seconds(60));
        let view = normalize_episode(&raw).unwrap();

        assert_eq!(view.published_at, "22 jan. 21");
    }

    #[test]
    fn accepts_date_only_strings() {
        let raw = make_raw("2019-12-05", RawDuration::Seconds(60));
        let view = normalize_episode(&raw).unwrap();

        assert_eq!(view.published_at, "5 dez. 19");
    }

    #[test]
    fn pads_two_digit_years() {
        let raw = make_raw("2005-03-01T12:00:00Z", RawDuration::Seconds(60));
        let view = normalize_episode(&raw).unwrap();

        assert_eq!(view.published_at, "1 mar. 05");
    }

    #[test]
    fn rejects_unparseable_dates() {
        let raw = make_raw("yesterday", RawDuration::Seconds(60));
        let result = normalize_episode(&raw);

        assert!(matches!(
            result.unwrap_err(),
            NormalizeError::InvalidDate { .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_durations() {
        let raw = make_raw(
            "2021-05-10T00:00:00.000Z",
            RawDuration::Text("one hour".into()),
        );

        match normalize_episode(&raw).unwrap_err() {
            NormalizeError::InvalidDuration { id, value } => {
                assert_eq!(id, "ep-1");
                assert_eq!(value, "one hour");
            }
            other => panic!("Expected duration error, got {other}"),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let raw = make_raw("2021-05-10T00:00:00.000Z", RawDuration::Seconds(90));
        let view = normalize_episode(&raw).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["durationAsString"], "00:01:30");
        assert_eq!(json["publishedAt"], "10 mai. 21");
    }
}
