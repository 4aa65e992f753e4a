// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

/// A single episode record as returned by the episodes API
///
/// All fields listed here are required; a response missing any of them
/// is rejected at the deserialization boundary. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// ISO-8601 publication date, parsed during normalization
    pub published_at: String,
    /// Pre-sanitized HTML, passed through verbatim
    pub description: String,
    pub file: RawFile,
}

/// The audio file attached to an episode record
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    pub url: String,
    pub duration: RawDuration,
}

/// Episode duration as delivered by the API, either a JSON number or a
/// numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(u64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_duration() {
        let json = r#"{
            "id": "ep-1",
            "title": "Episode One",
            "thumbnail": "https://example.com/thumb.jpg",
            "members": "Alice, Bob",
            "published_at": "2021-05-10T00:00:00.000Z",
            "description": "<p>Hello</p>",
            "file": { "url": "https://example.com/ep1.mp3", "duration": 3661 }
        }"#;

        let episode: RawEpisode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.id, "ep-1");
        assert!(matches!(episode.file.duration, RawDuration::Seconds(3661)));
    }

    #[test]
    fn deserializes_string_duration() {
        let json = r#"{
            "id": "ep-2",
            "title": "Episode Two",
            "thumbnail": "https://example.com/thumb.jpg",
            "members": "Alice",
            "published_at": "2021-05-10 00:00:00",
            "description": "",
            "file": { "url": "https://example.com/ep2.mp3", "duration": "3981" }
        }"#;

        let episode: RawEpisode = serde_json::from_str(json).unwrap();
        match episode.file.duration {
            RawDuration::Text(text) => assert_eq!(text, "3981"),
            other => panic!("Expected text duration, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_required_fields() {
        let json = r#"{ "id": "ep-3", "title": "No file object" }"#;
        let result: Result<RawEpisode, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "id": "ep-4",
            "title": "Extra",
            "thumbnail": "t",
            "members": "m",
            "published_at": "2021-01-01",
            "description": "d",
            "file": { "url": "u", "duration": 1, "type": "audio/mpeg" },
            "views": 1234
        }"#;

        let episode: RawEpisode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.file.url, "u");
    }
}
