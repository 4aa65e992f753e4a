use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ArtifactError;
use crate::page::{EpisodeProps, HomeProps, PageArtifact};

const HOME_ARTIFACT_FILENAME: &str = "index.json";
const EPISODES_DIR: &str = "episodes";

/// Write the home page artifact to the output directory
pub fn write_home_artifact(
    artifact: &PageArtifact<HomeProps>,
    output_dir: &Path,
) -> Result<PathBuf, ArtifactError> {
    ensure_dir(output_dir)?;
    let path = output_dir.join(HOME_ARTIFACT_FILENAME);
    write_json(artifact, &path)?;
    Ok(path)
}

/// Write an episode page artifact under `episodes/<slug>.json`
///
/// The slug is made filesystem-safe before it becomes a file name.
pub fn write_episode_artifact(
    artifact: &PageArtifact<EpisodeProps>,
    output_dir: &Path,
) -> Result<PathBuf, ArtifactError> {
    let dir = output_dir.join(EPISODES_DIR);
    ensure_dir(&dir)?;

    let filename = format!(
        "{}.json",
        sanitize_filename::sanitize(&artifact.props.episode.id)
    );
    let path = dir.join(filename);
    write_json(artifact, &path)?;
    Ok(path)
}

fn ensure_dir(dir: &Path) -> Result<(), ArtifactError> {
    std::fs::create_dir_all(dir).map_err(|e| ArtifactError::CreateDirectoryFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), ArtifactError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| ArtifactError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use tempfile::tempdir;

    use crate::episode::EpisodeView;

    fn make_view(id: &str) -> EpisodeView {
        EpisodeView {
            id: id.to_string(),
            title: "Episode".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            members: "Alice".to_string(),
            published_at: "10 mai. 21".to_string(),
            duration: 90,
            duration_as_string: "00:01:30".to_string(),
            description: "<p>Hi</p>".to_string(),
            url: "https://example.com/ep.mp3".to_string(),
        }
    }

    #[test]
    fn writes_home_artifact_with_camel_case_props() {
        let dir = tempdir().unwrap();
        let artifact = PageArtifact::new(
            HomeProps {
                latest_episodes: vec![make_view("ep-1")],
                all_episodes: vec![],
            },
            Utc::now(),
            28_800,
        );

        let path = write_home_artifact(&artifact, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("index.json"));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["props"]["latestEpisodes"][0]["id"], "ep-1");
        assert!(written["validUntil"].is_string());
    }

    #[test]
    fn writes_episode_artifact_under_episodes_dir() {
        let dir = tempdir().unwrap();
        let artifact = PageArtifact::new(
            EpisodeProps {
                episode: make_view("ep-7"),
            },
            Utc::now(),
            86_400,
        );

        let path = write_episode_artifact(&artifact, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("episodes").join("ep-7.json"));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["props"]["episode"]["durationAsString"], "00:01:30");
    }

    #[test]
    fn sanitizes_hostile_slugs() {
        let dir = tempdir().unwrap();
        let artifact = PageArtifact::new(
            EpisodeProps {
                episode: make_view("../escape"),
            },
            Utc::now(),
            86_400,
        );

        let path = write_episode_artifact(&artifact, dir.path()).unwrap();

        assert!(path.starts_with(dir.path().join("episodes")));
        assert!(path.exists());
    }
}
