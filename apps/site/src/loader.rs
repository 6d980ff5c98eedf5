use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::cv::Cv;
use crate::view::visibility::DURATION_FLAG;

#[derive(Debug, Error)]
pub enum CvError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CV document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("profile name must not be empty")]
    EmptyName,

    #[error("contact channel '{0}' is listed more than once")]
    DuplicateChannel(String),
}

/// Reads and checks the CV document at `path`.
pub fn load_cv(path: &Path) -> Result<Cv, CvError> {
    info!("Loading CV data from {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| CvError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let cv = parse_cv(&raw)?;

    info!(
        "Loaded CV for '{}' ({} categories)",
        cv.profile.name,
        cv.categories.len()
    );
    Ok(cv)
}

pub fn parse_cv(raw: &str) -> Result<Cv, CvError> {
    let cv: Cv = serde_json::from_str(raw)?;
    check_cv(&cv)?;
    Ok(cv)
}

/// Rejects documents the page cannot sensibly show. Date ranges are not
/// checked: a reversed range just renders without a duration.
pub fn check_cv(cv: &Cv) -> Result<(), CvError> {
    if cv.profile.name.trim().is_empty() {
        return Err(CvError::EmptyName);
    }

    let mut channels = HashSet::new();
    for contact in &cv.profile.contacts {
        if !channels.insert(contact.channel.as_str()) {
            return Err(CvError::DuplicateChannel(contact.channel.clone()));
        }
    }

    for flag in unknown_hide_flags(cv) {
        warn!("hide flag '{flag}' does not match any category or block id");
    }

    Ok(())
}

/// Hide flags that no category, block, or built-in flag refers to.
pub fn unknown_hide_flags(cv: &Cv) -> Vec<&str> {
    let known: HashSet<&str> = cv
        .categories
        .iter()
        .flat_map(|c| std::iter::once(c.id.as_str()).chain(c.blocks.iter().map(|b| b.id())))
        .chain(std::iter::once(DURATION_FLAG))
        .collect();

    cv.profile
        .hide
        .keys()
        .map(String::as_str)
        .filter(|flag| !known.contains(flag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Ada Example",
            "headline": "Developer",
            "username": "ada",
            "address": "London",
            "contacts": [
                {"channel": "email", "prefix": "mailto:", "text": "ada@example.org"}
            ],
            "hide": {"duration": true, "typo": false}
        },
        "categories": [
            {"id": "skills", "icon": "wrench", "title": "Skills", "blocks": [
                {"kind": "skill", "id": "rust", "title": "Rust"}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let cv = parse_cv(MINIMAL).unwrap();
        assert_eq!(cv.profile.name, "Ada Example");
        assert_eq!(cv.categories[0].blocks[0].id(), "rust");
        assert!(cv.profile.accounts.is_empty());
    }

    #[test]
    fn test_unknown_flags_are_reported() {
        let cv = parse_cv(MINIMAL).unwrap();
        assert_eq!(unknown_hide_flags(&cv), vec!["typo"]);
    }

    #[test]
    fn test_duplicate_channel_rejected() {
        let raw = MINIMAL.replace(
            r#"{"channel": "email", "prefix": "mailto:", "text": "ada@example.org"}"#,
            r#"{"channel": "email", "prefix": "mailto:", "text": "a@example.org"},
               {"channel": "email", "prefix": "mailto:", "text": "b@example.org"}"#,
        );
        match parse_cv(&raw) {
            Err(CvError::DuplicateChannel(channel)) => assert_eq!(channel, "email"),
            other => panic!("expected duplicate channel error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let raw = MINIMAL.replace("Ada Example", "  ");
        assert!(matches!(parse_cv(&raw), Err(CvError::EmptyName)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_cv("{"), Err(CvError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let cv = load_cv(file.path()).unwrap();
        assert_eq!(cv.profile.username, "ada");
    }

    #[test]
    fn test_bundled_data_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/cv.json");
        let cv = load_cv(&path).unwrap();
        assert!(unknown_hide_flags(&cv).is_empty());
        assert!(cv.categories.iter().any(|c| c.id == "references"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cv(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CvError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
