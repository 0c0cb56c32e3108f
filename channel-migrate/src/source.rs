//! Loader for the grouped source export.
//!
//! The upstream extraction step regroups the raw hierarchical export into one
//! record per user; this module only reads that file back. Entity order in
//! the file is the order the orchestrator migrates in.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use channel_migrate_shared::types::SourceEntity;

use crate::errors::SourceError;

/// Reads the grouped per-user entities from a JSON export file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file holding the entity array.
///
/// # Returns
///
/// A `Result` with the source entities in file order, or a `SourceError` if
/// the file cannot be opened or parsed.
pub fn read_entities(path: &Path) -> Result<Vec<SourceEntity>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let entities = serde_json::from_reader(BufReader::new(file))?;
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_entities_from_export_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"user": {"id": "u1", "email": "u1@example.com", "createdAt": 1438466400000, "passwordHash": "aA=="}},
                {"user": {"id": "u2", "email": "u2@example.com", "createdAt": 1438466400000, "passwordHash": "aA=="}}
            ]"#,
        )
        .unwrap();

        let entities = read_entities(file.path()).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].user.id, "u1");
        assert_eq!(entities[1].user.id, "u2");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let error = read_entities(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(matches!(error, SourceError::Open { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let error = read_entities(file.path()).unwrap_err();
        assert!(matches!(error, SourceError::Parse(_)));
    }
}
