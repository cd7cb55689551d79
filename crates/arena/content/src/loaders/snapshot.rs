//! Game snapshot loader.

use std::path::Path;

use arena_core::GameSnapshot;

use crate::formats::SnapshotDto;
use crate::loaders::{LoadResult, read_file};

/// Loader for host snapshots in JSON.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load and validate a snapshot from a JSON file.
    pub fn load(path: &Path) -> LoadResult<GameSnapshot> {
        let content = read_file(path)?;
        let snapshot = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            path = %path.display(),
            side = snapshot.board().length_of_side(),
            hero = %snapshot.hero().id,
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from JSON text.
    pub fn parse(content: &str) -> LoadResult<GameSnapshot> {
        let dto: SnapshotDto = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse snapshot JSON: {}", e))?;

        dto.into_snapshot()
            .map_err(|e| anyhow::anyhow!("Invalid snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arena_core::{Position, TileType};

    use super::*;

    const SNAPSHOT: &str = r#"{
        "turn": 12,
        "board": {
            "lengthOfSide": 2,
            "tiles": [
                [
                    { "type": "Hero", "distanceFromTop": 0, "distanceFromLeft": 0,
                      "id": 1, "name": "me", "team": 0, "health": 100 },
                    { "type": "HealthWell", "distanceFromTop": 0, "distanceFromLeft": 1 }
                ],
                [
                    { "type": "DiamondMine", "distanceFromTop": 1, "distanceFromLeft": 0 },
                    { "type": "Impassable", "distanceFromTop": 1, "distanceFromLeft": 1 }
                ]
            ]
        },
        "activeHero": { "type": "Hero", "distanceFromTop": 0, "distanceFromLeft": 0, "id": 1 }
    }"#;

    #[test]
    fn loads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = SnapshotLoader::load(file.path()).unwrap();
        assert_eq!(snapshot.hero_position(), Position::ORIGIN);

        let types: Vec<_> = snapshot.board().tiles().map(|t| t.tile_type()).collect();
        assert_eq!(
            types,
            vec![
                TileType::Hero,
                TileType::HealthWell,
                TileType::DiamondMine,
                TileType::Impassable
            ]
        );
    }

    #[test]
    fn reports_bad_json() {
        let err = SnapshotLoader::parse("{ \"board\": ").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse snapshot JSON"));
    }

    #[test]
    fn reports_misplaced_tiles() {
        let swapped = SNAPSHOT.replace(
            r#""type": "HealthWell", "distanceFromTop": 0, "distanceFromLeft": 1"#,
            r#""type": "HealthWell", "distanceFromTop": 1, "distanceFromLeft": 1"#,
        );
        let err = SnapshotLoader::parse(&swapped).unwrap_err();
        assert!(err.to_string().starts_with("Invalid snapshot"));
    }
}
