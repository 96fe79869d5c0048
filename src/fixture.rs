use crate::error::{HarnessError, Result};
use crate::workload::ClipExecutionData;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Named, persisted workloads stored as `<dir>/<name>.json`.
#[derive(Clone, Debug)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Reads the fixture back. Every call on the same file yields the same records.
    pub fn load(&self, name: &str) -> Result<Vec<ClipExecutionData>> {
        let path = self.path_for(name);
        let file = File::open(&path).map_err(|e| HarnessError::FixtureLoad {
            name: name.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })?;

        let records: Vec<ClipExecutionData> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| HarnessError::FixtureLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("Loaded {} records from {:?}", records.len(), path);
        Ok(records)
    }

    /// Persists `records`, replacing any fixture of the same name.
    pub fn save(&self, name: &str, records: &[ClipExecutionData]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, records).map_err(std::io::Error::from)?;
        writer.flush()?;

        log::info!("Wrote {} records to {:?}", records.len(), path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_workload_with_count, LoadProfile};
    use crate::point::Point;
    use crate::workload::ClipOperation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_is_lossless() {
        let temp_dir = TempDir::new().unwrap();
        let store = FixtureStore::new(temp_dir.path());

        let records = generate_workload_with_count(LoadProfile::Complex, 40, &mut StdRng::seed_from_u64(17));
        store.save("ComplexPolygons", &records).unwrap();
        let loaded = store.load("ComplexPolygons").unwrap();

        // Bitwise coordinate equality, not approximate
        assert_eq!(loaded.len(), records.len());
        for (a, b) in loaded.iter().zip(&records) {
            assert_eq!(a.operation, b.operation);
            for (ra, rb) in a.subject.iter().chain(&a.clip).zip(b.subject.iter().chain(&b.clip)) {
                for (pa, pb) in ra.iter().zip(rb) {
                    assert_eq!(pa.x.to_bits(), pb.x.to_bits());
                    assert_eq!(pa.y.to_bits(), pb.y.to_bits());
                }
            }
        }
    }

    #[test]
    fn test_repeated_loads_are_identical() {
        let temp_dir = TempDir::new().unwrap();
        let store = FixtureStore::new(temp_dir.path());

        let records = generate_workload_with_count(LoadProfile::Simple, 25, &mut StdRng::seed_from_u64(2));
        store.save("SimplePolygons", &records).unwrap();

        let first = store.load("SimplePolygons").unwrap();
        let second = store.load("SimplePolygons").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let store = FixtureStore::new(temp_dir.path());

        match store.load("Nope") {
            Err(HarnessError::FixtureLoad { name, .. }) => assert_eq!(name, "Nope"),
            other => panic!("expected FixtureLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let store = FixtureStore::new(temp_dir.path());
        fs::write(store.path_for("Broken"), r#"[{"operation":"Sideways","subject":[],"clip":[]}]"#).unwrap();

        assert!(matches!(store.load("Broken"), Err(HarnessError::FixtureLoad { .. })));
    }

    #[test]
    fn test_reads_hand_written_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let store = FixtureStore::new(temp_dir.path());
        let json = r#"[{"operation":"Union",
            "subject":[[{"x":1.0,"y":0.0},{"x":5.0,"y":0.0},{"x":5.0,"y":4.0},{"x":1.0,"y":4.0}]],
            "clip":[]}]"#;
        fs::write(store.path_for("Handmade"), json).unwrap();

        let records = store.load("Handmade").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].operation, ClipOperation::Union);
        assert_eq!(records[0].subject[0][2], Point::new(5.0, 4.0));
    }
}
