//! Test helpers for writing CLI input fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Temporary workspace with a UTF-8 root path.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Write `contents` to `name` under the workspace root and return its path.
    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Positions crossing the antimeridian eastward, recorded out of order.
pub(super) const CROSSING_POSITIONS: &str = r#"[
    {"id": "00000000-0000-0000-0000-000000000002", "date": "2024-03-02", "time": "00:00:00", "lon": -170.0, "lat": 12.0},
    {"id": "00000000-0000-0000-0000-000000000001", "date": "2024-03-01", "time": "12:00:00", "lon": 170.0, "lat": 10.0},
    {"id": "00000000-0000-0000-0000-000000000003", "date": "2024-03-02", "time": "06:00:00", "lon": null, "lat": null}
]"#;

/// A single leg covering the first two days of March 2024.
pub(super) const LEGS: &str = r#"[
    {"id": "00000000-0000-0000-0000-0000000000aa", "number": 1, "departure_port": "Suva", "return_port": "Apia", "start_date": "2024-03-01", "end_date": "2024-03-02"}
]"#;
