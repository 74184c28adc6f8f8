//! Test helpers for staging score requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding a single request file path.
pub(super) struct RequestDir {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request_path: Utf8PathBuf,
}

impl RequestDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");
        Self {
            _tmp: tmp,
            root,
            request_path,
        }
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A cafe query at (1, 1) with one exact match and one far-away candidate.
pub(super) fn cafe_request_json() -> serde_json::Value {
    json!({
        "query": { "text": "cafe", "latitude": 1.0, "longitude": 1.0 },
        "candidates": [
            { "name": "cafe", "latitude": 1.0, "longitude": 1.0 },
            { "name": "tea room", "latitude": -1.0, "longitude": -179.0 }
        ]
    })
}
