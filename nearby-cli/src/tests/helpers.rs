//! Test helpers for writing places payloads into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const PROVIDER_PAYLOAD: &str = r#"{
    "status": "OK",
    "results": [
        {
            "place_id": "far",
            "name": "Far Pharmacy",
            "geometry": { "location": { "lat": 51.53, "lng": -0.1278 } },
            "types": ["pharmacy", "health"],
            "rating": 3.2
        },
        {
            "place_id": "near",
            "name": "Near Pharmacy",
            "geometry": { "location": { "lat": 51.508, "lng": -0.1278 } },
            "types": ["pharmacy", "store"],
            "rating": 4.6
        }
    ]
}"#;

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}
