//! Shared helpers for reading test resources.
use std::{fs, path::PathBuf};

pub fn read_shared_resource(name: &str) -> String {
    let path = shared_resource_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Unable to read file {}: {}", path.display(), e))
}

pub fn shared_resource_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("..");
    path.push("resources");
    path.push("test");
    path.push(name);
    path
}
