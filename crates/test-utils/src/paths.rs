//! Locating optional real-world test data.
//!
//! DEM tiles and simulation outputs are too large to check in. Tests that
//! want them look in `TEST_DATA_DIR` first, then in the `testdata/`
//! directories of the loader crates and the workspace root.

use std::path::PathBuf;

/// The workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Directories searched by [`find_test_file`], in order.
pub fn test_data_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(dir) = std::env::var("TEST_DATA_DIR") {
        dirs.push(PathBuf::from(dir));
    }
    let root = workspace_root();
    dirs.push(root.join("crates/raster-parser/testdata"));
    dirs.push(root.join("crates/netcdf-parser/testdata"));
    dirs.push(root.join("testdata"));
    dirs
}

/// First existing `name` among [`test_data_dirs`].
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    test_data_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.exists())
}
