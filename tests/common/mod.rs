use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn setup_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_path_buf();

    // Mirror the layout the tool expects: catalog and output under data/
    fs::create_dir_all(base_path.join("data")).unwrap();
    fs::write(
        base_path.join("data").join("products.yaml"),
        include_str!("../../test_data/catalog.yml"),
    )
    .unwrap();

    (temp_dir, base_path)
}
