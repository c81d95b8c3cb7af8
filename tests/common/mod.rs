use std::path::PathBuf;
use tempfile::TempDir;

/// Create a fresh temporary directory holding the given reports, returning the
/// dir handle. The caller must hold onto `TempDir` to keep the files alive.
pub fn setup_reports(reports: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in reports {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
    }
    dir
}

/// Path of `name` inside `dir`, as the string form the pipeline accepts.
pub fn path_in(dir: &TempDir, name: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    path.to_str().unwrap().to_string()
}
