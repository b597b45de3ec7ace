use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file_spec.path, &file_spec.content).expect("Failed to write file");
}

/// Writes `source.txt` and `target.txt` into `dir` and returns their paths.
pub fn write_pair(dir: &Path, source: &str, target: &str) -> (PathBuf, PathBuf) {
    let source_path = dir.join("source.txt");
    let target_path = dir.join("target.txt");

    write_file(FileSpec::new(source_path.clone(), source.to_string()));
    write_file(FileSpec::new(target_path.clone(), target.to_string()));

    (source_path, target_path)
}
