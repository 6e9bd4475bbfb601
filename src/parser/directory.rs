use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find files with the given extension in a directory. If recursive is
/// true, use walkdir; otherwise list files.
pub fn find_files(
    dir: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if has_extension(path, extension) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if has_extension(&path, extension) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == extension)
}
