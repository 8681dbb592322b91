use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Downloads at or below this many bytes are treated as error pages
pub const MIN_IMAGE_BYTES: u64 = 1000;

/// Ensure the image output directory exists
pub fn ensure_directories(base_path: &Path) -> io::Result<()> {
    if !base_path.exists() {
        fs::create_dir_all(base_path)?;
        println!("Created directory: {}", base_path.display());
    }
    Ok(())
}

/// Output path for a destination image
pub fn image_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{}.jpg", slug))
}

/// True when a previous run already left a usable image at `path`
pub fn has_complete_image(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.len() > MIN_IMAGE_BYTES)
        .unwrap_or(false)
}

/// All `*.jpg` files in a directory, sorted by file name
pub fn list_jpg_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map_or(false, |ext| ext == "jpg")
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Combined size of the given files in bytes; unreadable entries count as zero
pub fn total_size(files: &[PathBuf]) -> u64 {
    files
        .iter()
        .filter_map(|file| fs::metadata(file).ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Remove a file if present, ignoring "not found"
pub fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
