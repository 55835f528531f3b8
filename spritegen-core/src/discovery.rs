//! File discovery module for finding video files to process.
//!
//! Scans the top level of a directory for files with a recognized video
//! extension (case-insensitive) and maps each one to its sprite sheet path.

use crate::config::{SPRITE_SUFFIX, VIDEO_EXTENSIONS};
use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Returns true if the file name ends in `.` plus one of [`VIDEO_EXTENSIONS`],
/// ignoring case.
///
/// This is a suffix match on the whole name, so a file called just `.mp4`
/// counts as a video.
pub fn is_video_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    VIDEO_EXTENSIONS.iter().any(|known| {
        name.strip_suffix(known)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Creates the input and output directories if they do not already exist.
pub fn ensure_directories(input_dir: &Path, output_dir: &Path) -> CoreResult<()> {
    for dir in [input_dir, output_dir] {
        fs::create_dir_all(dir).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Finds video files eligible for processing in the specified directory.
///
/// Subdirectories are not searched. Results are sorted by path so batch
/// order does not depend on the filesystem.
///
/// # Errors
///
/// * `CoreError::Io` - If the directory cannot be read
/// * `CoreError::NoFilesFound` - If no recognized video files are present
///
/// # Examples
///
/// ```rust,no_run
/// use spritegen_core::find_processable_files;
/// use std::path::Path;
///
/// match find_processable_files(Path::new("input")) {
///     Ok(files) => println!("Found {} video files", files.len()),
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.is_file() && is_video_file(&path)).then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort();
    log::debug!(
        "Discovered {} video file(s) in {}",
        files.len(),
        input_dir.display()
    );
    Ok(files)
}

/// Derives `<output_dir>/<input-stem>_sprite.jpg` for an input video.
pub fn sprite_output_path(output_dir: &Path, input: &Path) -> CoreResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine file stem for '{}'",
            input.display()
        ))
    })?;

    let mut name = stem.to_os_string();
    name.push(SPRITE_SUFFIX);
    Ok(output_dir.join(name))
}
