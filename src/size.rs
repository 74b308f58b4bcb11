//! Directory size measurement and human-readable formatting.
//!
//! Used by the orchestrator to report the modules directory size before and
//! after pruning. Measurement is best-effort: entries that cannot be read are
//! counted as zero rather than failing the whole measurement.

use std::fs;
use std::path::Path;

/// Recursively sum the sizes of all files under `dir_path`, in bytes.
///
/// Symlinks are counted by their own size and never followed, so cyclic links
/// cannot loop the measurement.
pub fn get_directory_size(dir_path: &Path) -> u64 {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return 0;
    };

    let mut total_size = 0u64;
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            total_size = total_size.saturating_add(get_directory_size(&entry.path()));
        } else if let Ok(metadata) = entry.metadata() {
            total_size = total_size.saturating_add(metadata.len());
        }
    }

    total_size
}

/// Format a byte count for display (binary units: KiB, MiB, ...).
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_has_zero_size() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(get_directory_size(temp_dir.path()), 0);
    }

    #[test]
    fn sums_files_across_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), vec![0u8; 100]).unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("b.txt"), vec![0u8; 250]).unwrap();

        assert_eq!(get_directory_size(temp_dir.path()), 350);
    }

    #[test]
    fn missing_directory_measures_zero() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        assert_eq!(get_directory_size(&missing), 0);
    }

    #[test]
    fn formats_binary_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(2048), "2 KiB");
    }
}
