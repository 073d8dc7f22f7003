//! Storage operations
//!
//! Filesystem helpers backing the LIST, CWD, RETR, and DEL commands. Every
//! function takes the session's working directory explicitly; nothing here
//! touches process-wide state, so concurrent sessions never observe each
//! other's directory changes.

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Lists the contents of a directory for the LIST command.
///
/// Directories are prefixed `+` and regular files `-`; each partition is
/// sorted lexicographically and directories come first. Entries that are
/// neither (or whose metadata cannot be read) are skipped.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, StorageError> {
    let mut dirs = vec![];
    let mut files = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        // Follows symlinks, like the type checks the listing advertises.
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_dir() => dirs.push(format!("+{}", name)),
            Ok(meta) if meta.is_file() => files.push(format!("-{}", name)),
            _ => {}
        }
    }

    dirs.sort();
    files.sort();
    dirs.extend(files);

    info!("Listed directory {} - {} entries", dir.display(), dirs.len());
    Ok(dirs)
}

/// Resolves a CWD target against the current directory.
///
/// Returns the canonical path of the new working directory; the caller owns
/// updating its session state. Relative targets (including `..`) resolve
/// against `current`; absolute targets stand alone.
pub fn change_directory(current: &Path, target: &str) -> Result<PathBuf, StorageError> {
    let candidate = current.join(target);
    let resolved = candidate.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::DirectoryNotFound(target.to_string())
        } else {
            StorageError::IoError(e)
        }
    })?;

    if !resolved.is_dir() {
        return Err(StorageError::NotADirectory(target.to_string()));
    }

    info!("Resolved directory change to {}", resolved.display());
    Ok(resolved)
}

/// Resolves a filename against the working directory and verifies it names
/// an existing regular file. Used by RETR and DEL before touching the file.
pub fn resolve_file(dir: &Path, filename: &str) -> Result<PathBuf, StorageError> {
    let path = dir.join(filename);
    let meta = fs::metadata(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::FileNotFound(filename.to_string())
        } else {
            StorageError::IoError(e)
        }
    })?;

    if !meta.is_file() {
        return Err(StorageError::NotAFile(filename.to_string()));
    }

    Ok(path)
}

/// Deletes a file for the DEL command.
pub fn delete_file(dir: &Path, filename: &str) -> Result<(), StorageError> {
    let path = resolve_file(dir, filename)?;
    fs::remove_file(&path)?;
    info!("Deleted file {}", path.display());
    Ok(())
}

/// The final path component, or the path itself when there is none (the
/// filesystem root).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn scratch() -> TempDir {
        TempDir::new().unwrap()
    }

    #[test]
    fn test_list_partitions_and_sorts() {
        let root = scratch();
        File::create(root.path().join("b.txt")).unwrap();
        File::create(root.path().join("a.txt")).unwrap();
        fs::create_dir(root.path().join("zdir")).unwrap();
        fs::create_dir(root.path().join("adir")).unwrap();

        let entries = list_directory(root.path()).unwrap();
        assert_eq!(entries, vec!["+adir", "+zdir", "-a.txt", "-b.txt"]);
    }

    #[test]
    fn test_list_empty_directory() {
        let root = scratch();
        assert!(list_directory(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let root = scratch();
        let gone = root.path().join("nope");
        assert!(list_directory(&gone).is_err());
    }

    #[test]
    fn test_change_directory_round_trip() {
        let root = scratch();
        let canonical_root = root.path().canonicalize().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();

        let sub = change_directory(&canonical_root, "sub").unwrap();
        assert_eq!(basename(&sub), "sub");

        let back = change_directory(&sub, "..").unwrap();
        assert_eq!(back, canonical_root);
    }

    #[test]
    fn test_change_directory_rejects_missing_and_files() {
        let root = scratch();
        File::create(root.path().join("plain.txt")).unwrap();

        assert!(matches!(
            change_directory(root.path(), "nope"),
            Err(StorageError::DirectoryNotFound(_))
        ));
        assert!(matches!(
            change_directory(root.path(), "plain.txt"),
            Err(StorageError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_resolve_file_checks_kind() {
        let root = scratch();
        let mut f = File::create(root.path().join("data.bin")).unwrap();
        f.write_all(b"0123456789").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();

        assert!(resolve_file(root.path(), "data.bin").is_ok());
        assert!(matches!(
            resolve_file(root.path(), "missing.bin"),
            Err(StorageError::FileNotFound(_))
        ));
        assert!(matches!(
            resolve_file(root.path(), "sub"),
            Err(StorageError::NotAFile(_))
        ));
    }

    #[test]
    fn test_delete_file_removes_and_reports_missing() {
        let root = scratch();
        File::create(root.path().join("gone.txt")).unwrap();

        delete_file(root.path(), "gone.txt").unwrap();
        assert!(!root.path().join("gone.txt").exists());

        assert!(matches!(
            delete_file(root.path(), "gone.txt"),
            Err(StorageError::FileNotFound(_))
        ));
    }
}
