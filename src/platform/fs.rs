// PDK Manager - platform/fs.rs
//
// Filesystem primitives used by the action handlers: directory listing,
// recursive tree copy, single file copy, strict text reads.

use crate::util::error::WorkspaceError;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Names of the immediate subdirectories of `dir`, sorted.
///
/// A missing `dir` is not an error: it simply has no subdirectories.
/// Plain files and entries whose names are not valid UTF-8 are skipped.
pub fn list_subdirs(dir: &Path) -> Result<Vec<String>, WorkspaceError> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "Directory does not exist; nothing to list");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(WorkspaceError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| WorkspaceError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        // Follows symlinks, so a linked PDK shows up like a real one.
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::debug!(name = ?raw, "Skipping directory with non-UTF-8 name");
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Recursively copy the tree at `from` into `to`.
///
/// Existing directories are merged and existing files overwritten. Symlinks
/// are followed, so the destination holds real copies. Returns the number
/// of files copied. A failure part-way leaves whatever was already copied.
pub fn copy_dir_all(from: &Path, to: &Path) -> Result<usize, WorkspaceError> {
    if !from.is_dir() {
        return Err(WorkspaceError::SourceNotADirectory {
            path: from.to_path_buf(),
        });
    }
    ensure_not_within(to, from)?;

    let mut copied = 0usize;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(|source| WorkspaceError::Traversal {
            path: from.to_path_buf(),
            source,
        })?;
        let rel = match entry.path().strip_prefix(from) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = to.join(rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|source| WorkspaceError::CreateDir {
                path: target.clone(),
                source,
            })?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    tracing::debug!(
        from = %from.display(),
        to = %to.display(),
        files = copied,
        "Tree copied"
    );
    Ok(copied)
}

/// Copy one file, creating the destination's parent directory if needed.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), WorkspaceError> {
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| WorkspaceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::copy(from, to).map_err(|source| WorkspaceError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Read a file that the edit pane may write back.
///
/// Invalid UTF-8 is an `InvalidData` error rather than a lossy conversion,
/// so saving can never rewrite bytes the user did not touch.
pub fn read_text(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Fail with `CopyIntoSelf` when copying `from` into `to` would write into
/// the tree being walked.
pub fn ensure_not_within(to: &Path, from: &Path) -> Result<(), WorkspaceError> {
    // Walking lazily while writing into our own subtree would never finish.
    if is_within(to, from) {
        return Err(WorkspaceError::CopyIntoSelf {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    Ok(())
}

/// True when `inner` is `outer` or lies below it, comparing canonical forms
/// where they can be resolved (the destination usually does not exist yet).
fn is_within(inner: &Path, outer: &Path) -> bool {
    let outer = outer
        .canonicalize()
        .unwrap_or_else(|_| outer.to_path_buf());
    let inner = canonicalize_existing_prefix(inner);
    inner.starts_with(&outer)
}

/// Canonicalise the longest existing ancestor of `path` and re-append the rest.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut tail = Vec::new();
    let mut cursor = path;
    loop {
        if let Ok(canon) = cursor.canonicalize() {
            let mut out = canon;
            for part in tail.iter().rev() {
                out.push(part);
            }
            return out;
        }
        match (cursor.parent(), cursor.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                cursor = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_subdirs_sorted_dirs_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sky130hd")).unwrap();
        fs::create_dir(dir.path().join("asap7")).unwrap();
        fs::create_dir(dir.path().join("nangate45")).unwrap();
        fs::write(dir.path().join("README.md"), "not a pdk").unwrap();

        let names = list_subdirs(dir.path()).unwrap();
        assert_eq!(names, vec!["asap7", "nangate45", "sky130hd"]);
    }

    #[test]
    fn test_list_subdirs_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let names = list_subdirs(&dir.path().join("platforms")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_copy_dir_all_copies_nested_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("gcd");
        fs::create_dir_all(src.join("rtl/sub")).unwrap();
        fs::write(src.join("config.mk"), "export DESIGN_NAME = gcd").unwrap();
        fs::write(src.join("rtl/gcd.v"), "module gcd; endmodule").unwrap();
        fs::write(src.join("rtl/sub/util.v"), "module util; endmodule").unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();

        let dst = dir.path().join("out/gcd");
        let copied = copy_dir_all(&src, &dst).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            fs::read_to_string(dst.join("rtl/sub/util.v")).unwrap(),
            "module util; endmodule"
        );
        assert!(dst.join("empty").is_dir(), "empty directories are preserved");
    }

    #[test]
    fn test_copy_dir_all_merges_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.v"), "new").unwrap();
        fs::write(dst.join("a.v"), "old").unwrap();
        fs::write(dst.join("keep.v"), "untouched").unwrap();

        copy_dir_all(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.v")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("keep.v")).unwrap(), "untouched");
    }

    #[test]
    fn test_copy_dir_all_rejects_file_source() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("design.v");
        fs::write(&file, "x").unwrap();
        let result = copy_dir_all(&file, &dir.path().join("out"));
        assert!(matches!(
            result,
            Err(WorkspaceError::SourceNotADirectory { .. })
        ));
    }

    #[test]
    fn test_copy_dir_all_rejects_copy_into_itself() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("platforms");
        fs::create_dir_all(src.join("sky130hd")).unwrap();
        let result = copy_dir_all(&src, &src.join("sky130hd/platforms"));
        assert!(matches!(result, Err(WorkspaceError::CopyIntoSelf { .. })));
    }

    #[test]
    fn test_copy_file_missing_source_reports_both_paths() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("defaultConfig.txt");
        let to = dir.path().join("platforms/x/config.mk");
        let err = copy_file(&from, &to).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("defaultConfig.txt"), "{msg}");
        assert!(msg.contains("config.mk"), "{msg}");
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("constraints.sdk");
        fs::write(&path, b"set_clock \xff period").unwrap();
        let err = read_text(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::write(&path, "set_clock 10").unwrap();
        assert_eq!(read_text(&path).unwrap(), "set_clock 10");
    }
}
