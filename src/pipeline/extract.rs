// src/pipeline/extract.rs
// =============================================================================
// This module unpacks a downloaded template archive into the target
// directory.
//
// GitHub's zipball endpoint wraps everything in a single generated folder
// (named like "owner-repo-sha/"), so a naive unzip would leave the user
// with project/owner-repo-sha/... instead of project/... We detect that
// root wrapper folder from the first entry and strip it from every path.
//
// Key behaviors:
// - Directories are created idempotently (no error if they exist)
// - Files overwrite anything already at their path
// - The source archive is deleted only after the whole pass succeeds,
//   so a failed extraction leaves it on disk for inspection or retry
//
// Rust concepts:
// - Lifetimes: strip_root_prefix returns a slice borrowed from its input
// - io::copy: Streams decompressed bytes straight into the output file
// - From conversions: io and zip errors fold into PipelineError::Archive
// =============================================================================

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use super::error::PipelineError;

// Removes the root wrapper folder from an archive entry name
//
// Parameters:
//   entry_name: the full entry path as stored in the archive
//   root_folder: the wrapper folder name (no trailing slash)
//
// Returns:
//   Some(relative) - the path with "{root_folder}/" stripped off
//                    (empty string when the entry IS the root marker)
//   None           - the entry lives outside the root folder
//
// Example:
//   strip_root_prefix("acme-widgets-ab12/src/main.rs", "acme-widgets-ab12")
//     -> Some("src/main.rs")
pub fn strip_root_prefix<'a>(entry_name: &'a str, root_folder: &str) -> Option<&'a str> {
    entry_name
        .strip_prefix(root_folder)?
        .strip_prefix('/')
        // "{root}/" strips down to "", which is still inside the root;
        // a name like "{root}more/..." fails the '/' strip and is rejected
        .or_else(|| if entry_name == root_folder { Some("") } else { None })
}

// Extracts the archive into target_dir, stripping the root wrapper folder
//
// Parameters:
//   archive_path: the ZIP file the fetcher wrote to the temp dir
//   target_dir: pre-existing destination directory (never deleted or moved)
//
// Returns: Ok(()) once every entry is materialized and the archive is
// deleted, or PipelineError::Archive on a corrupt archive or write failure.
//
// There is no rollback: a mid-way failure leaves already-written files in
// place, and leaves the source archive on disk.
pub fn extract(archive_path: &Path, target_dir: &Path) -> Result<(), PipelineError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.len() > 0 {
        // The root wrapper folder is the first path segment of the first
        // entry - the convention every zipball archive follows
        let root_folder = {
            let first = archive.by_index(0)?;
            first
                .name()
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string()
        };

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let entry_name = entry.name().to_string();

            // Entries outside the root folder shouldn't occur in a
            // well-formed zipball; ignore them rather than erroring
            let Some(relative) = strip_root_prefix(&entry_name, &root_folder) else {
                continue;
            };

            // The bare root marker itself produces nothing
            if relative.is_empty() {
                continue;
            }

            let destination = target_dir.join(relative);

            if entry_name.ends_with('/') {
                // Directory entry: create it (and parents), idempotently
                fs::create_dir_all(&destination)?;
            } else {
                // File entry: make sure the parent chain exists, then
                // write the full decompressed content, overwriting any
                // existing file at that path
                if let Some(parent) = destination.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut output = File::create(&destination)?;
                io::copy(&mut entry, &mut output)?;
            }
        }
    }

    // Everything materialized - the archive has served its purpose.
    // This runs only on the success path: any earlier ? skips it.
    fs::remove_file(archive_path)?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the <'a> on strip_root_prefix?
//    - A lifetime parameter: the returned &str borrows from entry_name
//    - The compiler checks the slice can't outlive the string it points into
//    - This avoids allocating a new String for every entry
//
// 2. What is let-else?
//    - `let Some(x) = ... else { continue; }` unpacks an Option
//    - If it's None, the else block runs (here: skip to the next entry)
//    - Cleaner than a match when the None case just bails
//
// 3. Why io::copy instead of reading into a Vec?
//    - io::copy streams from the decompressor into the file in chunks
//    - No need to hold a whole file in memory
//
// 4. Why does remove_file come last?
//    - Deleting the archive is the "commit" of this operation
//    - Any failure above returns early via ?, keeping the archive around
//      so the user can diagnose or re-run extraction
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    // Builds a ZIP at `path` from (name, content) pairs
    // A None content marks a directory entry
    fn build_zip(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for (name, content) in entries {
            match content {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes).unwrap();
                }
                None => {
                    writer.add_directory(*name, options).unwrap();
                }
            }
        }

        writer.finish().unwrap();
    }

    #[test]
    fn test_strip_root_prefix_inside_root() {
        assert_eq!(
            strip_root_prefix("acme-widgets-ab12/src/main.rs", "acme-widgets-ab12"),
            Some("src/main.rs")
        );
    }

    #[test]
    fn test_strip_root_prefix_root_marker_is_empty() {
        assert_eq!(strip_root_prefix("root/", "root"), Some(""));
        assert_eq!(strip_root_prefix("root", "root"), Some(""));
    }

    #[test]
    fn test_strip_root_prefix_outside_root() {
        assert_eq!(strip_root_prefix("stray/file.txt", "root"), None);
        // Same leading characters but a different folder
        assert_eq!(strip_root_prefix("rootish/file.txt", "root"), None);
    }

    #[test]
    fn test_extract_strips_wrapper_and_preserves_bytes() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let archive = scratch.path().join("template.zip");
        let content: &[u8] = b"fn main() { println!(\"hi\"); }\n";
        build_zip(
            &archive,
            &[
                ("acme-tpl-ab12/", None),
                ("acme-tpl-ab12/a/", None),
                ("acme-tpl-ab12/a/b.txt", Some(content)),
            ],
        );

        extract(&archive, &target).unwrap();

        // Wrapper folder is gone, content landed one level up
        assert_eq!(fs::read(target.join("a/b.txt")).unwrap(), content);
        assert!(!target.join("acme-tpl-ab12").exists());
        // Archive consumed on success
        assert!(!archive.exists());
    }

    #[test]
    fn test_extract_directory_only_archive() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let archive = scratch.path().join("dirs.zip");
        build_zip(
            &archive,
            &[("root/", None), ("root/x/", None), ("root/x/y/", None)],
        );

        extract(&archive, &target).unwrap();

        assert!(target.join("x/y").is_dir());

        // The tree contains directories and nothing else
        let files: Vec<_> = walk_files(&target);
        assert!(files.is_empty(), "expected no files, found {:?}", files);
    }

    #[test]
    fn test_extract_empty_archive_leaves_target_untouched() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let archive = scratch.path().join("empty.zip");
        build_zip(&archive, &[]);

        extract(&archive, &target).unwrap();

        assert!(fs::read_dir(&target).unwrap().next().is_none());
        // Even with nothing to extract, the archive is still consumed
        assert!(!archive.exists());
    }

    #[test]
    fn test_extract_overwrites_existing_files_idempotently() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let entries: &[(&str, Option<&[u8]>)] = &[
            ("root/", None),
            ("root/a.txt", Some(b"fresh".as_slice())),
            ("root/sub/", None),
            ("root/sub/b.txt", Some(b"nested".as_slice())),
        ];

        // A stale file at the same path gets overwritten, not appended to
        fs::write(target.join("a.txt"), b"stale and longer than fresh").unwrap();

        let archive = scratch.path().join("again.zip");
        build_zip(&archive, entries);
        extract(&archive, &target).unwrap();
        let first_pass = walk_files(&target);

        // Same archive content, same target: second run must be a no-op
        build_zip(&archive, entries);
        extract(&archive, &target).unwrap();
        let second_pass = walk_files(&target);

        assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"fresh");
        assert_eq!(fs::read(target.join("sub/b.txt")).unwrap(), b"nested");
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_extract_ignores_entries_outside_root() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let archive = scratch.path().join("stray.zip");
        build_zip(
            &archive,
            &[
                ("root/", None),
                ("root/kept.txt", Some(b"kept".as_slice())),
                ("stray/dropped.txt", Some(b"dropped".as_slice())),
            ],
        );

        extract(&archive, &target).unwrap();

        assert!(target.join("kept.txt").exists());
        assert!(!target.join("dropped.txt").exists());
        assert!(!target.join("stray").exists());
    }

    #[test]
    fn test_extract_corrupt_archive_keeps_source() {
        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        let archive = scratch.path().join("garbage.zip");
        fs::write(&archive, b"this is not a zip file at all").unwrap();

        let err = extract(&archive, &target).unwrap_err();
        assert!(matches!(err, PipelineError::Archive(_)));

        // Left in place for diagnosis
        assert!(archive.exists());
        // And nothing was written to the target
        assert!(fs::read_dir(&target).unwrap().next().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_midway_failure_keeps_archive_and_prior_files() {
        use std::os::unix::fs::PermissionsExt;

        let scratch = tempdir().unwrap();
        let target = scratch.path().join("project");
        fs::create_dir_all(&target).unwrap();

        // A read-only directory makes the second file's write fail
        let blocked_dir = target.join("sub");
        fs::create_dir_all(&blocked_dir).unwrap();
        fs::set_permissions(&blocked_dir, fs::Permissions::from_mode(0o555)).unwrap();

        let archive = scratch.path().join("blocked.zip");
        build_zip(
            &archive,
            &[
                ("root/", None),
                ("root/first.txt", Some(b"written first".as_slice())),
                ("root/sub/blocked.txt", Some(b"never lands".as_slice())),
            ],
        );

        let err = extract(&archive, &target).unwrap_err();
        assert!(matches!(err, PipelineError::Archive(_)));

        // No rollback of what already landed, and the archive survives
        assert_eq!(fs::read(target.join("first.txt")).unwrap(), b"written first");
        assert!(archive.exists());

        // Restore permissions so the tempdir can clean itself up
        fs::set_permissions(&blocked_dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    // Collects every file (not directory) under root, as sorted
    // (relative path, content) pairs - handy for tree comparisons
    fn walk_files(root: &Path) -> Vec<(String, Vec<u8>)> {
        fn visit(dir: &Path, root: &Path, out: &mut Vec<(String, Vec<u8>)>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    visit(&path, root, out);
                } else {
                    let relative = path
                        .strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .into_owned();
                    out.push((relative, fs::read(&path).unwrap()));
                }
            }
        }

        let mut out = Vec::new();
        visit(root, root, &mut out);
        out.sort();
        out
    }
}
