use std::fs;
use std::io;
use std::path::Path;

/// Mirror `src` into `dst`, wiping anything already at `dst` first.
///
/// A full wipe rather than a merge: files deleted at the source do not
/// survive into the next build.
pub fn sync_dir(src: &Path, dst: &Path) -> io::Result<()> {
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        println!(" * {} -> {}", src_path.display(), dst_path.display());
        if src_path.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_nested_trees() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dst = dir.path().join("public");
        fs::create_dir_all(src.join("css")).unwrap();
        fs::write(src.join("index.css"), "body {}").unwrap();
        fs::write(src.join("css/extra.css"), "p {}").unwrap();

        sync_dir(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.join("css/extra.css")).unwrap(), "p {}");
    }

    #[test]
    fn resync_drops_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dst = dir.path().join("public");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("kept.txt"), "kept").unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("stale.txt"), "stale").unwrap();

        sync_dir(&src, &dst).unwrap();

        assert!(dst.join("kept.txt").exists());
        assert!(!dst.join("stale.txt").exists());
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = sync_dir(&dir.path().join("nope"), &dir.path().join("out"));
        assert!(result.is_err());
    }
}
