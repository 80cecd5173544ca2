use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Atomically creates a file with the given contents, overwriting it if
/// one exists.
///
/// The buffer is first written to a temporary file in the same directory
/// as the destination, synced to disk and then renamed into place, so the
/// destination path is never observable in a partially written state.
pub fn safe_write_all<P: AsRef<Path>, B: AsRef<[u8]>>(path: P, buf: B) -> io::Result<()> {
    let path = path.as_ref();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp_file = NamedTempFile::new_in(dir)?;
    tmp_file.write_all(buf.as_ref())?;
    tmp_file.flush()?;
    tmp_file.as_file().sync_all()?;

    tmp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("certificate.pem");

        safe_write_all(&path, b"-----BEGIN CERTIFICATE-----\n").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "-----BEGIN CERTIFICATE-----\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("privatekey.pem");

        safe_write_all(&path, b"first").unwrap();
        safe_write_all(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("certificate.pem");

        safe_write_all(&path, b"contents").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
