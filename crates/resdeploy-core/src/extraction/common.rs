//! File writing shared by every copy path.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Writes `reader` to `dest`, replacing any existing file.
///
/// Missing parent directories are created first. When `modified` is given it
/// becomes the new file's modification time. Both handles are closed when
/// this returns, on success or failure.
pub(crate) fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    dest: &Path,
    modified: Option<SystemTime>,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(dest)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    let bytes_written = copy_with_buffer(reader, &mut writer, buffer)?;
    writer.flush()?;

    if let Some(time) = modified {
        writer.get_ref().set_modified(time)?;
    }

    Ok(bytes_written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a/b/c.txt");

        let written =
            write_file(&mut Cursor::new(b"abc"), &dest, None, &mut CopyBuffer::new()).unwrap();

        assert_eq!(written, 3);
        assert_eq!(std::fs::read(&dest).unwrap(), b"abc");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("c.txt");
        std::fs::write(&dest, "a much longer previous body").unwrap();

        write_file(&mut Cursor::new(b"new"), &dest, None, &mut CopyBuffer::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_sets_modification_time() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("c.txt");
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);

        write_file(
            &mut Cursor::new(b"x"),
            &dest,
            Some(when),
            &mut CopyBuffer::new(),
        )
        .unwrap();

        let modified = std::fs::metadata(&dest).unwrap().modified().unwrap();
        assert_eq!(modified, when);
    }
}
