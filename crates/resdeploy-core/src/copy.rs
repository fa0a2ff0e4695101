//! Byte copying with a reusable buffer.
//!
//! Every copy path in the crate (single resource writes, directory trees and
//! archive entries) funnels through [`copy_with_buffer`], so one buffer can be
//! shared across all entries of a bulk copy.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ResourceError;

/// Buffer size used for copying (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Heap buffer reused across copy operations.
///
/// # Examples
///
/// ```no_run
/// # use resdeploy_core::copy::{CopyBuffer, copy_with_buffer};
/// # use resdeploy_core::ResourceError;
/// # fn example() -> Result<(), ResourceError> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("style.css")?;
/// let mut output = std::fs::File::create("out/style.css")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// println!("Copied {} bytes", bytes_copied);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies everything from `reader` into `writer`, returning the byte count.
///
/// Interrupted reads are retried. The writer is not flushed; callers that
/// wrap a file in a `BufWriter` flush it themselves so flush errors surface.
///
/// # Errors
///
/// Returns [`ResourceError::Io`] if reading or writing fails.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, ResourceError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ResourceError::Io(e)),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_copy_buffer_size() {
        assert_eq!(CopyBuffer::new().size(), 64 * 1024);
        assert_eq!(CopyBuffer::default().size(), 64 * 1024);
    }

    #[test]
    fn test_copy_empty_source() {
        let mut buffer = CopyBuffer::new();
        let mut input = Cursor::new(Vec::<u8>::new());
        let mut output = Vec::new();

        let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
        assert_eq!(copied, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_copy_spans_multiple_chunks() {
        let mut buffer = CopyBuffer::new();
        let mut input_data = Vec::new();
        for i in 0..=255u8 {
            input_data.extend_from_slice(&[i; 1024]);
        }
        let mut input = Cursor::new(&input_data);
        let mut output = Vec::new();

        let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
        assert_eq!(copied, input_data.len() as u64);
        assert_eq!(output, input_data);
    }

    #[test]
    fn test_copy_retries_interrupted_reads() {
        struct Flaky {
            data: Cursor<Vec<u8>>,
            calls: usize,
        }

        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.calls += 1;
                if self.calls % 2 == 1 {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                }
                self.data.read(buf)
            }
        }

        let mut reader = Flaky {
            data: Cursor::new(b"template body".to_vec()),
            calls: 0,
        };
        let mut output = Vec::new();
        let copied = copy_with_buffer(&mut reader, &mut output, &mut CopyBuffer::new()).unwrap();

        assert_eq!(copied, 13);
        assert_eq!(output, b"template body");
    }

    #[test]
    fn test_copy_propagates_write_failure() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("no space left on device"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut input = Cursor::new(vec![1u8; 100]);
        let result = copy_with_buffer(&mut input, &mut Full, &mut CopyBuffer::new());

        match result {
            Err(ResourceError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
