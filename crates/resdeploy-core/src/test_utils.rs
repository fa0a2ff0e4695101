//! Builders for in-memory test archives.

#![allow(clippy::unwrap_used)]

use std::io::Cursor;
use std::io::Write;

/// Builder for ZIP test archives with files and directory markers.
pub struct ZipTestBuilder {
    writer: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    pub fn new() -> Self {
        Self {
            writer: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options() -> zip::write::SimpleFileOptions {
        zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644)
    }

    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        self.writer.start_file(path, Self::options()).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    pub fn add_directory(mut self, path: &str) -> Self {
        self.writer.add_directory(path, Self::options()).unwrap();
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}

/// Builder for TAR test archives with files, directories and symlinks.
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_size(0);
        header.set_mode(0o777);
        self.builder
            .append_link(&mut header, path, target)
            .unwrap();
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }
}
