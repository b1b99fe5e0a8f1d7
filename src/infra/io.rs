use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

/// Source text backed by either a memory map (large files) or an owned
/// buffer (everything else).
pub enum SourceText {
    Mapped(Mmap),
    Buffered(String),
}

impl SourceText {
    /// Borrow the contents as UTF-8 text.
    ///
    /// Buffered content was validated on read; mapped content is
    /// validated here so an invalid file surfaces as an error instead
    /// of silently comparing as empty.
    pub fn text(&self) -> Result<&str> {
        match self {
            SourceText::Mapped(map) => {
                std::str::from_utf8(map).context("memory-mapped file is not valid UTF-8")
            }
            SourceText::Buffered(s) => Ok(s.as_str()),
        }
    }
}

/// Read a source file, memory-mapping anything above 1 MiB.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceText> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() > MMAP_THRESHOLD {
        let file =
            File::open(path).with_context(|| format!("Failed to open file {}", path.display()))?;

        // Safety: the map is only ever read, never written through
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map {}", path.display()))?;

        Ok(SourceText::Mapped(map))
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        Ok(SourceText::Buffered(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_files_are_buffered() {
        let dir = std::env::temp_dir().join("simcheck-io-test");
        std::fs::create_dir_all(&dir).expect("tempdir");
        let path = dir.join("small.py");
        std::fs::write(&path, "x = 1\n").expect("write");

        let source = read_source(&path).expect("read");
        assert!(matches!(source, SourceText::Buffered(_)));
        assert_eq!(source.text().expect("utf-8"), "x = 1\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_source("definitely/not/here.py").is_err());
    }
}
