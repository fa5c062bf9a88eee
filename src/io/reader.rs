//! Upload reading.
//!
//! Uploads are handed to extraction as raw bytes; nothing here assumes
//! UTF-8. Large files are memory-mapped and the mapping itself is what the
//! extractors read from.

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Uploads at or above this size are memory-mapped (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum upload size (200MB).
const MAX_UPLOAD_SIZE: u64 = 200 * 1024 * 1024;

/// Raw upload bytes, either held on the heap or mapped from disk.
///
/// Dereferences to `[u8]`, so extractors never care which one they got.
pub enum UploadBytes {
    /// Bytes read into memory.
    Owned(Vec<u8>),
    /// Read-only mapping of the upload file.
    Mapped(Mmap),
}

impl UploadBytes {
    /// Returns `true` if the bytes come from a file mapping.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

impl Deref for UploadBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Mapped(map) => map,
        }
    }
}

impl AsRef<[u8]> for UploadBytes {
    fn as_ref(&self) -> &[u8] {
        &**self
    }
}

impl From<Vec<u8>> for UploadBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Owned(bytes)
    }
}

impl PartialEq for UploadBytes {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for UploadBytes {}

impl fmt::Debug for UploadBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadBytes")
            .field("mapped", &self.is_mapped())
            .field("len", &self.len())
            .finish()
    }
}

/// An opened upload file, checked against the size limit.
///
/// # Examples
///
/// ```no_run
/// use interview_analyzer::io::FileReader;
///
/// let bytes = FileReader::open("transcript.pdf")?.read()?;
/// println!("{} bytes", bytes.len());
/// # Ok::<(), interview_analyzer::Error>(())
/// ```
pub struct FileReader {
    file: File,
    size: u64,
    path: String,
}

impl FileReader {
    /// Opens an upload for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] for a missing path, and
    /// [`IoError::ReadFailed`] for directories, unreadable files, or files
    /// over the upload limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.to_string_lossy().to_string();
        let failed = |reason: String| IoError::ReadFailed {
            path: display.clone(),
            reason,
        };

        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: display.clone(),
            }
            .into());
        }

        let file = File::open(path).map_err(|e| failed(e.to_string()))?;
        let metadata = file.metadata().map_err(|e| failed(e.to_string()))?;
        if metadata.is_dir() {
            return Err(failed("is a directory".to_string()).into());
        }
        let size = metadata.len();
        if size > MAX_UPLOAD_SIZE {
            return Err(failed(format!(
                "upload too large: {size} bytes (max: {MAX_UPLOAD_SIZE} bytes)"
            ))
            .into());
        }

        Ok(Self {
            file,
            size,
            path: display,
        })
    }

    /// Size of the upload in bytes, as reported when it was opened.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Path the upload was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the upload, mapping it instead when it is large.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MmapFailed`] or [`IoError::ReadFailed`] if the
    /// contents cannot be obtained.
    pub fn read(self) -> Result<UploadBytes> {
        if self.size >= MMAP_THRESHOLD {
            self.map()
        } else {
            self.read_owned()
        }
    }

    #[allow(unsafe_code)]
    fn map(self) -> Result<UploadBytes> {
        // Safety: the mapping is read-only and lives only as long as one
        // upload is processed; a concurrent writer truncating the file is
        // outside what this tool supports.
        let map = unsafe { Mmap::map(&self.file) }.map_err(|e| IoError::MmapFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(UploadBytes::Mapped(map))
    }

    fn read_owned(mut self) -> Result<UploadBytes> {
        let mut bytes = Vec::with_capacity(usize::try_from(self.size).unwrap_or_default());
        self.file
            .read_to_end(&mut bytes)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(UploadBytes::Owned(bytes))
    }
}

/// Reads an upload's raw bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_upload<P: AsRef<Path>>(path: P) -> Result<UploadBytes> {
    FileReader::open(path)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_small_upload_is_owned() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.txt");
        std::fs::write(&file_path, "Q: Hi. A: Hello.").unwrap();

        let bytes = read_upload(&file_path).unwrap();
        assert!(!bytes.is_mapped());
        assert_eq!(&*bytes, b"Q: Hi. A: Hello.");
    }

    #[test]
    fn test_binary_upload_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("blob.pdf");
        let data = vec![0x25, 0x50, 0xff, 0x00, 0xfe];
        std::fs::write(&file_path, &data).unwrap();

        assert_eq!(read_upload(&file_path).unwrap(), UploadBytes::from(data));
    }

    #[test]
    fn test_large_upload_is_mapped_without_copy() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.txt");
        let mut content = "x".repeat(2 * 1024 * 1024);
        content.push_str("END");
        std::fs::write(&file_path, &content).unwrap();

        let bytes = read_upload(&file_path).unwrap();
        assert!(bytes.is_mapped());
        assert_eq!(bytes.len(), content.len());
        assert!(bytes.ends_with(b"END"));
    }

    #[test]
    fn test_debug_shows_length_only() {
        let bytes = UploadBytes::from(b"private words".to_vec());
        let debug = format!("{bytes:?}");
        assert!(!debug.contains("private"));
        assert!(debug.contains("len: 13"));
    }

    #[test]
    fn test_nonexistent_upload() {
        let result = read_upload("/nonexistent/path/transcript.txt");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_upload(temp_dir.path());
        assert!(matches!(result, Err(Error::Io(IoError::ReadFailed { .. }))));
    }

    #[test]
    fn test_reader_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        std::fs::write(&file_path, "Hello").unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert_eq!(reader.size(), 5);
        assert!(reader.path().contains("test.txt"));
    }
}
