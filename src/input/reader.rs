use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct InputReader;

impl InputReader {
    /// Reads a whole UTF-8 text file.
    pub fn read(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;

        String::from_utf8(bytes)
            .with_context(|| format!("Input file is not valid UTF-8: {}", path.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let content = InputReader::read(temp_file.path()).unwrap();
        assert_eq!(content, "Hello, World!\n");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Path::new("/nonexistent/path/to/file.txt"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "Привіт, світе!\nこんにちは🌍";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read(temp_file.path()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let content = InputReader::read(temp_file.path()).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let result = InputReader::read(temp_file.path());
        assert!(result.unwrap_err().to_string().contains("not valid UTF-8"));
    }
}
