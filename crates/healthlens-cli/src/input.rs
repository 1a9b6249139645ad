use anyhow::{Context, Result};
use std::io::Read;

/// Marker for reading the dump from standard input.
pub const STDIN_MARKER: &str = "-";

/// Read the whole dump into memory. Invalid UTF-8 is replaced, not rejected.
pub fn read_dump(input: &str) -> Result<String> {
    let bytes = if input == STDIN_MARKER {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read dump from stdin")?;
        buf
    } else {
        std::fs::read(input).with_context(|| format!("Failed to read dump file {}", input))?
    };

    tracing::debug!(bytes = bytes.len(), "read dump");
    Ok(decode(&bytes))
}

pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = decode(b"sps1 UP\n\xff\xfe sps2 DOWN\n");
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("sps2 DOWN"));
    }

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dump.txt");
        std::fs::write(&path, "hello\n").unwrap();
        assert_eq!(read_dump(path.to_str().unwrap()).unwrap(), "hello\n");
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_dump("/nonexistent/healthlens/dump.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read dump file"));
    }
}
