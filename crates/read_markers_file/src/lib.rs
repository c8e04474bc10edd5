// crates/read_markers_file/src/lib.rs

use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Reads the whole markers export at `file_path` and returns it as text.
///
/// Line endings are normalised with [`normalize_newlines`], so CRLF and
/// lone-CR exports read the same as LF ones.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its bytes are
/// not valid UTF-8.
pub fn read_markers_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path_ref = file_path.as_ref();
    let bytes = fs::read(file_path_ref)
        .with_context(|| format!("Error opening file {}", file_path_ref.display()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), file_path_ref.display());

    let text = String::from_utf8(bytes)
        .with_context(|| format!("File {} is not valid UTF-8", file_path_ref.display()))?;
    Ok(normalize_newlines(&text))
}

/// Turns `\r\n` and then any remaining lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_entire_file() {
        // Create a temporary file with session metadata and the listing header.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let content = "SESSION NAME:\tDemo\n\nM A R K E R S  L I S T I N G\n";
        write!(temp_file, "{}", content).expect("Failed to write to temp file");

        let result = read_markers_file(temp_file.path()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_keeps_non_ascii_text() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let content = "1  00:00:00:00  0  Samples  Café scène\tÜberblick";
        write!(temp_file, "{}", content).expect("Failed to write to temp file");

        let result = read_markers_file(temp_file.path()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_crlf_becomes_lf() {
        // Create a file with Windows line endings.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let content = "M A R K E R S  L I S T I N G\r\n#\tLOC\r\n12  00:00:01:05  130  Digital  Chapter One\t\tOpening shot.\r\n";
        write!(temp_file, "{}", content).expect("Failed to write to temp file");

        let result = read_markers_file(temp_file.path()).unwrap();
        assert!(!result.contains('\r'));
        assert_eq!(
            result,
            "M A R K E R S  L I S T I N G\n#\tLOC\n12  00:00:01:05  130  Digital  Chapter One\t\tOpening shot.\n"
        );
    }

    #[test]
    fn test_lone_cr_becomes_lf() {
        // Classic Mac exports separate lines with a bare CR.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "first\rsecond\r\rfourth").expect("Failed to write to temp file");

        let result = read_markers_file(temp_file.path()).unwrap();
        assert_eq!(result, "first\nsecond\n\nfourth");
    }

    #[test]
    fn test_normalize_newlines_mixed_endings() {
        // A CRLF pair must become a single LF, not two.
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("\r\n\r\n"), "\n\n");
    }

    #[test]
    fn test_invalid_utf8() {
        // Write bytes that cannot be decoded as UTF-8.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(&[0x4d, 0x41, 0xff, 0xfe, 0x52])
            .expect("Failed to write to temp file");

        let err_msg = read_markers_file(temp_file.path()).unwrap_err().to_string();
        assert!(err_msg.contains("is not valid UTF-8"));
    }

    #[test]
    fn test_non_existent_file() {
        // Pass a non-existent file path.
        let fake_path = Path::new("non_existent_markers.txt");
        let result = read_markers_file(fake_path);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Error opening file"));
    }
}
