use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a JSON file of loan terms and deserialise it into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    debug!(path = %resolved.display(), bytes = contents.len(), "read input file");

    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", resolved.display(), e))?;
    Ok(value)
}

/// Resolve a relative path against the working directory and require a
/// regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }
    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emi_core::LoanInput;
    use rust_decimal::Decimal;

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_json::<LoanInput>("does/not/exist.json").unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_reads_loan_terms() {
        let path = std::env::temp_dir().join(format!("emi-input-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"amount": "10000", "installments": 12, "annual_rate_percent": "10"}"#,
        )
        .unwrap();

        let input: LoanInput = read_json(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(input.amount, Decimal::from(10000));
        assert_eq!(input.installments, 12);
        assert_eq!(input.annual_rate_percent, Decimal::from(10));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = std::env::temp_dir();
        let err = read_json::<LoanInput>(dir.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Not a file"));
    }
}
