//! Payment-method survey loading (POS and e-commerce shares).
//!
//! Both survey files carry the same two columns; the pie chart
//! renderer consumes the rows directly.

use super::projects::require_column;
use super::schema::PaymentShare;
use crate::utils::config::{METHOD_COLUMN_NAMES, PERCENTAGE_COLUMN_NAMES};
use crate::utils::error::DataLoadError;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::path::Path;

/// Load payment shares from a survey CSV
///
/// # Errors
/// * `DataLoadError::MissingColumn` - method or percentage column absent
/// * `DataLoadError::Csv` - unreadable file, malformed CSV, or a
///   non-numeric percentage value
pub fn load_payment_shares(path: impl AsRef<Path>) -> Result<Vec<PaymentShare>, DataLoadError> {
    let path = path.as_ref();
    debug!("Loading payment survey from: {}", path.display());

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    require_column(&headers, METHOD_COLUMN_NAMES)?;
    require_column(&headers, PERCENTAGE_COLUMN_NAMES)?;

    let mut shares = Vec::new();
    for result in reader.deserialize::<PaymentShare>() {
        shares.push(result?);
    }

    debug!("Loaded {} payment shares", shares.len());
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_payment_shares() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Means of Payment,Percentage").unwrap();
        writeln!(file, "Cash,18.0").unwrap();
        writeln!(file, "Credit Card,33.5").unwrap();

        let shares = load_payment_shares(file.path()).unwrap();

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].method, "Cash");
        assert_eq!(shares[1].percentage, 33.5);
    }

    #[test]
    fn test_load_payment_shares_missing_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Means of Payment,Share").unwrap();
        writeln!(file, "Cash,18.0").unwrap();

        let result = load_payment_shares(file.path());

        assert!(matches!(result, Err(DataLoadError::MissingColumn(_))));
    }
}
