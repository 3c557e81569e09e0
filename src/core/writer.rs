use crate::domain::ports::Storage;
use crate::utils::error::{DmxError, Result};

pub const DEFAULT_FILE_NAME: &str = "DMX_addresses.csv";

/// `1;5;9;` for `[1, 5, 9]`: one single-field record per address, `;` as the record
/// terminator and never quoted.
pub fn serialize_addresses(addresses: &[i64]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b';'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    for address in addresses {
        writer.write_record([address.to_string()])?;
    }

    writer
        .into_inner()
        .map_err(|e| DmxError::IoError(e.into_error()))
}

/// Writes the list to `file_name` in `storage`.
///
/// Nothing is created or touched for an empty list; `Ok(None)` is returned instead.
pub fn write_addresses<S: Storage>(
    storage: &S,
    file_name: &str,
    addresses: &[i64],
) -> Result<Option<String>> {
    if addresses.is_empty() {
        tracing::info!("No addresses to write, skipping {}", file_name);
        return Ok(None);
    }

    let data = serialize_addresses(addresses)?;
    let path = storage.write_file(file_name, &data)?;
    tracing::info!("📁 Wrote {} address(es) to {}", addresses.len(), path);

    Ok(Some(path))
}
