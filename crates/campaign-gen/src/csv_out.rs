//! Headerless CSV output with atomic writes.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::data::{CampaignProductRow, SaleRow};
use crate::error::{GenError, GenResult};

/// Serialize rows to `path`, going through a temp file in the destination
/// directory so a half-written file never lands under the final name.
pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> GenResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file());
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| GenError::Io(e.error))?;

    Ok(())
}

/// Write the sales file and its index-correlated campaign/product mapping.
pub fn write_sales_files(
    sales_path: &Path,
    mapping_path: &Path,
    sales: &[SaleRow],
    mappings: &[CampaignProductRow],
) -> GenResult<()> {
    if sales.len() != mappings.len() {
        return Err(GenError::InvalidArgument(format!(
            "sales and mapping row counts diverge: {} vs {}",
            sales.len(),
            mappings.len()
        )));
    }

    write_rows(sales_path, sales)?;
    write_rows(mapping_path, mappings)?;
    tracing::info!(
        rows = sales.len(),
        sales_file = %sales_path.display(),
        mapping_file = %mapping_path.display(),
        "wrote sales and campaign/product files"
    );
    Ok(())
}
