//! Reading `products.json` and writing the multi-sheet workbook.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use vegscan_core::Product;

use crate::error::ExportError;
use crate::sheets::{cooking_sheet, products_sheet, Sheet};

/// What [`export_products`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub products: usize,
    pub sheets: Vec<String>,
}

/// Reads the collector's JSON array.
///
/// # Errors
///
/// - [`ExportError::MissingInput`] if `path` does not exist.
/// - [`ExportError::Io`] if it cannot be read.
/// - [`ExportError::Json`] if it is not a JSON array of products.
pub fn read_products(path: &Path) -> Result<Vec<Product>, ExportError> {
    if !path.exists() {
        return Err(ExportError::MissingInput {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ExportError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Writes `sheets` in order to a new workbook at `path`, replacing any
/// existing file. Header rows are bold; columns are auto-fitted.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if a sheet name is invalid, the data exceeds
/// worksheet limits, or the file cannot be saved.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, column(col)?, header, &header_format)?;
        }

        for (idx, cells) in sheet.rows.iter().enumerate() {
            let row = u32::try_from(idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, value) in cells.iter().enumerate() {
                worksheet.write_string(row, column(col)?, value)?;
            }
        }

        worksheet.autofit();
    }

    workbook.save(path)?;
    Ok(())
}

fn column(idx: usize) -> Result<u16, XlsxError> {
    u16::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

/// Reads `input`, projects it into the "Products" and "Cooking Methods"
/// sheets and writes them to `output`.
///
/// Nothing is written unless the input was read and parsed successfully.
///
/// # Errors
///
/// Propagates [`read_products`] and [`write_workbook`] errors.
pub fn export_products(input: &Path, output: &Path) -> Result<ExportSummary, ExportError> {
    let products = read_products(input)?;
    tracing::debug!(input = %input.display(), count = products.len(), "products loaded");

    let sheets = vec![products_sheet(&products), cooking_sheet(&products)];
    write_workbook(output, &sheets)?;

    Ok(ExportSummary {
        output: output.to_path_buf(),
        products: products.len(),
        sheets: sheets.into_iter().map(|s| s.name).collect(),
    })
}

#[cfg(test)]
#[path = "workbook_test.rs"]
mod tests;
