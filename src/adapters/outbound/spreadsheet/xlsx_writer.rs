use crate::application::read_models::Sheet;
use crate::bom_structure::domain::Cell;
use crate::ports::outbound::SheetWriter;
use crate::shared::error::BomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Extension of the workbooks written by [`XlsxSheetWriter`]
pub const XLSX_EXTENSION: &str = "xlsx";

/// Largest integer a spreadsheet number (an f64) holds exactly
const MAX_EXACT_NUMBER: u64 = 1 << 53;

/// XlsxSheetWriter adapter writing sheets as an Office Open XML workbook
///
/// Text cells become strings, quantities become numeric cells so that the
/// sheets can be summed and sorted in a spreadsheet application. Quantities
/// above 2^53 (saturated rollups included) are written as text, since a
/// numeric cell would round them.
pub struct XlsxSheetWriter;

impl XlsxSheetWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(BomError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    fn build_workbook(sheets: &[Sheet]) -> std::result::Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;
            Self::write_rows(worksheet, &sheet.rows)?;
        }
        Ok(workbook)
    }

    fn write_rows(
        worksheet: &mut Worksheet,
        rows: &[Vec<Cell>],
    ) -> std::result::Result<(), XlsxError> {
        for (row_index, row) in rows.iter().enumerate() {
            let row_num = u32::try_from(row_index).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col_index, cell) in row.iter().enumerate() {
                let col_num =
                    u16::try_from(col_index).map_err(|_| XlsxError::RowColumnLimitError)?;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col_num, text.as_str())?;
                    }
                    Cell::Integer(value) if *value <= MAX_EXACT_NUMBER => {
                        worksheet.write_number(row_num, col_num, *value as f64)?;
                    }
                    Cell::Integer(value) => {
                        worksheet.write_string(row_num, col_num, value.to_string())?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for XlsxSheetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write_sheets(&self, sheets: &[Sheet], path: &Path) -> Result<()> {
        Self::validate_parent_directory(path)?;
        validate_not_symlink(path, "write")?;

        let to_error = |e: XlsxError| BomError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };
        let mut workbook = Self::build_workbook(sheets).map_err(to_error)?;
        workbook.save(path).map_err(to_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_sheets() -> Vec<Sheet> {
        vec![
            Sheet::new(
                "Indented",
                vec![
                    vec![Cell::from("Item"), Cell::from("Qty.")],
                    vec![Cell::from("1"), Cell::Integer(2)],
                ],
            ),
            Sheet::new("Flat", vec![vec![Cell::from("Part Number")]]),
        ]
    }

    #[test]
    fn test_write_sheets_roundtrip_with_calamine() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("top.xlsx");

        XlsxSheetWriter::new()
            .write_sheets(&sample_sheets(), &output_path)
            .unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&output_path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Indented", "Flat"]);

        let indented = workbook.worksheet_range("Indented").unwrap();
        assert_eq!(
            indented.get_value((0, 0)),
            Some(&Data::String("Item".to_string()))
        );
        assert_eq!(
            indented.get_value((1, 0)),
            Some(&Data::String("1".to_string()))
        );
        assert_eq!(indented.get_value((1, 1)), Some(&Data::Float(2.0)));
    }

    #[test]
    fn test_write_sheets_keeps_large_quantities_exact() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("big.xlsx");
        let sheets = vec![Sheet::new(
            "Flat",
            vec![vec![
                Cell::Integer(MAX_EXACT_NUMBER),
                Cell::Integer(MAX_EXACT_NUMBER + 1),
                Cell::Integer(u64::MAX),
            ]],
        )];

        XlsxSheetWriter::new()
            .write_sheets(&sheets, &output_path)
            .unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&output_path).unwrap();
        let flat = workbook.worksheet_range("Flat").unwrap();
        assert_eq!(
            flat.get_value((0, 0)),
            Some(&Data::Float(9_007_199_254_740_992.0))
        );
        assert_eq!(
            flat.get_value((0, 1)),
            Some(&Data::String("9007199254740993".to_string()))
        );
        assert_eq!(
            flat.get_value((0, 2)),
            Some(&Data::String("18446744073709551615".to_string()))
        );
    }

    #[test]
    fn test_write_sheets_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/top.xlsx");

        let result = XlsxSheetWriter::new().write_sheets(&sample_sheets(), &output_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_write_sheets_invalid_sheet_name() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("bad.xlsx");
        let sheets = vec![Sheet::new("bad/name", vec![])];

        let result = XlsxSheetWriter::new().write_sheets(&sheets, &output_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to write to file"));
        assert!(!output_path.exists());
    }
}
