use crate::application::dto::{BomRequest, BomResponse};
use crate::application::read_models::WorkbookModelBuilder;
use crate::bom_structure::domain::{BomRow, BomTree, IgnoreSet};
use crate::bom_structure::policies::PartNumberValidator;
use crate::bom_structure::services::{BomTreeBuilder, BuildReport};
use crate::ports::outbound::{IgnoreListReader, ProgressReporter, RowSource, SheetWriter};
use crate::shared::Result;

/// GenerateWorkbookUseCase - Converts one BOM export into a two-sheet workbook
///
/// Orchestrates the conversion using generic dependency injection for all
/// infrastructure dependencies.
///
/// # Type Parameters
/// * `RS` - RowSource implementation
/// * `IR` - IgnoreListReader implementation
/// * `SW` - SheetWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateWorkbookUseCase<RS, IR, SW, PR> {
    row_source: RS,
    ignore_list_reader: IR,
    sheet_writer: SW,
    progress_reporter: PR,
    validator: PartNumberValidator,
}

impl<RS, IR, SW, PR> GenerateWorkbookUseCase<RS, IR, SW, PR>
where
    RS: RowSource,
    IR: IgnoreListReader,
    SW: SheetWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateWorkbookUseCase with injected dependencies
    pub fn new(
        row_source: RS,
        ignore_list_reader: IR,
        sheet_writer: SW,
        progress_reporter: PR,
        validator: PartNumberValidator,
    ) -> Self {
        Self {
            row_source,
            ignore_list_reader,
            sheet_writer,
            progress_reporter,
            validator,
        }
    }

    /// Executes the conversion for a single BOM file
    ///
    /// # Errors
    /// Fails when the BOM or the ignore list cannot be read, when no workbook
    /// name can be derived, or when the workbook cannot be written. Bad rows
    /// are never an error; they are counted in the response's report.
    pub fn execute(&self, request: BomRequest) -> Result<BomResponse> {
        // Step 1: Resolve the output path up front so a bad name fails fast
        let output_path = request.output_path()?;

        // Step 2: Load the ignore list and the rows
        let ignore_set = self.load_ignore_set(&request)?;
        let rows = self.read_and_report_rows(&request)?;

        // Step 3: Rebuild the hierarchy
        let (tree, report) = BomTreeBuilder::new(&self.validator, &ignore_set).build(rows);
        self.report_build(&request, &tree, &report);

        // Step 4: Write both listings
        let sheets = WorkbookModelBuilder::build(&tree);
        self.sheet_writer.write_sheets(&sheets, &output_path)?;
        self.progress_reporter
            .report(&format!("✅ Wrote {}", output_path.display()));

        Ok(BomResponse::new(tree, report, output_path))
    }

    fn load_ignore_set(&self, request: &BomRequest) -> Result<IgnoreSet> {
        let ignore_set = self
            .ignore_list_reader
            .read_ignore_set(&request.ignore_file)?;
        if !ignore_set.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Ignoring {} part number(s) from {}",
                ignore_set.len(),
                request.ignore_file.display()
            ));
        }
        Ok(ignore_set)
    }

    fn read_and_report_rows(&self, request: &BomRequest) -> Result<Vec<BomRow>> {
        self.progress_reporter.report(&format!(
            "📖 Loading BOM file: {}",
            request.bom_path.display()
        ));

        let rows = self.row_source.read_rows(&request.bom_path)?;

        self.progress_reporter
            .report(&format!("   Read {} row(s)", rows.len()));
        Ok(rows)
    }

    /// Reports row accounting, and every dropped row when requested
    fn report_build(&self, request: &BomRequest, tree: &BomTree, report: &BuildReport) {
        self.progress_reporter.report(&format!(
            "🌳 Attached {} item(s), ignored {}, dropped {}",
            report.attached,
            report.ignored,
            report.dropped_count()
        ));

        if report.dropped_count() > 0 {
            let breakdown = report
                .drop_counts()
                .iter()
                .map(|(kind, count)| format!("{}: {}", kind, count))
                .collect::<Vec<_>>()
                .join(", ");
            self.progress_reporter
                .report_error(&format!("⚠️  Dropped rows ({})", breakdown));
        }

        if request.report_dropped_rows {
            for dropped in &report.dropped {
                self.progress_reporter.report_error(&format!(
                    "   row {}: {}",
                    dropped.row_number, dropped.reason
                ));
            }
        }

        if tree.has_header_collision() {
            self.progress_reporter.report_error(
                "⚠️  Warning: a part is keyed 'Part Number' / 'Description'; \
                 it is folded into the header row of the flat sheet.",
            );
        }
    }
}
