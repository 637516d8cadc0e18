/// Use cases module containing application business logic orchestration
mod generate_workbook;

pub use generate_workbook::GenerateWorkbookUseCase;
