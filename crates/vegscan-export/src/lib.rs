pub mod cooking;
pub mod error;
pub mod sheets;
pub mod workbook;

pub use cooking::{suggest_cooking_methods, NO_SUGGESTION};
pub use error::ExportError;
pub use sheets::{cooking_sheet, products_sheet, Sheet};
pub use workbook::{export_products, read_products, write_workbook, ExportSummary};
