//! Sheets Module
//!
//! Spreadsheet access: credentials, the source seam, the Google client and
//! the product repository built on top of them.

mod google;
mod repository;
mod source;

// Re-export public types
pub use google::{GoogleSheetsClient, DEFAULT_API_BASE, DEFAULT_TOKEN_URL};
pub use repository::{ProductRepository, SheetProductRepository};
pub use source::{SheetsCredentials, SpreadsheetSource};
