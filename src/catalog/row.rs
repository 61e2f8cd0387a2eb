//! Raw Row Module
//!
//! Fixed-arity view over one spreadsheet row of loosely typed cells.

use serde::Deserialize;

// == Column ==
/// Positional columns of the product sheet, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    PriceCents,
    Currency,
    Type,
    Category,
    Description,
    ImageUrl,
    InStock,
}

/// Number of columns a product row spans (A through I).
pub const COLUMN_COUNT: usize = 9;

impl Column {
    /// All columns in sheet order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Id,
        Column::Name,
        Column::PriceCents,
        Column::Currency,
        Column::Type,
        Column::Category,
        Column::Description,
        Column::ImageUrl,
        Column::InStock,
    ];

    /// Zero-based position of the column within a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header label used in the sheet and in log output.
    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::PriceCents => "priceCents",
            Column::Currency => "currency",
            Column::Type => "type",
            Column::Category => "category",
            Column::Description => "description",
            Column::ImageUrl => "imageUrl",
            Column::InStock => "inStock",
        }
    }
}

// == Cell ==
/// One cell value as returned by the Sheets values API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// Textual form of the cell, trimmed.
    ///
    /// Integral numbers render without a fractional part so that a numeric
    /// `1500` reads the same as the text `"1500"`.
    pub fn to_trimmed_string(&self) -> String {
        match self {
            Cell::Text(text) => text.trim().to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

// == Raw Row ==
/// A sheet row padded or truncated to exactly [`COLUMN_COUNT`] cells.
///
/// Missing trailing cells are absent (`None`); surplus cells are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: [Option<Cell>; COLUMN_COUNT],
}

impl RawRow {
    /// Builds a row from the cells the API returned.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let mut row = Self::default();
        for (slot, cell) in row.cells.iter_mut().zip(cells) {
            *slot = Some(cell);
        }
        row
    }

    /// Cell at the given column, if present.
    pub fn get(&self, column: Column) -> Option<&Cell> {
        self.cells[column.index()].as_ref()
    }

    pub fn id(&self) -> Option<&Cell> {
        self.get(Column::Id)
    }

    pub fn name(&self) -> Option<&Cell> {
        self.get(Column::Name)
    }

    pub fn price_cents(&self) -> Option<&Cell> {
        self.get(Column::PriceCents)
    }

    pub fn currency(&self) -> Option<&Cell> {
        self.get(Column::Currency)
    }

    pub fn product_type(&self) -> Option<&Cell> {
        self.get(Column::Type)
    }

    pub fn category(&self) -> Option<&Cell> {
        self.get(Column::Category)
    }

    pub fn description(&self) -> Option<&Cell> {
        self.get(Column::Description)
    }

    pub fn image_url(&self) -> Option<&Cell> {
        self.get(Column::ImageUrl)
    }

    pub fn in_stock(&self) -> Option<&Cell> {
        self.get(Column::InStock)
    }
}

impl<C: Into<Cell>> FromIterator<C> for RawRow {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cells(iter.into_iter().map(Into::into).collect())
    }
}
