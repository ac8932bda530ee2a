//! Page and cell dimensions with column-major cell placement

use crate::io::error::{Result, invalid_configuration};

/// Centimetres per inch, for converting print sizes to pixels
pub const CM_PER_INCH: f64 = 2.54;

/// Pixels per centimetre at the given resolution
pub fn dots_per_cm(dpi: u32) -> f64 {
    f64::from(dpi) / CM_PER_INCH
}

/// Whole pixels covering `cm` centimetres at the given resolution
pub fn cm_to_pixels(cm: f64, dpi: u32) -> u32 {
    (cm * dots_per_cm(dpi)).floor() as u32
}

/// Fixed page layout: a grid of equally sized cells inside a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGeometry {
    /// Page width in pixels
    pub page_width: u32,
    /// Page height in pixels
    pub page_height: u32,
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
    /// Number of grid columns
    pub columns: u32,
    /// Number of grid rows
    pub rows: u32,
}

impl PageGeometry {
    /// Geometry whose page is exactly the cell grid
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any dimension is zero or the page overflows `u32`
    pub fn new(cell_width: u32, cell_height: u32, columns: u32, rows: u32) -> Result<Self> {
        let page_width = cell_width.checked_mul(columns).ok_or_else(|| {
            invalid_configuration("columns", &columns, &"page width overflows")
        })?;
        let page_height = cell_height
            .checked_mul(rows)
            .ok_or_else(|| invalid_configuration("rows", &rows, &"page height overflows"))?;
        Self::with_page(
            page_width,
            page_height,
            cell_width,
            cell_height,
            columns,
            rows,
        )
    }

    /// Geometry with an explicit page size
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any dimension is zero or the grid
    /// does not fit inside the page
    pub fn with_page(
        page_width: u32,
        page_height: u32,
        cell_width: u32,
        cell_height: u32,
        columns: u32,
        rows: u32,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("cell_width", cell_width),
            ("cell_height", cell_height),
            ("columns", columns),
            ("rows", rows),
        ] {
            if value == 0 {
                return Err(invalid_configuration(parameter, &value, &"must be positive"));
            }
        }

        let grid_fits = u64::from(cell_width) * u64::from(columns) <= u64::from(page_width)
            && u64::from(cell_height) * u64::from(rows) <= u64::from(page_height);
        if !grid_fits {
            return Err(invalid_configuration(
                "page",
                &format!("{page_width}x{page_height}"),
                &format!("cannot hold {columns}x{rows} cells of {cell_width}x{cell_height}"),
            ));
        }

        Ok(Self {
            page_width,
            page_height,
            cell_width,
            cell_height,
            columns,
            rows,
        })
    }

    /// Geometry for a printed page
    ///
    /// The page is `width_cm` by `height_cm` at `dpi`; cells split the page
    /// minus a `field` pixel margin evenly between columns and rows.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the page is not larger than the field
    /// or the resulting cells are empty
    pub fn from_print(
        dpi: u32,
        width_cm: f64,
        height_cm: f64,
        field: u32,
        columns: u32,
        rows: u32,
    ) -> Result<Self> {
        let page_width = cm_to_pixels(width_cm, dpi);
        let page_height = cm_to_pixels(height_cm, dpi);
        if page_width <= field || page_height <= field {
            return Err(invalid_configuration(
                "field",
                &field,
                &format!("leaves no room on a {page_width}x{page_height} page"),
            ));
        }
        if columns == 0 || rows == 0 {
            return Err(invalid_configuration(
                "grid",
                &format!("{columns}x{rows}"),
                &"must be positive",
            ));
        }

        Self::with_page(
            page_width,
            page_height,
            (page_width - field) / columns,
            (page_height - field) / rows,
            columns,
            rows,
        )
    }

    /// Number of cells the grid holds
    pub const fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Top-left pixel of the cell at `index`, filling columns top to bottom
    pub const fn cell_origin(&self, index: usize) -> (u32, u32) {
        let rows = self.rows as usize;
        let column = (index / rows) as u32;
        let row = (index % rows) as u32;
        (column * self.cell_width, row * self.cell_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
