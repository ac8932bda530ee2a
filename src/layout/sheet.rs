//! Sheet layout: decoy sampling and column-major cell placement
//!
//! A player sheet mixes full-confidence cells (whole fingerprint samples) with
//! decoys drawn from sub-masks of the player's fingerprint. The random
//! generator is seeded from the player id alone, so a sheet is reproducible
//! no matter which other sheets were rendered before it or in what order.

use crate::combinatorics::combinations::Combinations;
use crate::combinatorics::sampling::{SeededShuffler, cycle_to_length};
use crate::compositor::cell::Compositor;
use crate::io::error::{FingerprintError, Result, invalid_configuration};
use crate::layout::geometry::PageGeometry;
use crate::layout::plan::SamplePlan;
use crate::model::mask::Mask;
use image::{RgbImage, imageops};

/// How a sheet identifier is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetMode {
    /// Numeric id: a player sheet with decoys
    Player(u64),
    /// Any other id: every cell is the same render of the mask
    Reference,
}

impl SheetMode {
    /// Player mode for non-empty all-digit ids, reference mode otherwise
    pub fn from_id(id: &str) -> Self {
        if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
            return Self::Reference;
        }
        id.parse().map_or(Self::Reference, Self::Player)
    }
}

/// Seed for a player's decoys, derived from the global seed
///
/// # Errors
///
/// Returns a configuration error if `(player + 1) * seed` overflows
pub fn player_seed(player: u64, seed: u64) -> Result<u64> {
    player
        .checked_add(1)
        .and_then(|next| next.checked_mul(seed))
        .ok_or_else(|| {
            invalid_configuration("seed", &seed, &format!("player seed overflows for id {player}"))
        })
}

/// A cell waiting to be rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCell {
    /// Sub-mask to composite
    pub mask: Mask,
    /// Label drawn on the cell, if any
    pub label: Option<String>,
}

/// A rendered cell and its destination on the page
#[derive(Clone, Debug)]
pub struct PlacedCell {
    /// Left edge in page pixels
    pub x: u32,
    /// Top edge in page pixels
    pub y: u32,
    /// Rendered cell
    pub image: RgbImage,
}

/// Builds sheet pages from masks
pub struct SheetBuilder<'a> {
    compositor: Compositor<'a>,
    geometry: PageGeometry,
    plan: SamplePlan,
    seed: u64,
    mirror: bool,
}

impl<'a> SheetBuilder<'a> {
    /// Create a builder drawing player sheets from `plan` with global `seed`
    pub const fn new(
        compositor: Compositor<'a>,
        geometry: PageGeometry,
        plan: SamplePlan,
        seed: u64,
    ) -> Self {
        Self {
            compositor,
            geometry,
            plan,
            seed,
            mirror: false,
        }
    }

    /// Flip player sheets horizontally for printing on transparent film
    #[must_use]
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Page geometry in use
    pub const fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Decide which masks go into which cells, in final order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the plan requests more cells than the grid holds
    /// - the plan leaves cells empty or samples more than K symbols
    /// - a plan entry has no sub-masks to draw from
    /// - the player seed overflows
    pub fn plan_cells(&self, id: &str, mask: &Mask) -> Result<Vec<PlannedCell>> {
        match SheetMode::from_id(id) {
            SheetMode::Player(player) => self.plan_player_cells(player, id, mask),
            SheetMode::Reference => Ok(vec![
                PlannedCell {
                    mask: mask.clone(),
                    label: None,
                };
                self.geometry.capacity()
            ]),
        }
    }

    fn plan_player_cells(&self, player: u64, id: &str, mask: &Mask) -> Result<Vec<PlannedCell>> {
        self.check_capacity(self.plan.total_cells())?;
        let subset_size = self.compositor.subset_size();
        self.plan.validate(subset_size, self.geometry.capacity())?;

        let mut shuffler = SeededShuffler::new(player_seed(player, self.seed)?);
        let mut full_cells = Vec::new();
        let mut partial_cells = Vec::new();
        let mut labelled = false;

        for entry in self.plan.entries() {
            let mut pool: Vec<Vec<char>> =
                Combinations::new(mask.symbols(), entry.size).collect();
            if pool.is_empty() && entry.count > 0 {
                return Err(invalid_configuration(
                    "sample_plan",
                    &entry.size,
                    &format!("mask '{mask}' has no sub-masks of this size"),
                ));
            }
            shuffler.shuffle(&mut pool);

            let is_full = entry.size >= subset_size;
            let cells = cycle_to_length(&pool, entry.count)
                .into_iter()
                .enumerate()
                .map(|(index, symbols)| {
                    let label = (is_full && index == 0 && !labelled).then(|| id.to_string());
                    PlannedCell {
                        mask: Mask::from_distinct(symbols),
                        label,
                    }
                });

            if is_full {
                full_cells.extend(cells);
                labelled = labelled || entry.count > 0;
            } else {
                partial_cells.extend(cells);
            }
        }

        shuffler.shuffle(&mut partial_cells);
        full_cells.append(&mut partial_cells);
        Ok(full_cells)
    }

    /// Render every planned cell for a sheet
    ///
    /// Reference sheets render their single mask once and repeat it.
    ///
    /// # Errors
    ///
    /// Returns an error if planning or compositing fails
    pub fn render_cells(&self, id: &str, mask: &Mask) -> Result<Vec<RgbImage>> {
        if SheetMode::from_id(id) == SheetMode::Reference {
            let cell = self.compositor.render_cell(mask, false, None)?;
            return Ok(vec![cell; self.geometry.capacity()]);
        }

        self.plan_cells(id, mask)?
            .iter()
            .map(|planned| {
                self.compositor
                    .render_cell(&planned.mask, false, planned.label.as_deref())
            })
            .collect()
    }

    /// Assign page coordinates to cells, filling columns top to bottom
    ///
    /// # Errors
    ///
    /// Returns a layout overflow error if there are more cells than grid slots
    pub fn layout_cells(&self, cells: Vec<RgbImage>) -> Result<Vec<PlacedCell>> {
        self.check_capacity(cells.len())?;
        Ok(cells
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                let (x, y) = self.geometry.cell_origin(index);
                PlacedCell { x, y, image }
            })
            .collect())
    }

    /// Copy placed cells onto a background page
    pub fn compose_page(&self, placed: &[PlacedCell]) -> RgbImage {
        let mut page = RgbImage::from_pixel(
            self.geometry.page_width,
            self.geometry.page_height,
            self.compositor.palette().background,
        );
        for cell in placed {
            imageops::replace(&mut page, &cell.image, i64::from(cell.x), i64::from(cell.y));
        }
        page
    }

    /// Build the complete page for `id` and `mask`
    ///
    /// # Errors
    ///
    /// Returns an error if planning, compositing or layout fails
    #[tracing::instrument(level = "debug", skip(self, mask), fields(mask = %mask))]
    pub fn build_sheet(&self, id: &str, mask: &Mask) -> Result<RgbImage> {
        let mode = SheetMode::from_id(id);
        let cells = self.render_cells(id, mask)?;
        tracing::debug!(?mode, cells = cells.len(), "rendered cells");

        let placed = self.layout_cells(cells)?;
        let page = self.compose_page(&placed);

        if self.mirror && matches!(mode, SheetMode::Player(_)) {
            Ok(imageops::flip_horizontal(&page))
        } else {
            Ok(page)
        }
    }

    fn check_capacity(&self, requested: usize) -> Result<()> {
        let capacity = self.geometry.capacity();
        if requested > capacity {
            return Err(FingerprintError::LayoutOverflow {
                requested,
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sheet.rs"]
mod tests;
