//! Fixed grid of food cells.
//!
//! The arena is split into `grid_size x grid_size` equal cells and every cell
//! keeps a constant number of food items. Queries are cell-local: a point only
//! ever sees the food stored in the cell it falls in.

use crate::arena::Arena;
use crate::config::{ArenaConfig, FoodConfig};
use crate::cosmetics::random_food_color;
use crate::entity::FoodItem;
use glam::Vec2;
use rand::Rng;

/// Re-roll attempts when a respawn lands exactly on the old position.
const RESPAWN_ATTEMPTS: usize = 8;

/// Column/row of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub ix: usize,
    pub iy: usize,
}

impl CellIndex {
    pub const fn new(ix: usize, iy: usize) -> Self {
        Self { ix, iy }
    }
}

/// Spatial index over every food item in the arena.
pub struct FoodGrid {
    /// Food per cell, row-major (`iy * grid_size + ix`).
    cells: Vec<Vec<FoodItem>>,
    grid_size: usize,
    cell_width: f32,
    cell_height: f32,
    food_per_cell: usize,
    min_value: u32,
    max_value: u32,
}

impl FoodGrid {
    /// Create an empty grid covering `arena`.
    pub fn new(arena: &Arena, grid_size: usize, food_per_cell: usize, food: &FoodConfig) -> Self {
        let grid_size = grid_size.max(1);
        Self {
            cells: vec![Vec::with_capacity(food_per_cell); grid_size * grid_size],
            grid_size,
            cell_width: arena.width / grid_size as f32,
            cell_height: arena.height / grid_size as f32,
            food_per_cell,
            min_value: food.min_value,
            max_value: food.max_value.max(food.min_value),
        }
    }

    /// Create a grid and fill every cell.
    pub fn populated(
        arena: &Arena,
        config: &ArenaConfig,
        food: &FoodConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let mut grid = Self::new(arena, config.grid_size, config.food_per_cell, food);
        grid.populate(rng);
        grid
    }

    /// Discard all food and fill every cell with `food_per_cell` fresh items.
    pub fn populate(&mut self, rng: &mut impl Rng) {
        for iy in 0..self.grid_size {
            for ix in 0..self.grid_size {
                let cell = CellIndex::new(ix, iy);
                let items: Vec<FoodItem> = (0..self.food_per_cell)
                    .map(|_| self.spawn_in(cell, rng))
                    .collect();
                self.cells[iy * self.grid_size + ix] = items;
            }
        }
    }

    /// Storage slot of `cell`, or `None` if it lies outside the grid.
    #[inline]
    fn slot(&self, cell: CellIndex) -> Option<usize> {
        (cell.ix < self.grid_size && cell.iy < self.grid_size)
            .then(|| cell.iy * self.grid_size + cell.ix)
    }

    #[inline]
    fn axis_index(&self, value: f32, cell_extent: f32) -> usize {
        let index = (value / cell_extent).floor();
        if index.is_nan() || index < 0.0 {
            0
        } else {
            (index as usize).min(self.grid_size - 1)
        }
    }

    /// Cell containing `pos`: floor division, clamped to the grid on both sides.
    #[inline]
    pub fn lookup_cell(&self, pos: Vec2) -> CellIndex {
        CellIndex::new(
            self.axis_index(pos.x, self.cell_width),
            self.axis_index(pos.y, self.cell_height),
        )
    }

    /// Food stored in the cell containing `pos`. Neighbouring cells are not consulted.
    #[inline]
    pub fn candidates_near(&self, pos: Vec2) -> &[FoodItem] {
        self.cell(self.lookup_cell(pos))
    }

    /// Items stored in `cell`. A cell outside the grid reads as empty.
    #[inline]
    pub fn cell(&self, cell: CellIndex) -> &[FoodItem] {
        match self.slot(cell) {
            Some(slot) => self.cells[slot].as_slice(),
            None => &[],
        }
    }

    /// Mutable access to a cell's items. The item count cannot change through it,
    /// and a cell outside the grid yields an empty slice.
    #[inline]
    pub fn cell_mut(&mut self, cell: CellIndex) -> &mut [FoodItem] {
        match self.slot(cell) {
            Some(slot) => self.cells[slot].as_mut_slice(),
            None => &mut [],
        }
    }

    /// Minimum and maximum corners of a cell.
    pub fn cell_bounds(&self, cell: CellIndex) -> (Vec2, Vec2) {
        let min = Vec2::new(
            cell.ix as f32 * self.cell_width,
            cell.iy as f32 * self.cell_height,
        );
        (min, min + Vec2::new(self.cell_width, self.cell_height))
    }

    fn random_position_in(&self, cell: CellIndex, rng: &mut impl Rng) -> Vec2 {
        let (min, max) = self.cell_bounds(cell);
        let mut pos = Vec2::new(
            min.x + rng.random::<f32>() * self.cell_width,
            min.y + rng.random::<f32>() * self.cell_height,
        );
        // Rounding can push a sample onto the next cell's edge.
        if self.axis_index(pos.x, self.cell_width) != cell.ix {
            pos.x = (min.x + max.x) / 2.0;
        }
        if self.axis_index(pos.y, self.cell_height) != cell.iy {
            pos.y = (min.y + max.y) / 2.0;
        }
        pos
    }

    fn spawn_in(&self, cell: CellIndex, rng: &mut impl Rng) -> FoodItem {
        let position = self.random_position_in(cell, rng);
        let value = rng.random_range(self.min_value..=self.max_value);
        FoodItem::new(position, value, random_food_color(rng))
    }

    /// Move the item at `index` in `cell` to a fresh random spot in the same cell
    /// and give it a new colour. Returns `false` if there is no such item,
    /// including when `cell` is outside the grid.
    pub fn respawn(&mut self, cell: CellIndex, index: usize, rng: &mut impl Rng) -> bool {
        let Some(old) = self.cell(cell).get(index).map(|item| item.position) else {
            return false;
        };

        let mut position = self.random_position_in(cell, rng);
        for _ in 0..RESPAWN_ATTEMPTS {
            if position != old {
                break;
            }
            position = self.random_position_in(cell, rng);
        }
        let color = random_food_color(rng);

        let item = &mut self.cell_mut(cell)[index];
        item.position = position;
        item.color = color;
        true
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    pub fn food_per_cell(&self) -> usize {
        self.food_per_cell
    }

    #[inline]
    pub fn cell_population(&self, cell: CellIndex) -> usize {
        self.cell(cell).len()
    }

    pub fn total_food(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Iterate over every food item with the cell it lives in.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &FoodItem)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(slot, items)| {
            let cell = CellIndex::new(slot % self.grid_size, slot / self.grid_size);
            items.iter().map(move |item| (cell, item))
        })
    }
}

impl std::fmt::Debug for FoodGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoodGrid")
            .field("grid_size", &self.grid_size)
            .field("food_per_cell", &self.food_per_cell)
            .field("total_food", &self.total_food())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(rng: &mut StdRng) -> FoodGrid {
        let arena = Arena::new(3000.0, 3000.0);
        FoodGrid::populated(&arena, &ArenaConfig::default(), &FoodConfig::default(), rng)
    }

    #[test]
    fn test_lookup_cell_floor_and_clamp() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = grid(&mut rng);

        assert_eq!(grid.lookup_cell(Vec2::new(0.0, 0.0)), CellIndex::new(0, 0));
        assert_eq!(grid.lookup_cell(Vec2::new(249.9, 250.0)), CellIndex::new(0, 1));
        assert_eq!(grid.lookup_cell(Vec2::new(3000.0, 3000.0)), CellIndex::new(11, 11));
        assert_eq!(grid.lookup_cell(Vec2::new(-5.0, 9000.0)), CellIndex::new(0, 11));
    }

    #[test]
    fn test_every_item_in_its_cell() {
        let mut rng = StdRng::seed_from_u64(2);
        let grid = grid(&mut rng);

        assert_eq!(grid.total_food(), 12 * 12 * 10);
        for (cell, item) in grid.iter() {
            assert_eq!(grid.lookup_cell(item.position), cell);
            assert!((1..=2).contains(&item.value));
        }
    }

    #[test]
    fn test_candidates_are_cell_local() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = grid(&mut rng);
        let pos = Vec2::new(260.0, 10.0);

        let candidates = grid.candidates_near(pos);
        assert_eq!(candidates.len(), 10);
        assert!(
            candidates
                .iter()
                .all(|item| grid.lookup_cell(item.position) == CellIndex::new(1, 0))
        );
    }

    #[test]
    fn test_respawn_keeps_cell_and_population() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut grid = grid(&mut rng);
        let cell = CellIndex::new(5, 7);

        for round in 0..1000 {
            let index = round % grid.food_per_cell();
            let old = grid.cell(cell)[index].position;
            assert!(grid.respawn(cell, index, &mut rng));
            let new = grid.cell(cell)[index].position;
            assert_ne!(old, new);
            assert_eq!(grid.lookup_cell(new), cell);
        }
        assert_eq!(grid.cell_population(cell), 10);
        assert_eq!(grid.total_food(), 1440);
    }

    #[test]
    fn test_respawn_out_of_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = grid(&mut rng);
        assert!(!grid.respawn(CellIndex::new(0, 0), 99, &mut rng));
        assert!(!grid.respawn(CellIndex::new(12, 0), 0, &mut rng));
        assert!(!grid.respawn(CellIndex::new(0, 40), 0, &mut rng));
        assert_eq!(grid.total_food(), 1440);
    }

    #[test]
    fn test_cell_outside_grid_is_empty() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut grid = grid(&mut rng);

        // Column 12 must not alias the first cell of the next row.
        assert!(grid.cell(CellIndex::new(12, 0)).is_empty());
        assert!(grid.cell_mut(CellIndex::new(3, 99)).is_empty());
        assert_eq!(grid.cell_population(CellIndex::new(usize::MAX, 0)), 0);
        assert_eq!(grid.cell(CellIndex::new(11, 11)).len(), 10);
    }
}
