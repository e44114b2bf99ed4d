//! The [`Board`]: a fixed-size, column-major grid of fruit cells.
//!
//! A cell holds `0` when empty and a positive [`FruitType`] id otherwise.
//! Storage is column-major (`cells[x * height + y]`), the layout hosts hand
//! boards over in, so iteration visits columns left to right and each column
//! top to bottom.

use crate::error::BoardError;
use crate::fruit::FruitType;
use crate::geom::Point;

/// A 2D grid of fruit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<u32>,
    width: i32,
    height: i32,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![0; w as usize * h as usize],
            width: w,
            height: h,
        }
    }

    /// Build a board from its columns (`columns[x][y]`).
    pub fn from_columns<C: AsRef<[u32]>>(columns: &[C]) -> Result<Self, BoardError> {
        let height = columns.first().map_or(0, |c| c.as_ref().len());
        if height == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(columns.len() * height);
        for (column, c) in columns.iter().enumerate() {
            let c = c.as_ref();
            if c.len() != height {
                return Err(BoardError::Ragged {
                    column,
                    expected: height,
                    got: c.len(),
                });
            }
            cells.extend_from_slice(c);
        }
        Ok(Self {
            cells,
            width: columns.len() as i32,
            height: height as i32,
        })
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.x * self.height + p.y) as usize)
        } else {
            None
        }
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is on the board.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Raw cell value at `p`, or `None` off the board.
    pub fn at(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Fruit at `p`, if any.
    pub fn fruit_at(&self, p: Point) -> Option<FruitType> {
        self.at(p).and_then(FruitType::new)
    }

    /// Whether `p` holds fruit of any type.
    pub fn has_fruit(&self, p: Point) -> bool {
        self.fruit_at(p).is_some()
    }

    /// Set the raw cell value at `p`. Does nothing off the board.
    pub fn set(&mut self, p: Point, value: u32) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Empty the cell at `p`, returning what it held.
    pub fn take(&mut self, p: Point) -> Option<FruitType> {
        let i = self.index(p)?;
        let fruit = FruitType::new(self.cells[i]);
        self.cells[i] = 0;
        fruit
    }

    /// Number of cells holding `fruit`.
    pub fn count(&self, fruit: FruitType) -> usize {
        self.cells.iter().filter(|&&c| c == fruit.id()).count()
    }

    /// Iterate over `(Point, value)` pairs in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        let h = self.height.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new(i as i32 / h, i as i32 % h), c))
    }

    /// Iterate over the cells holding fruit, in column-major order.
    pub fn fruits(&self) -> impl Iterator<Item = (Point, FruitType)> + '_ {
        self.iter()
            .filter_map(|(p, c)| FruitType::new(c).map(|f| (p, f)))
    }
}
