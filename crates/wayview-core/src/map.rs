//! The [`TileMap`] type — a rectangular, immutable grid of [`Tile`]s.

use std::fmt;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// One cell of the tile map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Walkable, unoccupied ground.
    #[default]
    Empty,
    /// Impassable terrain.
    Wall,
    /// Where the search begins.
    Start,
    /// The exit the search is heading for.
    Gateway,
}

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// A rectangular grid of tiles, set once at construction.
///
/// Row index grows downward, column index rightward, both zero-based. In
/// [`Point`] terms `x` is the column and `y` the row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl TileMap {
    /// Create an all-[`Tile::Empty`] map of the given dimensions.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MapError> {
        if rows <= 0 || cols <= 0 {
            return Err(MapError::Empty { rows, cols });
        }
        Ok(Self {
            tiles: vec![Tile::Empty; (rows * cols) as usize],
            width: cols,
            height: rows,
        })
    }

    /// Build a map from explicit rows. Every row must have the same nonzero
    /// width.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MapError::Empty {
                rows: height as i32,
                cols: width as i32,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapError::RaggedRow {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
        }
        Ok(Self {
            tiles: rows.into_iter().flatten().collect(),
            width: width as i32,
            height: height as i32,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: degenerate maps are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    /// Position of the first [`Tile::Gateway`], scanning row-major.
    pub fn gateway(&self) -> Option<Point> {
        self.iter()
            .find(|&(_, tile)| tile == Tile::Gateway)
            .map(|(p, _)| p)
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &tile)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, tile)
        })
    }
}

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// Errors from tile map construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Zero (or negative) rows or columns.
    Empty { rows: i32, cols: i32 },
    /// A row whose width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { rows, cols } => {
                write!(f, "map must have positive dimensions, got {rows}x{cols}")
            }
            Self::RaggedRow { row, expected, got } => {
                write!(f, "map row {row} has width {got}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_with_empty() {
        let map = TileMap::new(3, 4).unwrap();
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.len(), 12);
        assert!(map.iter().all(|(_, t)| t == Tile::Empty));
    }

    #[test]
    fn new_rejects_degenerate_dimensions() {
        assert!(matches!(TileMap::new(0, 4), Err(MapError::Empty { .. })));
        assert!(matches!(TileMap::new(4, 0), Err(MapError::Empty { .. })));
        assert!(matches!(TileMap::new(-1, 4), Err(MapError::Empty { .. })));
    }

    #[test]
    fn from_rows_round_trip() {
        let map = TileMap::from_rows(vec![
            vec![Tile::Start, Tile::Empty],
            vec![Tile::Wall, Tile::Gateway],
        ])
        .unwrap();
        assert_eq!(map.at(Point::new(0, 0)), Some(Tile::Start));
        assert_eq!(map.at(Point::new(1, 1)), Some(Tile::Gateway));
        assert_eq!(map.at(Point::new(0, 1)), Some(Tile::Wall));
        assert_eq!(map.at(Point::new(2, 0)), None);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = TileMap::from_rows(vec![
            vec![Tile::Empty, Tile::Empty],
            vec![Tile::Empty],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            TileMap::from_rows(vec![]),
            Err(MapError::Empty { .. })
        ));
        assert!(matches!(
            TileMap::from_rows(vec![vec![]]),
            Err(MapError::Empty { .. })
        ));
    }

    #[test]
    fn gateway_scans_row_major() {
        let map = TileMap::from_rows(vec![
            vec![Tile::Empty, Tile::Empty],
            vec![Tile::Gateway, Tile::Gateway],
        ])
        .unwrap();
        assert_eq!(map.gateway(), Some(Point::new(0, 1)));

        let none = TileMap::new(2, 2).unwrap();
        assert_eq!(none.gateway(), None);
    }

    #[test]
    fn iter_is_row_major() {
        let map = TileMap::new(2, 3).unwrap();
        let points: Vec<Point> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(2, 0));
        assert_eq!(points[3], Point::new(0, 1));
        assert_eq!(points.len(), 6);
    }
}
