use itertools::Itertools;
use rand::Rng;

use super::pos::Position;

/// Row-major grid of tiles. Positions outside `width` x `height` have no tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    /// Fills every tile independently, alive with probability `alive_chance`.
    ///
    /// # Panics
    ///
    /// If `alive_chance` is not within `0.0..=1.0`.
    pub fn new_random<R>(width: usize, height: usize, alive_chance: f64, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tiles = (0..width * height)
            .map(|_| TileState::from(rng.random_bool(alive_chance)))
            .collect();

        Self::with_tiles(width, height, tiles)
    }

    /// Builds a board from rows of `true` (alive) / `false` (dead).
    /// Returns `None` if the rows have different lengths.
    pub fn from_rows<R>(rows: &[R]) -> Option<Self>
    where
        R: AsRef<[bool]>,
    {
        if !rows.iter().map(|row| row.as_ref().len()).all_equal() {
            return None;
        }

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let tiles = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied().map(TileState::from))
            .collect();

        Some(Self::with_tiles(width, height, tiles))
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    /// Tiles grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        // chunks(0) panics; a zero-width board has no tiles anyway.
        self.tiles.chunks(self.width.max(1))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
