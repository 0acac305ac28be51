use board::{GameBoard, TileState};
use pos::Position;
use rule::Rule;

pub mod board;
pub mod pos;
pub mod rule;

/// Relative `[dx, dy]` offsets of the eight tiles surrounding a tile.
const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub rule: Rule,
    pub generation: usize,
}

impl Game {
    pub fn new(board: GameBoard, rule: Rule) -> Self {
        Self {
            board,
            rule,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.board = self.next_board();
        self.generation += 1;
    }

    /// Computes the following generation. Every tile is evaluated against the
    /// current board, which stays untouched until the caller swaps it out.
    pub fn next_board(&self) -> GameBoard {
        let next_tiles = self
            .board
            .enumerate_tiles()
            .map(|(tile_pos, tile)| self.tick_tile(tile_pos, *tile))
            .collect();

        GameBoard::with_tiles(self.board.width, self.board.height, next_tiles)
    }

    /// Number of live tiles among the eight surrounding `tile_pos`.
    /// Positions past the board edges count as dead.
    pub fn alive_neighbor_count<P>(&self, tile_pos: P) -> usize
    where
        P: Into<Position>,
    {
        let tile_pos = tile_pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[dx, dy]| self.board.tile(tile_pos.offset(*dx, *dy)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    fn tick_tile(&self, tile_pos: Position, tile: TileState) -> TileState {
        let alive_neighbor_count = self.alive_neighbor_count(tile_pos);
        self.rule.next_state(tile, alive_neighbor_count)
    }
}
