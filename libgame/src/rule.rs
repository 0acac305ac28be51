use crate::board::TileState;

/// Neighbor counts that bring a dead tile to life (`birth`) or keep a live one alive (`survive`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_state(&self, tile: TileState, alive_neighbors: usize) -> TileState {
        let alive = match tile {
            TileState::Alive => self.survive.contains(&alive_neighbors),
            TileState::Dead => self.birth.contains(&alive_neighbors),
        };

        TileState::from(alive)
    }
}

// B3/S23
impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn conway_table() {
        let rule = Rule::default();

        for alive_neighbors in 0..=8 {
            let survives = rule.next_state(TileState::Alive, alive_neighbors);
            let born = rule.next_state(TileState::Dead, alive_neighbors);

            match alive_neighbors {
                2 => {
                    assert_eq!(survives, TileState::Alive);
                    assert_eq!(born, TileState::Dead);
                }
                3 => {
                    assert_eq!(survives, TileState::Alive);
                    assert_eq!(born, TileState::Alive);
                }
                _ => {
                    assert_eq!(survives, TileState::Dead);
                    assert_eq!(born, TileState::Dead);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn dead_tile_needs_exactly_three(alive_neighbors in 0..=8_usize) {
            let next = Rule::default().next_state(TileState::Dead, alive_neighbors);
            prop_assert_eq!(next.is_alive(), alive_neighbors == 3);
        }

        #[test]
        fn live_tile_needs_two_or_three(alive_neighbors in 0..=8_usize) {
            let next = Rule::default().next_state(TileState::Alive, alive_neighbors);
            prop_assert_eq!(next.is_alive(), alive_neighbors == 2 || alive_neighbors == 3);
        }
    }
}
