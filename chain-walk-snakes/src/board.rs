use std::cmp::Ordering;

use chain_walk_core::chain::{ChainState, MarkovChain};

/// Number of cells on the board; reaching the last cell ends a walk.
pub const BOARD_SIZE: u32 = 100;

/// Highest dice roll from a cell without a snake or a ladder.
const DICE_MAX: u32 = 6;

/// Fixed jumps of the board. Each `(from, to)` pair is a ladder when
/// `from < to` and a snake otherwise.
const JUMPS: [(u32, u32); 20] = [
    (13, 4),
    (85, 17),
    (95, 67),
    (97, 58),
    (66, 89),
    (87, 31),
    (57, 83),
    (91, 25),
    (28, 50),
    (35, 11),
    (8, 30),
    (41, 62),
    (81, 43),
    (69, 32),
    (20, 39),
    (33, 70),
    (79, 99),
    (23, 76),
    (15, 47),
    (61, 14),
];

/// One board cell, the state type of the snakes-and-ladders chain.
#[derive(Clone, Debug)]
pub struct Cell {
    number: u32,
    jump_to: Option<u32>,
}

impl Cell {
    /// A cell carrying only its number, for registry lookups.
    /// Cells compare by number alone, so the jump does not matter here.
    pub fn plain(number: u32) -> Self {
        Self { number, jump_to: None }
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl ChainState for Cell {
    fn compare(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }

    /// Renders `[n]`, the jump if the cell has one, and a trailing arrow
    /// unless this is the final cell.
    fn render(&self) -> String {
        let mut out = format!("[{}]", self.number);

        if let Some(target) = self.jump_to {
            if target > self.number {
                out.push_str(&format!("-ladder to {}", target));
            } else {
                out.push_str(&format!("-snake to {}", target));
            }
        }

        if !self.is_terminal() {
            out.push_str(" ->");
        }
        out
    }

    fn is_terminal(&self) -> bool {
        self.number == BOARD_SIZE
    }
}

fn jump_target(number: u32) -> Option<u32> {
    JUMPS
        .iter()
        .find(|(from, _)| *from == number)
        .map(|(_, to)| *to)
}

/// Registers every cell of the board and links it to its successors.
///
/// A cell with a snake or a ladder transitions only to the jump target
/// (single entry, count 1). Any other cell transitions to each dice
/// outcome that stays on the board.
pub fn fill_chain(chain: &mut MarkovChain<Cell>) {
    let cells: Vec<Cell> = (1..=BOARD_SIZE)
        .map(|number| Cell { number, jump_to: jump_target(number) })
        .collect();

    let ids: Vec<_> = cells.iter().map(|cell| chain.get_or_insert(cell)).collect();

    for cell in &cells {
        let from = ids[(cell.number - 1) as usize];

        match cell.jump_to {
            Some(target) => chain.link(from, ids[(target - 1) as usize]),
            None => {
                for roll in 1..=DICE_MAX {
                    let dest = cell.number + roll;
                    if dest > BOARD_SIZE {
                        break;
                    }
                    chain.link(from, ids[(dest - 1) as usize]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> MarkovChain<Cell> {
        let mut chain = MarkovChain::new();
        fill_chain(&mut chain);
        chain
    }

    #[test]
    fn every_cell_is_registered_once() {
        let chain = board();
        assert_eq!(chain.len(), BOARD_SIZE as usize);
    }

    #[test]
    fn snake_cell_has_only_the_jump_transition() {
        let chain = board();
        let from = chain.find(&Cell::plain(13)).unwrap();
        let to = chain.find(&Cell::plain(4)).unwrap();

        let table = chain.node(from).transitions();
        assert_eq!(table.len(), 1);
        assert_eq!(table.position_of(to), Some(0));
        assert_eq!(table.total_weight(), 1);
    }

    #[test]
    fn plain_cell_has_one_transition_per_dice_roll() {
        let chain = board();
        let from = chain.find(&Cell::plain(1)).unwrap();

        let table = chain.node(from).transitions();
        assert_eq!(table.len(), DICE_MAX as usize);
        let targets: Vec<u32> = table
            .iter()
            .map(|entry| chain.node(entry.to()).value().number())
            .collect();
        assert_eq!(targets, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn dice_rolls_stay_on_the_board() {
        let chain = board();
        let from = chain.find(&Cell::plain(98)).unwrap();

        let targets: Vec<u32> = chain
            .node(from)
            .transitions()
            .iter()
            .map(|entry| chain.node(entry.to()).value().number())
            .collect();
        assert_eq!(targets, vec![99, 100]);
    }

    #[test]
    fn last_cell_is_terminal_with_no_transitions() {
        let chain = board();
        let last = chain.find(&Cell::plain(BOARD_SIZE)).unwrap();

        assert!(chain.node(last).value().is_terminal());
        assert!(chain.node(last).transitions().is_empty());
    }

    #[test]
    fn render_shows_jumps_and_arrows() {
        let chain = board();
        let snake = chain.find(&Cell::plain(13)).unwrap();
        let ladder = chain.find(&Cell::plain(8)).unwrap();
        let plain = chain.find(&Cell::plain(2)).unwrap();
        let last = chain.find(&Cell::plain(BOARD_SIZE)).unwrap();

        assert_eq!(chain.node(snake).value().render(), "[13]-snake to 4 ->");
        assert_eq!(chain.node(ladder).value().render(), "[8]-ladder to 30 ->");
        assert_eq!(chain.node(plain).value().render(), "[2] ->");
        assert_eq!(chain.node(last).value().render(), "[100]");
    }
}
