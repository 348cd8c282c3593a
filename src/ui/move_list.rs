//! Display order of the move list

use crate::game::MoveDescriptor;

/// Order in which jump buttons are listed.
///
/// Purely presentational: reversing never renumbers steps, every
/// descriptor keeps the history index it jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Reorder descriptors produced in play order
    pub fn apply(self, mut moves: Vec<MoveDescriptor>) -> Vec<MoveDescriptor> {
        if self == MoveOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Text of the toggle button
    pub fn label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "Ascending",
            MoveOrder::Descending => "Descending",
        }
    }
}
