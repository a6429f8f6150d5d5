//! Drag-and-drop to stage-move translation.

use lead_store::{Stage, StageMove};

/// Where a card was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub stage: Stage,
    /// Index within the destination column.
    pub index: u32,
}

/// Outcome of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub lead_id: i64,
    pub source: Stage,
    /// `None` when the card was dropped outside any column.
    pub destination: Option<DropTarget>,
}

/// The stage move a drop should issue, if any.
///
/// Only cross-column drops move a lead; the drop index becomes its new
/// position. Reordering inside a column issues nothing.
pub fn stage_move_for_drop(drop: &DropResult) -> Option<StageMove> {
    let target = drop.destination?;
    if target.stage == drop.source {
        return None;
    }
    Some(StageMove {
        stage: target.stage,
        position: target.index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_to(source: Stage, destination: Option<(Stage, u32)>) -> DropResult {
        DropResult {
            lead_id: 7,
            source,
            destination: destination.map(|(stage, index)| DropTarget { stage, index }),
        }
    }

    #[test]
    fn test_cross_column_drop_moves() {
        let drop = drop_to(Stage::Lust, Some((Stage::Loyal, 2)));
        assert_eq!(
            stage_move_for_drop(&drop),
            Some(StageMove {
                stage: Stage::Loyal,
                position: 2
            })
        );
    }

    #[test]
    fn test_same_column_drop_is_ignored() {
        let drop = drop_to(Stage::Labor, Some((Stage::Labor, 0)));
        assert_eq!(stage_move_for_drop(&drop), None);
    }

    #[test]
    fn test_drop_outside_board_is_ignored() {
        assert_eq!(stage_move_for_drop(&drop_to(Stage::Dead, None)), None);
    }
}
