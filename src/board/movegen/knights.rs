use super::super::attack_tables::knight_reaches;
use super::super::{IllegalReason, Square};

/// Knights jump, so only the (2, 1) shape matters.
pub(super) fn check(from: Square, to: Square) -> Result<(), IllegalReason> {
    if knight_reaches(from, to) {
        Ok(())
    } else {
        Err(IllegalReason::WrongShape)
    }
}
