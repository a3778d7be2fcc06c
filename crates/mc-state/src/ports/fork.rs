use crate::domain::fork::ForkMilestone;

/// Reports whether a protocol-upgrade milestone is active.
///
/// Implementations must be monotonic: once `passes` returns true for a
/// milestone, it returns true for that milestone forever after.
pub trait ForkController {
    fn passes(&self, milestone: ForkMilestone) -> bool;
}
