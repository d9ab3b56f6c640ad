//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node finishes within the tick it is evaluated in:
/// - Conditions answer immediately (e.g., "Is the opponent within reach?")
/// - Actions write their decision to the blackboard and report back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action produced its decision.
    Success,

    /// The condition did not hold, or the action declined to decide.
    Failure,
}

impl Status {
    /// Maps a boolean test result onto a status.
    #[inline]
    pub fn from_bool(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}
