//! Request lifecycle values.

/// The three-phase lifecycle of an async operation.
///
/// A UI slot starts at `Pending` while the operation's future is in flight;
/// driving the future always ends in `Fulfilled` or `Rejected` (there is no
/// cancellation or timeout path). Rejection carries the collapsed failure
/// message, whether the cause was transport-level or an explicit server
/// failure flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase<T> {
    #[default]
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> Phase<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Phase::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Phase::Rejected(_))
    }

    /// Returns the fulfillment value, if any.
    pub fn into_fulfilled(self) -> Option<T> {
        match self {
            Phase::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the rejection message, if any.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Phase::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let phase: Phase<()> = Phase::default();
        assert!(phase.is_pending());
    }

    #[test]
    fn test_fulfilled_accessors() {
        let phase = Phase::Fulfilled(42);
        assert!(phase.is_fulfilled());
        assert!(!phase.is_rejected());
        assert_eq!(phase.into_fulfilled(), Some(42));
    }

    #[test]
    fn test_rejected_accessors() {
        let phase: Phase<i32> = Phase::Rejected("timed out".to_string());
        assert!(phase.is_rejected());
        assert_eq!(phase.rejection(), Some("timed out"));
        assert_eq!(phase.into_fulfilled(), None);
    }
}
