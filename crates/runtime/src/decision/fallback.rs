use fight_core::Decision;

use super::{DecisionSource, Observation};
use crate::error::DecisionError;

/// Asks `fallback` whenever `primary` fails.
///
/// `Ok(None)` from the primary is not a failure and is passed through.
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: DecisionSource, F: DecisionSource> DecisionSource for WithFallback<P, F> {
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        match self.primary.poll(view) {
            Err(err) => {
                tracing::debug!(
                    fighter = %view.fighter(),
                    primary = self.primary.label(),
                    fallback = self.fallback.label(),
                    "{err}; using fallback"
                );
                self.fallback.poll(view)
            }
            polled => polled,
        }
    }

    fn label(&self) -> &str {
        self.primary.label()
    }
}
