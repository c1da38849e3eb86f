/// Result of a form submission as seen by the screen that triggered it.
///
/// Backend failures are reported to the user through the notifier and end up
/// here as `Failed`; they are never propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A local precondition did not hold; nothing was sent.
    Skipped,
    Succeeded,
    Failed,
}

impl SubmitOutcome {
    pub fn was_sent(self) -> bool {
        !matches!(self, SubmitOutcome::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitOutcome;

    #[test]
    fn only_skipped_outcomes_send_nothing() {
        assert!(!SubmitOutcome::Skipped.was_sent());
        assert!(SubmitOutcome::Succeeded.was_sent());
        assert!(SubmitOutcome::Failed.was_sent());
    }
}
