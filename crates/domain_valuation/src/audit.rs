//! Ordered audit trail for a single valuation run
//!
//! Every stage of the pipeline appends to one shared trail, so the finished
//! report carries a line-by-line account of each inference in the order it
//! was made. Entries are also emitted as `tracing` debug events; installing
//! a subscriber is the caller's concern.

use tracing::debug;

/// Collects processing notes for one engine invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditTrail {
    notes: Vec<String>,
}

impl AuditTrail {
    /// Creates an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain processing note
    pub fn record(&mut self, note: impl Into<String>) {
        let note = note.into();
        debug!(note = %note, "valuation note");
        self.notes.push(note);
    }

    /// Appends a warning-level note
    ///
    /// Warnings never fail the run; the caller decides how to act on them.
    pub fn warning(&mut self, note: impl AsRef<str>) {
        self.record(format!("WARNING: {}", note.as_ref()));
    }

    /// Appends an informational note
    pub fn notice(&mut self, note: impl AsRef<str>) {
        self.record(format!("NOTE: {}", note.as_ref()));
    }

    /// Returns the number of notes recorded so far
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the recorded notes in order
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Consumes the trail, yielding the ordered notes
    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_keep_insertion_order() {
        let mut trail = AuditTrail::new();
        trail.record("first");
        trail.record("second");
        assert_eq!(trail.notes(), ["first", "second"]);
    }

    #[test]
    fn test_warning_and_notice_prefixes() {
        let mut trail = AuditTrail::new();
        trail.warning("total is zero or negative");
        trail.notice("total exceeds 1 million");
        assert_eq!(
            trail.into_notes(),
            [
                "WARNING: total is zero or negative",
                "NOTE: total exceeds 1 million"
            ]
        );
    }

    #[test]
    fn test_empty_trail() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }
}
