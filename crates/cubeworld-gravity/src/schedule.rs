//! Deferred transition actions, keyed by due time.

use cubeworld_faces::CubeFace;

/// Work a transition defers to a fixed offset after it begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Reinstate the body's rotation lock.
    RelockRotation,
    /// Switch the applied gravity to this face's vector.
    SwapGravity(CubeFace),
    /// Return the controller to `Stable`.
    Complete,
}

/// A deferred action and the timestamp it becomes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledAction {
    /// Absolute due time in milliseconds.
    pub due_ms: u64,
    /// What to do.
    pub action: DeferredAction,
}

/// Pending actions ordered by due time.
///
/// Actions with equal due times keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct ActionSchedule {
    pending: Vec<ScheduledAction>,
}

impl ActionSchedule {
    /// Empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to become due at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, action: DeferredAction) {
        let index = self.pending.partition_point(|a| a.due_ms <= due_ms);
        self.pending
            .insert(index, ScheduledAction { due_ms, action });
    }

    /// Remove and return every action due at or before `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<ScheduledAction> {
        let split = self.pending.partition_point(|a| a.due_ms <= now_ms);
        self.pending.drain(..split).collect()
    }

    /// Drop everything still pending.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Pending actions, earliest first.
    pub fn pending(&self) -> &[ScheduledAction] {
        &self.pending
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_drain_in_due_order() {
        let mut s = ActionSchedule::new();
        s.schedule(1500, DeferredAction::Complete);
        s.schedule(100, DeferredAction::RelockRotation);
        s.schedule(200, DeferredAction::SwapGravity(CubeFace::Right));

        let fired: Vec<_> = s.drain_due(2000).into_iter().map(|a| a.action).collect();
        assert_eq!(
            fired,
            vec![
                DeferredAction::RelockRotation,
                DeferredAction::SwapGravity(CubeFace::Right),
                DeferredAction::Complete,
            ]
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_only_due_actions_are_drained() {
        let mut s = ActionSchedule::new();
        s.schedule(100, DeferredAction::RelockRotation);
        s.schedule(200, DeferredAction::SwapGravity(CubeFace::Top));

        assert!(s.drain_due(99).is_empty());
        let fired = s.drain_due(100);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].action, DeferredAction::RelockRotation);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_equal_due_times_keep_insertion_order() {
        let mut s = ActionSchedule::new();
        s.schedule(10, DeferredAction::SwapGravity(CubeFace::Left));
        s.schedule(10, DeferredAction::Complete);
        let fired: Vec<_> = s.drain_due(10).into_iter().map(|a| a.action).collect();
        assert_eq!(
            fired,
            vec![
                DeferredAction::SwapGravity(CubeFace::Left),
                DeferredAction::Complete
            ]
        );
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut s = ActionSchedule::new();
        s.schedule(5, DeferredAction::Complete);
        s.clear();
        assert!(s.drain_due(u64::MAX).is_empty());
    }
}
