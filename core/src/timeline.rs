use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// A virtual clock for driving delayed work without real timers.
///
/// Items scheduled for the same instant come out in the order they were
/// scheduled.
#[derive(Debug)]
pub struct Timeline<T> {
    now_ms: u64,
    entries: VecDeque<(u64, T)>,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            entries: VecDeque::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        let due = self.now_ms + u64::from(delay_ms);
        let at = self.entries.partition_point(|&(d, _)| d <= due);
        self.entries.insert(at, (due, item));
    }

    /// Moves the clock forward and returns everything that became due.
    pub fn advance(&mut self, ms: u32) -> Vec<T> {
        self.now_ms += u64::from(ms);
        let due_count = self.entries.partition_point(|&(d, _)| d <= self.now_ms);
        self.entries.drain(..due_count).map(|(_, item)| item).collect()
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn releases_items_when_due() {
        let mut timeline = Timeline::new();
        timeline.schedule(100, "late");
        timeline.schedule(50, "early");

        assert!(timeline.advance(49).is_empty());
        assert_eq!(timeline.advance(1), vec!["early"]);
        assert_eq!(timeline.pending(), 1);
        assert_eq!(timeline.advance(100), vec!["late"]);
        assert_eq!(timeline.now_ms(), 150);
    }

    #[test]
    fn same_instant_keeps_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(10, 1);
        timeline.schedule(10, 2);
        timeline.schedule(5, 0);

        assert_eq!(timeline.advance(10), vec![0, 1, 2]);
    }
}
