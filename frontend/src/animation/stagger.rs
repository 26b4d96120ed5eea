use std::collections::BTreeSet;

/// Reveals `0..count` one by one, `delay_ms` apart, after a single trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaggerSchedule {
    count: usize,
    delay_ms: u32,
    triggered: bool,
    revealed: BTreeSet<usize>,
}

impl StaggerSchedule {
    pub fn new(count: usize, delay_ms: u32) -> Self {
        Self { count, delay_ms, triggered: false, revealed: BTreeSet::new() }
    }

    /// Picks up from an earlier schedule for the same list. Indices that are
    /// still in range stay revealed; only the rest are scheduled on trigger.
    pub fn resume(count: usize, delay_ms: u32, revealed: &BTreeSet<usize>) -> Self {
        let revealed = revealed.range(..count).copied().collect();
        Self { count, delay_ms, triggered: false, revealed }
    }

    /// Returns `(index, due_ms)` pairs the first time it is called, `None` after.
    /// Already revealed indices are skipped and the rest keep their spacing.
    pub fn trigger(&mut self) -> Option<Vec<(usize, u32)>> {
        if self.triggered {
            return None;
        }
        self.triggered = true;
        Some(
            (0..self.count)
                .filter(|i| !self.revealed.contains(i))
                .enumerate()
                .map(|(slot, i)| (i, (slot as u32).saturating_mul(self.delay_ms)))
                .collect(),
        )
    }

    /// Everything at once, used when the container cannot be observed.
    pub fn reveal_all(&mut self) {
        self.triggered = true;
        self.revealed.extend(0..self.count);
    }

    pub fn reveal(&mut self, index: usize) -> bool {
        index < self.count && self.revealed.insert(index)
    }

    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `{i : i * delay <= elapsed, i < count}`
    fn revealed_at(count: usize, delay_ms: u32, elapsed_ms: u64) -> BTreeSet<usize> {
        (0..count)
            .filter(|&i| (i as u64) * (delay_ms as u64) <= elapsed_ms)
            .collect()
    }

    #[test]
    fn schedule_is_evenly_spaced() {
        let mut schedule = StaggerSchedule::new(4, 150);
        assert_eq!(
            schedule.trigger(),
            Some(vec![(0, 0), (1, 150), (2, 300), (3, 450)])
        );
    }

    #[test]
    fn trigger_is_idempotent() {
        let mut schedule = StaggerSchedule::new(3, 100);
        assert!(schedule.trigger().is_some());
        assert!(schedule.trigger().is_none());
    }

    #[test]
    fn replaying_timers_matches_elapsed_time() {
        let (count, delay) = (6, 120);
        let mut schedule = StaggerSchedule::new(count, delay);
        let due = schedule.trigger().unwrap_or_default();

        for elapsed in [0u64, 50, 120, 121, 359, 360, 599, 600, 10_000] {
            let mut at = StaggerSchedule::new(count, delay);
            at.trigger();
            for &(i, ms) in &due {
                if (ms as u64) <= elapsed {
                    at.reveal(i);
                }
            }
            assert_eq!(at.revealed(), &revealed_at(count, delay, elapsed), "elapsed {elapsed}");
        }
    }

    #[test]
    fn reveal_is_bounded_and_once_only() {
        let mut schedule = StaggerSchedule::new(2, 10);
        assert!(schedule.reveal(1));
        assert!(!schedule.reveal(1));
        assert!(!schedule.reveal(2));
        assert_eq!(schedule.revealed().len(), 1);
    }

    #[test]
    fn zero_delay_reveals_everything_at_trigger() {
        assert_eq!(revealed_at(3, 0, 0), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn resumed_schedule_never_hides_revealed_items() {
        let mut first = StaggerSchedule::new(4, 150);
        first.reveal_all();

        let mut grown = StaggerSchedule::resume(5, 150, first.revealed());
        assert_eq!(grown.revealed(), &BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(grown.trigger(), Some(vec![(4, 0)]));
        assert!(grown.reveal(4));
        assert!(grown.revealed().is_superset(first.revealed()));
    }

    #[test]
    fn resume_drops_indices_past_a_shrunk_count() {
        let partial = BTreeSet::from([0, 1, 2, 3]);
        let mut shrunk = StaggerSchedule::resume(2, 100, &partial);
        assert_eq!(shrunk.revealed(), &BTreeSet::from([0, 1]));
        assert_eq!(shrunk.trigger(), Some(vec![]));
    }

    #[test]
    fn resume_after_partial_reveal_keeps_spacing_for_the_rest() {
        let mut schedule = StaggerSchedule::resume(4, 100, &BTreeSet::from([0, 1]));
        assert_eq!(schedule.trigger(), Some(vec![(2, 0), (3, 100)]));
    }

    #[test]
    fn reveal_all_fills_the_set() {
        let mut schedule = StaggerSchedule::new(3, 500);
        schedule.reveal_all();
        assert_eq!(schedule.revealed(), &BTreeSet::from([0, 1, 2]));
        assert!(schedule.trigger().is_none());
    }
}
