use std::collections::{BTreeMap, BTreeSet};

use crate::{DayIndex, DayPlan, Name, Weight};

/// Recorded weights per exercise name, unique within a day.
pub type WeightEntry = BTreeMap<Name, Weight>;

/// Persisted state of one training day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayProgress {
    pub weights: WeightEntry,
    pub is_complete: bool,
}

impl DayProgress {
    #[must_use]
    pub fn has_recorded_weights(&self) -> bool {
        self.weights.values().any(|weight| !weight.is_empty())
    }
}

/// An incoming save for one day, to be merged with prior saved data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayUpdate {
    pub weights: WeightEntry,
    pub is_complete: bool,
}

impl DayUpdate {
    #[must_use]
    pub fn weights(weights: WeightEntry) -> Self {
        Self {
            weights,
            is_complete: false,
        }
    }
}

/// Derived per-day state. Never stored, recomputed from raw data on each
/// query to avoid a second source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Locked,
    Unlocked,
    InProgress,
    Completed,
}

/// The complete record of all days' saved weights and completion flags.
///
/// Days are present only once saved at least once; absence means the day
/// was never opened. This is the sole unit of persisted state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgressState(BTreeMap<DayIndex, DayProgress>);

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn saved(&self, day: DayIndex) -> Option<&DayProgress> {
        self.0.get(&day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayIndex, &DayProgress)> {
        self.0.iter()
    }

    /// Merges an update into the entry for `day`, leaving all other entries
    /// untouched. The incoming weights replace the saved ones, while the
    /// completion flag is ORed with the saved one: a save can add
    /// completion, never remove it.
    #[must_use]
    pub fn merge_saved(&self, day: DayIndex, update: DayUpdate) -> ProgressState {
        let mut entries = self.0.clone();
        let previously_complete = entries.get(&day).is_some_and(|p| p.is_complete);
        entries.insert(
            day,
            DayProgress {
                weights: update.weights,
                is_complete: update.is_complete || previously_complete,
            },
        );
        Self(entries)
    }

    /// The sequential gate: day `i` requires completion of day `i-1` only,
    /// day 0 is always unlocked. Lock enforcement is presentation policy;
    /// this is merely the query it is based on.
    #[must_use]
    pub fn is_unlocked(&self, day: DayIndex) -> bool {
        match *day {
            0 => true,
            i => self
                .saved(DayIndex::from(i - 1))
                .is_some_and(|p| p.is_complete),
        }
    }

    #[must_use]
    pub fn completed_day_indexes(&self) -> BTreeSet<DayIndex> {
        self.0
            .iter()
            .filter(|(_, progress)| progress.is_complete)
            .map(|(day, _)| *day)
            .collect()
    }

    #[must_use]
    pub fn day_status(&self, day: DayIndex) -> DayStatus {
        if self.saved(day).is_some_and(|p| p.is_complete) {
            return DayStatus::Completed;
        }
        if !self.is_unlocked(day) {
            return DayStatus::Locked;
        }
        if self.saved(day).is_some_and(DayProgress::has_recorded_weights) {
            DayStatus::InProgress
        } else {
            DayStatus::Unlocked
        }
    }

    /// Whether `day` may transition to completed: every exercise in the
    /// day's workout list has a nonempty recorded weight. Warmup weights
    /// are never required.
    #[must_use]
    pub fn is_ready_to_complete(&self, day: DayIndex, plan: &DayPlan) -> bool {
        let Some(progress) = self.saved(day) else {
            return false;
        };
        plan.workout.iter().all(|exercise| {
            progress
                .weights
                .get(exercise.name)
                .is_some_and(|weight| !weight.is_empty())
        })
    }
}

impl FromIterator<(DayIndex, DayProgress)> for ProgressState {
    fn from_iter<I: IntoIterator<Item = (DayIndex, DayProgress)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
