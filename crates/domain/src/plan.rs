use derive_more::{Deref, Display, Into};

/// One exercise prescription within a training day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u32,
    pub reps: u32,
}

/// The immutable plan for one training day: a warmup list followed by the
/// actual workout. Weights are recorded for workout exercises only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub warmup: Vec<Exercise>,
    pub workout: Vec<Exercise>,
}

/// Zero-based position of a day within the training program.
#[derive(Deref, Debug, Display, Default, Into, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayIndex(usize);

impl From<usize> for DayIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayIndexError {
    #[error("day index {index} is out of range (program has {len} days)")]
    OutOfRange { index: DayIndex, len: usize },
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    #[display("Push")]
    Push,
    #[display("Pull")]
    Pull,
    #[display("Legs")]
    Legs,
}

impl DayKind {
    #[must_use]
    pub fn of(day: DayIndex) -> Self {
        match *day % 3 {
            0 => DayKind::Push,
            1 => DayKind::Pull,
            _ => DayKind::Legs,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, DayKind::Push)]
    #[case(1, DayKind::Pull)]
    #[case(2, DayKind::Legs)]
    #[case(3, DayKind::Push)]
    #[case(29, DayKind::Legs)]
    fn test_day_kind_of(#[case] day: usize, #[case] expected: DayKind) {
        assert_eq!(DayKind::of(day.into()), expected);
    }

    #[rstest]
    #[case(DayKind::Push, "Push")]
    #[case(DayKind::Pull, "Pull")]
    #[case(DayKind::Legs, "Legs")]
    fn test_day_kind_display(#[case] kind: DayKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_day_index_error_display() {
        assert_eq!(
            DayIndexError::OutOfRange {
                index: 30.into(),
                len: 30
            }
            .to_string(),
            "day index 30 is out of range (program has 30 days)"
        );
    }
}
