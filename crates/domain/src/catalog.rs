//! The fixed 30-day bro-split training program.
//!
//! The program cycles push, pull and legs days. Every cycle keeps the same
//! warmup but rotates through the exercise pool of its kind and changes the
//! set and rep scheme, moving from higher-rep to heavier, lower-rep work.

use std::collections::BTreeMap;

use crate::{DayIndex, DayIndexError, DayPlan, Exercise};

pub const NUM_DAYS: usize = 30;

const WORKOUT_EXERCISES_PER_DAY: usize = 5;

struct Split {
    warmup: &'static [(&'static str, u32, u32)],
    pool: &'static [&'static str],
}

const PUSH: Split = Split {
    warmup: &[
        ("Arm Circles", 2, 15),
        ("Scapular Pushups", 2, 12),
        ("Incline Pushups", 2, 10),
    ],
    pool: &[
        "Bench Press",
        "Overhead Press",
        "Incline Dumbbell Press",
        "Dips",
        "Lateral Raises",
        "Tricep Pushdowns",
        "Close Grip Bench Press",
        "Skullcrushers",
        "Machine Chest Flys",
    ],
};

const PULL: Split = Split {
    warmup: &[
        ("Band Pull Aparts", 2, 15),
        ("Dead Hangs", 2, 30),
        ("Scapular Pull Ups", 2, 8),
    ],
    pool: &[
        "Deadlift",
        "Pull Ups",
        "Barbell Rows",
        "Lat Pulldowns",
        "Seated Cable Rows",
        "Face Pulls",
        "Barbell Curls",
        "Hammer Curls",
        "Shrugs",
    ],
};

const LEGS: Split = Split {
    warmup: &[
        ("Bodyweight Squats", 2, 15),
        ("Walking Lunges", 2, 12),
        ("Leg Swings", 2, 10),
    ],
    pool: &[
        "Back Squat",
        "Romanian Deadlift",
        "Leg Press",
        "Bulgarian Split Squats",
        "Leg Extensions",
        "Leg Curls",
        "Hip Thrusts",
        "Standing Calf Raises",
        "Seated Calf Raises",
    ],
};

const SPLITS: [Split; 3] = [PUSH, PULL, LEGS];

static PLAN: std::sync::LazyLock<Vec<DayPlan>> = std::sync::LazyLock::new(|| {
    (0..NUM_DAYS)
        .map(|index| {
            let split = &SPLITS[index % 3];
            let cycle = index / 3;
            let sets = if cycle < 5 { 3 } else { 4 };
            let reps = [12, 10, 8, 6, 5][cycle % 5];
            let start = cycle * 2 % split.pool.len();
            DayPlan {
                warmup: split
                    .warmup
                    .iter()
                    .map(|&(name, sets, reps)| Exercise { name, sets, reps })
                    .collect(),
                workout: (0..WORKOUT_EXERCISES_PER_DAY)
                    .map(|offset| Exercise {
                        name: split.pool[(start + offset) % split.pool.len()],
                        sets,
                        reps,
                    })
                    .collect(),
            }
        })
        .collect()
});

static DESCRIPTIONS: std::sync::LazyLock<BTreeMap<&'static str, &'static str>> =
    std::sync::LazyLock::new(|| {
        BTreeMap::from([
            (
                "Arm Circles",
                "Extend your arms to the sides and draw small, controlled circles, \
                 gradually increasing the diameter to warm up the shoulder joint.",
            ),
            (
                "Scapular Pushups",
                "In a pushup position with arms locked, pinch and spread your shoulder \
                 blades without bending the elbows.",
            ),
            (
                "Incline Pushups",
                "Pushups with your hands on an elevated surface, reducing the load while \
                 preparing chest, shoulders and triceps for pressing.",
            ),
            (
                "Bench Press",
                "Lying on a flat bench, lower the barbell to your mid chest and press it \
                 back up until your arms are locked out.",
            ),
            (
                "Overhead Press",
                "Standing with the barbell at shoulder height, press it straight overhead \
                 until your arms are locked out, keeping your torso braced.",
            ),
            (
                "Incline Dumbbell Press",
                "Pressing dumbbells from an incline bench to emphasize the upper portion \
                 of the chest.",
            ),
            (
                "Dips",
                "Supporting yourself on parallel bars, lower your body until your elbows \
                 reach roughly ninety degrees and press back up.",
            ),
            (
                "Lateral Raises",
                "With a slight bend in the elbows, raise dumbbells out to your sides to \
                 shoulder height to isolate the side delts.",
            ),
            (
                "Tricep Pushdowns",
                "Facing a cable stack, push the attachment down by extending your elbows \
                 while keeping your upper arms pinned at your sides.",
            ),
            (
                "Close Grip Bench Press",
                "Bench press with a shoulder-width grip, shifting the load from the chest \
                 onto the triceps.",
            ),
            (
                "Skullcrushers",
                "Lying on a bench, lower a barbell or dumbbells toward your forehead by \
                 bending the elbows, then extend back up.",
            ),
            (
                "Machine Chest Flys",
                "Seated on the fly machine, bring the handles together in a wide arc, \
                 squeezing the chest at the midpoint.",
            ),
            (
                "Band Pull Aparts",
                "Holding a resistance band at shoulder height with straight arms, pull it \
                 apart until it touches your chest.",
            ),
            (
                "Dead Hangs",
                "Hang from a pull up bar with relaxed shoulders to decompress the spine \
                 and open up the lats. Reps are seconds held.",
            ),
            (
                "Scapular Pull Ups",
                "Hanging from a bar with straight arms, pull your shoulder blades down \
                 and together without bending the elbows.",
            ),
            (
                "Deadlift",
                "With the barbell over mid foot, hinge at the hips and stand up with the \
                 bar, keeping it close to your body and your back neutral.",
            ),
            (
                "Pull Ups",
                "Hanging from a bar with an overhand grip, pull your chin above the bar \
                 and lower yourself under control.",
            ),
            (
                "Barbell Rows",
                "Hinged forward with a flat back, row the barbell to your lower ribcage \
                 and lower it under control.",
            ),
            (
                "Lat Pulldowns",
                "Seated at the pulldown machine, pull the bar to your upper chest while \
                 keeping your torso upright.",
            ),
            (
                "Seated Cable Rows",
                "Seated facing a cable stack, row the handle to your stomach, driving \
                 your elbows back and squeezing the shoulder blades.",
            ),
            (
                "Face Pulls",
                "Pull a rope attachment toward your face at eye level, flaring the elbows \
                 to target the rear delts and upper back.",
            ),
            (
                "Barbell Curls",
                "Standing with an underhand grip, curl the barbell up without swinging, \
                 keeping your elbows at your sides.",
            ),
            (
                "Hammer Curls",
                "Curl dumbbells with a neutral grip, working the brachialis and forearms \
                 along with the biceps.",
            ),
            (
                "Shrugs",
                "Holding heavy dumbbells or a barbell, raise your shoulders straight up \
                 toward your ears and lower them slowly.",
            ),
            (
                "Bodyweight Squats",
                "Unloaded squats to full depth, warming up the hips, knees and ankles for \
                 the working sets.",
            ),
            (
                "Walking Lunges",
                "Step forward into a lunge until the rear knee nearly touches the floor, \
                 then push through the front leg into the next step.",
            ),
            (
                "Leg Swings",
                "Holding onto a support, swing one leg forward and back in a growing arc \
                 to loosen the hips and hamstrings.",
            ),
            (
                "Back Squat",
                "With the barbell on your upper back, squat until your hips drop below \
                 your knees and stand back up.",
            ),
            (
                "Romanian Deadlift",
                "Starting from standing, hinge at the hips with nearly straight legs, \
                 lowering the bar along your thighs until your hamstrings stretch.",
            ),
            (
                "Leg Press",
                "Seated in the leg press machine, lower the sled until your knees reach \
                 roughly ninety degrees and press back up without locking out hard.",
            ),
            (
                "Bulgarian Split Squats",
                "With your rear foot elevated on a bench, squat on the front leg until \
                 the thigh is parallel to the floor.",
            ),
            (
                "Leg Extensions",
                "Seated in the extension machine, straighten your knees against the pad \
                 to isolate the quads.",
            ),
            (
                "Leg Curls",
                "Curl the machine pad toward your glutes by bending the knees to isolate \
                 the hamstrings.",
            ),
            (
                "Hip Thrusts",
                "With your upper back on a bench and the barbell over your hips, drive \
                 your hips up until your torso is parallel to the floor.",
            ),
            (
                "Standing Calf Raises",
                "Standing with the balls of your feet on an edge, rise onto your toes and \
                 lower your heels below the edge for a full stretch.",
            ),
            (
                "Seated Calf Raises",
                "Calf raises with bent knees under a loaded pad, shifting the work onto \
                 the soleus.",
            ),
        ])
    });

#[must_use]
pub fn days() -> &'static [DayPlan] {
    &PLAN
}

pub fn day(index: DayIndex) -> Result<&'static DayPlan, DayIndexError> {
    PLAN.get(*index).ok_or(DayIndexError::OutOfRange {
        index,
        len: PLAN.len(),
    })
}

/// Descriptive text for an exercise, for display purposes only.
#[must_use]
pub fn description(name: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::DayKind;

    use super::*;

    #[test]
    fn test_program_length() {
        assert_eq!(days().len(), NUM_DAYS);
    }

    #[test]
    fn test_day_shape() {
        for plan in days() {
            assert_eq!(plan.warmup.len(), 3);
            assert_eq!(plan.workout.len(), WORKOUT_EXERCISES_PER_DAY);
            for exercise in plan.warmup.iter().chain(&plan.workout) {
                assert!(exercise.sets > 0);
                assert!(exercise.reps > 0);
            }
        }
    }

    #[test]
    fn test_workout_exercises_match_day_kind() {
        for (index, plan) in days().iter().enumerate() {
            let pool = match DayKind::of(index.into()) {
                DayKind::Push => PUSH.pool,
                DayKind::Pull => PULL.pool,
                DayKind::Legs => LEGS.pool,
            };
            for exercise in &plan.workout {
                assert!(pool.contains(&exercise.name), "{}", exercise.name);
            }
        }
    }

    #[test]
    fn test_workout_exercises_unique_per_day() {
        for plan in days() {
            let mut names = plan.workout.iter().map(|e| e.name).collect::<Vec<_>>();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), plan.workout.len());
        }
    }

    #[test]
    fn test_every_exercise_has_description() {
        for plan in days() {
            for exercise in plan.warmup.iter().chain(&plan.workout) {
                assert!(description(exercise.name).is_some(), "{}", exercise.name);
            }
        }
    }

    #[rstest]
    #[case(0)]
    #[case(29)]
    fn test_day_in_range(#[case] index: usize) {
        assert!(day(index.into()).is_ok());
    }

    #[rstest]
    #[case(30)]
    #[case(100)]
    fn test_day_out_of_range(#[case] index: usize) {
        assert_eq!(
            day(index.into()),
            Err(DayIndexError::OutOfRange {
                index: index.into(),
                len: NUM_DAYS
            })
        );
    }

    #[test]
    fn test_sets_and_reps_progression() {
        // days 0-14 use 3 sets, days 15-29 use 4 sets
        assert_eq!(days()[0].workout[0].sets, 3);
        assert_eq!(days()[0].workout[0].reps, 12);
        assert_eq!(days()[14].workout[0].sets, 3);
        assert_eq!(days()[15].workout[0].sets, 4);
        assert_eq!(days()[15].workout[0].reps, 12);
        assert_eq!(days()[29].workout[0].sets, 4);
        assert_eq!(days()[29].workout[0].reps, 5);
    }
}
