use std::collections::BTreeSet;

use chrono::Duration;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, ExerciseEntry, GenerationOptions, Goal, Name, ReadError, SyncError,
};

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn sync_plans(&self) -> Result<Vec<TrainingPlan>, SyncError>;
    async fn read_plans(&self) -> Result<Vec<TrainingPlan>, ReadError>;
    async fn create_plan(&self, plan: TrainingPlan) -> Result<TrainingPlan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_plans(&self) -> Result<Vec<TrainingPlan>, ReadError>;
    async fn create_plan(
        &self,
        name: Name,
        options: &GenerationOptions,
        catalog: &[ExerciseEntry],
        seed: u64,
    ) -> Result<TrainingPlan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

/// Multi-week training plan (macrocycle), immutable after assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    pub id: PlanID,
    pub name: Name,
    pub microcycles: Vec<Microcycle>,
}

impl TrainingPlan {
    #[must_use]
    pub fn num_weeks(&self) -> usize {
        self.microcycles.len()
    }

    #[must_use]
    pub fn num_days(&self) -> usize {
        self.microcycles.iter().map(Microcycle::num_days).sum()
    }

    pub fn duration(&self) -> Duration {
        self.microcycles.iter().map(Microcycle::duration).sum()
    }

    /// Distinct exercises referenced anywhere in the plan.
    pub fn exercises(&self) -> BTreeSet<&Name> {
        self.microcycles
            .iter()
            .flat_map(|microcycle| &microcycle.days)
            .flat_map(|day| &day.exercises)
            .collect::<BTreeSet<_>>()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// One week of training days.
#[derive(Debug, Clone, PartialEq)]
pub struct Microcycle {
    pub days: Vec<Day>,
}

impl Microcycle {
    #[must_use]
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn duration(&self) -> Duration {
        self.days.iter().map(Day::duration).sum()
    }
}

/// One training day: exercises in the order they were chosen, with the
/// goal-derived rep scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub exercises: Vec<Name>,
    pub scheme: RepScheme,
}

impl Day {
    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }

    /// Estimated duration, assuming 4 seconds per rep and 60 seconds of
    /// rest after each set.
    pub fn duration(&self) -> Duration {
        let per_exercise = u32::from(self.scheme.sets) * (u32::from(self.scheme.reps) * 4 + 60);
        Duration::seconds(
            i64::from(per_exercise) * i64::try_from(self.exercises.len()).unwrap_or(0),
        )
    }
}

/// Sets and reps prescribed for every exercise of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepScheme {
    pub sets: Sets,
    pub reps: Reps,
}

impl RepScheme {
    #[must_use]
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Hypertrophy => Self {
                sets: Sets(3),
                reps: Reps(10),
            },
            Goal::Strength => Self {
                sets: Sets(5),
                reps: Reps(5),
            },
            Goal::Endurance => Self {
                sets: Sets(3),
                reps: Reps(15),
            },
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    static PLAN: std::sync::LazyLock<TrainingPlan> = std::sync::LazyLock::new(|| TrainingPlan {
        id: 1.into(),
        name: Name::new("A").unwrap(),
        microcycles: vec![
            Microcycle {
                days: vec![
                    Day {
                        exercises: vec![
                            Name::new("Back Squat").unwrap(),
                            Name::new("Bench Press").unwrap(),
                        ],
                        scheme: RepScheme::for_goal(Goal::Strength),
                    },
                    Day {
                        exercises: vec![Name::new("Deadlift").unwrap()],
                        scheme: RepScheme::for_goal(Goal::Strength),
                    },
                ],
            },
            Microcycle {
                days: vec![Day {
                    exercises: vec![
                        Name::new("Back Squat").unwrap(),
                        Name::new("Plank").unwrap(),
                    ],
                    scheme: RepScheme::for_goal(Goal::Strength),
                }],
            },
        ],
    });

    #[test]
    fn test_training_plan_num_weeks() {
        assert_eq!(PLAN.num_weeks(), 2);
    }

    #[test]
    fn test_training_plan_num_days() {
        assert_eq!(PLAN.num_days(), 3);
    }

    #[test]
    fn test_training_plan_duration() {
        // 5 exercises, each 5 sets of (5 reps * 4 s + 60 s rest)
        assert_eq!(PLAN.duration(), Duration::seconds(5 * 5 * 80));
    }

    #[test]
    fn test_training_plan_exercises() {
        assert_eq!(
            PLAN.exercises(),
            BTreeSet::from([
                &Name::new("Back Squat").unwrap(),
                &Name::new("Bench Press").unwrap(),
                &Name::new("Deadlift").unwrap(),
                &Name::new("Plank").unwrap(),
            ])
        );
    }

    #[test]
    fn test_plan_id_nil() {
        assert!(PlanID::nil().is_nil());
        assert_eq!(PlanID::nil(), PlanID::default());
    }

    #[rstest]
    #[case(Goal::Hypertrophy, 3, 10)]
    #[case(Goal::Strength, 5, 5)]
    #[case(Goal::Endurance, 3, 15)]
    fn test_rep_scheme_for_goal(#[case] goal: Goal, #[case] sets: u32, #[case] reps: u32) {
        let scheme = RepScheme::for_goal(goal);
        assert_eq!((u32::from(scheme.sets), u32::from(scheme.reps)), (sets, reps));
    }

    #[rstest]
    #[case(0, Err(SetsError::OutOfRange))]
    #[case(1, Ok(()))]
    #[case(99, Ok(()))]
    #[case(100, Err(SetsError::OutOfRange))]
    fn test_sets_new(#[case] value: u32, #[case] expected: Result<(), SetsError>) {
        assert_eq!(Sets::new(value).map(u32::from), expected.map(|()| value));
    }

    #[rstest]
    #[case(0, Err(RepsError::OutOfRange))]
    #[case(1, Ok(()))]
    #[case(999, Ok(()))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<(), RepsError>) {
        assert_eq!(Reps::new(value).map(u32::from), expected.map(|()| value));
    }
}
