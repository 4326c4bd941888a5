use std::slice::Iter;

use crate::{Equipment, Property};

/// How training days are split across the week.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlanType {
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl Property for PlanType {
    fn iter() -> Iter<'static, PlanType> {
        static PLAN_TYPES: [PlanType; 3] = [
            PlanType::FullBody,
            PlanType::UpperLower,
            PlanType::PushPullLegs,
        ];
        PLAN_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            PlanType::FullBody => "Full Body",
            PlanType::UpperLower => "Upper/Lower",
            PlanType::PushPullLegs => "Push/Pull/Legs",
        }
    }
}

/// Training experience of the user.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Minimum number of exercises per day, capped elsewhere at the number
    /// of distinct eligible catalog entries.
    #[must_use]
    pub fn min_exercises_per_day(self) -> usize {
        match self {
            Level::Beginner => 8,
            Level::Intermediate => 10,
            Level::Advanced => 12,
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Training goal, biasing the rep scheme but never exercise selection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Hypertrophy,
    Strength,
    Endurance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 3] = [Goal::Hypertrophy, Goal::Strength, Goal::Endurance];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Strength => "Strength",
            Goal::Endurance => "Endurance",
        }
    }
}

/// Validated description of the plan to generate.
///
/// Validation happens at this configuration boundary. The generator itself
/// accepts any `GenerationOptions` and is total for non-empty catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    pub plan_type: PlanType,
    pub days_per_week: u8,
    pub level: Level,
    pub equipment: Equipment,
    pub goal: Goal,
    pub number_of_weeks: u32,
}

impl GenerationOptions {
    pub fn new(
        plan_type: PlanType,
        days_per_week: u8,
        level: Level,
        equipment: Equipment,
        goal: Goal,
        number_of_weeks: u32,
    ) -> Result<Self, OptionsError> {
        if !(1..=7).contains(&days_per_week) {
            return Err(OptionsError::DaysPerWeek(days_per_week));
        }

        if number_of_weeks < 1 {
            return Err(OptionsError::NumberOfWeeks(number_of_weeks));
        }

        Ok(Self {
            plan_type,
            days_per_week,
            level,
            equipment,
            goal,
            number_of_weeks,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OptionsError {
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    DaysPerWeek(u8),
    #[error("Number of weeks must be 1 or more ({0})")]
    NumberOfWeeks(u32),
}
