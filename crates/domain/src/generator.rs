use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    CreateError, Day, Equipment, ExerciseEntry, GenerationOptions, Microcycle, MovementPattern,
    Name, PlanID, PlanType, Property, RepScheme, TrainingPlan,
};

static FULL_BODY: [MovementPattern; 6] = [
    MovementPattern::Squat,
    MovementPattern::Hinge,
    MovementPattern::Push,
    MovementPattern::Pull,
    MovementPattern::Core,
    MovementPattern::SingleLeg,
];
static UPPER: [MovementPattern; 2] = [MovementPattern::Push, MovementPattern::Pull];
static LOWER: [MovementPattern; 3] = [
    MovementPattern::Squat,
    MovementPattern::Hinge,
    MovementPattern::SingleLeg,
];
static PUSH_DAY: [MovementPattern; 1] = [MovementPattern::Push];
static PULL_DAY: [MovementPattern; 1] = [MovementPattern::Pull];

/// Movement pattern slots a day must fill, in priority order.
///
/// Day indices beyond the template length wrap, so any `days_per_week` is
/// achievable with any plan type.
#[must_use]
pub fn required_patterns(plan_type: PlanType, day_index: usize) -> &'static [MovementPattern] {
    match plan_type {
        PlanType::FullBody => &FULL_BODY,
        PlanType::UpperLower => match day_index % 2 {
            0 => &UPPER,
            _ => &LOWER,
        },
        PlanType::PushPullLegs => match day_index % 3 {
            0 => &PUSH_DAY,
            1 => &PULL_DAY,
            _ => &LOWER,
        },
    }
}

/// Catalog entries matching `pattern` under the equipment ceiling, in
/// catalog order.
#[must_use]
pub fn candidates<'a>(
    catalog: &'a [ExerciseEntry],
    pattern: MovementPattern,
    ceiling: Equipment,
) -> Vec<&'a ExerciseEntry> {
    catalog
        .iter()
        .filter(|entry| entry.available_with(ceiling) && entry.has_pattern(pattern))
        .collect()
}

fn day_seed(seed: u64, week: u32, day: u8) -> u64 {
    seed ^ u64::from(week).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ u64::from(day).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
}

/// Seeded selection without replacement within a day.
///
/// Entries not yet used in the current week are preferred over entries
/// already used, but the preference is soft: once every remaining candidate
/// has been used this week, repeats across days are allowed again. Repeats
/// within the same day never are.
struct Picker<'a> {
    rng: ChaCha8Rng,
    used_week: &'a mut BTreeSet<Name>,
    used_today: BTreeSet<Name>,
}

impl<'a> Picker<'a> {
    fn new(seed: u64, week: u32, day: u8, used_week: &'a mut BTreeSet<Name>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(day_seed(seed, week, day)),
            used_week,
            used_today: BTreeSet::new(),
        }
    }

    fn pick(&mut self, pool: &[&ExerciseEntry]) -> Option<Name> {
        let available = pool
            .iter()
            .filter(|entry| !self.used_today.contains(&entry.name))
            .collect::<Vec<_>>();
        let fresh = available
            .iter()
            .filter(|entry| !self.used_week.contains(&entry.name))
            .copied()
            .collect::<Vec<_>>();
        let bucket = if fresh.is_empty() { &available } else { &fresh };

        if bucket.is_empty() {
            return None;
        }

        let name = bucket[self.rng.gen_range(0..bucket.len())].name.clone();
        self.used_today.insert(name.clone());
        self.used_week.insert(name.clone());
        Some(name)
    }
}

fn assemble_day(
    catalog: &[ExerciseEntry],
    options: &GenerationOptions,
    picker: &mut Picker<'_>,
    day_index: usize,
) -> Day {
    let mut exercises = vec![];

    for pattern in required_patterns(options.plan_type, day_index) {
        let pool = candidates(catalog, *pattern, options.equipment);
        if let Some(name) = picker.pick(&pool) {
            exercises.push(name);
        }
    }

    let eligible = catalog
        .iter()
        .filter(|entry| entry.available_with(options.equipment))
        .count();
    let minimum = options.level.min_exercises_per_day().min(eligible);
    let patterns = MovementPattern::iter().copied().collect::<Vec<_>>();
    let mut rotation = 0;

    while exercises.len() < minimum {
        let mut picked = false;
        for _ in 0..patterns.len() {
            let pattern = patterns[rotation % patterns.len()];
            rotation += 1;
            let pool = candidates(catalog, pattern, options.equipment);
            if let Some(name) = picker.pick(&pool) {
                exercises.push(name);
                picked = true;
                break;
            }
        }
        if !picked {
            break;
        }
    }

    Day {
        exercises,
        scheme: RepScheme::for_goal(options.goal),
    }
}

/// Builds a complete training plan from the catalog.
///
/// Identical `(options, catalog, seed)` always produce an identical plan.
/// The plan carries a nil ID until the persistence collaborator assigns one.
pub fn generate(
    name: Name,
    options: &GenerationOptions,
    catalog: &[ExerciseEntry],
    seed: u64,
) -> Result<TrainingPlan, GenerateError> {
    if catalog.is_empty() {
        return Err(GenerateError::EmptyCatalog);
    }

    let mut microcycles = vec![];

    for week in 0..options.number_of_weeks {
        let mut used_week = BTreeSet::new();
        let mut days = vec![];
        for day in 0..options.days_per_week {
            let mut picker = Picker::new(seed, week, day, &mut used_week);
            days.push(assemble_day(catalog, options, &mut picker, usize::from(day)));
        }
        microcycles.push(Microcycle { days });
    }

    Ok(TrainingPlan {
        id: PlanID::nil(),
        name,
        microcycles,
    })
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GenerateError {
    #[error("catalog contains no exercises")]
    EmptyCatalog,
}

impl From<GenerateError> for CreateError {
    fn from(value: GenerateError) -> Self {
        CreateError::Other(value.into())
    }
}
