use std::sync::LazyLock;

use crate::{EquipmentClass, ExerciseEntry, MovementPattern, Name};

/// Built-in exercise, convertible into an [`ExerciseEntry`].
#[cfg_attr(test, derive(Debug))]
pub struct Entry {
    pub name: &'static str,
    pub equipment: EquipmentClass,
    pub patterns: &'static [MovementPattern],
}

static EXERCISES: LazyLock<Vec<ExerciseEntry>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .filter_map(|entry| {
            ExerciseEntry::new(
                Name::new(entry.name).ok()?,
                entry.equipment,
                entry.patterns.to_vec(),
            )
            .ok()
        })
        .collect()
});

/// Built-in catalog in insertion order, the default generator input.
#[must_use]
pub fn entries() -> Vec<ExerciseEntry> {
    EXERCISES.clone()
}

const ENTRIES: [Entry; 31] = [
    Entry {
        name: "Air Squat",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::Squat],
    },
    Entry {
        name: "Arnold Press",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::Push],
    },
    Entry {
        name: "Back Extension",
        equipment: EquipmentClass::Machine,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Barbell Back Squat",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::Squat],
    },
    Entry {
        name: "Barbell Bench Press",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::Push],
    },
    Entry {
        name: "Barbell Deadlift",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Barbell Lunge",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::SingleLeg, MovementPattern::Squat],
    },
    Entry {
        name: "Barbell Romanian Deadlift",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Barbell Row",
        equipment: EquipmentClass::Barbell,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Bulgarian Split Squat",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::SingleLeg, MovementPattern::Squat],
    },
    Entry {
        name: "Cable Crunch",
        equipment: EquipmentClass::Machine,
        patterns: &[MovementPattern::Core],
    },
    Entry {
        name: "Chin-up",
        equipment: EquipmentClass::PullUpBar,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Dumbbell Overhead Press",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::Push],
    },
    Entry {
        name: "Dumbbell Romanian Deadlift",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Dumbbell Row",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Glute Bridge",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Goblet Squat",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::Squat],
    },
    Entry {
        name: "Hanging Knee Raise",
        equipment: EquipmentClass::PullUpBar,
        patterns: &[MovementPattern::Core],
    },
    Entry {
        name: "Kettlebell Swing",
        equipment: EquipmentClass::Kettlebell,
        patterns: &[MovementPattern::Hinge],
    },
    Entry {
        name: "Lat Pulldown",
        equipment: EquipmentClass::Machine,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Leg Press",
        equipment: EquipmentClass::Machine,
        patterns: &[MovementPattern::Squat],
    },
    Entry {
        name: "Pallof Press",
        equipment: EquipmentClass::ResistanceBand,
        patterns: &[MovementPattern::Core],
    },
    Entry {
        name: "Plank",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::Core],
    },
    Entry {
        name: "Pull-up",
        equipment: EquipmentClass::PullUpBar,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Push-up",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::Push],
    },
    Entry {
        name: "Reverse Lunge",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::SingleLeg, MovementPattern::Squat],
    },
    Entry {
        name: "Seated Cable Row",
        equipment: EquipmentClass::Machine,
        patterns: &[MovementPattern::Pull],
    },
    Entry {
        name: "Side Plank",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::Core],
    },
    Entry {
        name: "Single-Leg Glute Bridge",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::SingleLeg, MovementPattern::Hinge],
    },
    Entry {
        name: "Step-up",
        equipment: EquipmentClass::None,
        patterns: &[MovementPattern::SingleLeg],
    },
    Entry {
        name: "Walking Lunge",
        equipment: EquipmentClass::Dumbbell,
        patterns: &[MovementPattern::SingleLeg],
    },
];
