use std::slice::Iter;

use crate::Name;

/// Enumerable exercise property with a fixed display order.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// Primary biomechanical role of an exercise.
///
/// The `iter()` order doubles as the slot priority within a day: required
/// slots are filled and top-up picks are rotated in this order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MovementPattern {
    Squat,
    Hinge,
    Push,
    Pull,
    Core,
    SingleLeg,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 6] = [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Push,
            MovementPattern::Pull,
            MovementPattern::Core,
            MovementPattern::SingleLeg,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::Push => "Push",
            MovementPattern::Pull => "Pull",
            MovementPattern::Core => "Core",
            MovementPattern::SingleLeg => "Single Leg",
        }
    }
}

/// Equipment an exercise requires.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EquipmentClass {
    None,
    PullUpBar,
    ResistanceBand,
    Dumbbell,
    Kettlebell,
    Barbell,
    Machine,
}

impl EquipmentClass {
    /// Lowest equipment tier at which this class is available.
    #[must_use]
    pub fn tier(self) -> Equipment {
        match self {
            EquipmentClass::None => Equipment::None,
            EquipmentClass::PullUpBar
            | EquipmentClass::ResistanceBand
            | EquipmentClass::Dumbbell
            | EquipmentClass::Kettlebell => Equipment::Home,
            EquipmentClass::Barbell | EquipmentClass::Machine => Equipment::Gym,
        }
    }
}

impl Property for EquipmentClass {
    fn iter() -> Iter<'static, EquipmentClass> {
        static EQUIPMENT_CLASSES: [EquipmentClass; 7] = [
            EquipmentClass::None,
            EquipmentClass::PullUpBar,
            EquipmentClass::ResistanceBand,
            EquipmentClass::Dumbbell,
            EquipmentClass::Kettlebell,
            EquipmentClass::Barbell,
            EquipmentClass::Machine,
        ];
        EQUIPMENT_CLASSES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentClass::None => "No Equipment",
            EquipmentClass::PullUpBar => "Pull Up Bar",
            EquipmentClass::ResistanceBand => "Resistance Band",
            EquipmentClass::Dumbbell => "Dumbbell",
            EquipmentClass::Kettlebell => "Kettlebell",
            EquipmentClass::Barbell => "Barbell",
            EquipmentClass::Machine => "Machine",
        }
    }
}

/// Equipment tier a user has declared access to.
///
/// Tiers are totally ordered and monotonic: a higher ceiling permits all
/// exercises of the lower tiers. The ceiling only limits, never expands.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Equipment {
    None,
    Home,
    Gym,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 3] = [Equipment::None, Equipment::Home, Equipment::Gym];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Home => "Home",
            Equipment::Gym => "Gym",
        }
    }
}

/// Immutable catalog entry, read-only to the plan generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub name: Name,
    pub equipment: EquipmentClass,
    patterns: Vec<MovementPattern>,
}

impl ExerciseEntry {
    pub fn new(
        name: Name,
        equipment: EquipmentClass,
        patterns: Vec<MovementPattern>,
    ) -> Result<Self, ExerciseEntryError> {
        if patterns.is_empty() {
            return Err(ExerciseEntryError::NoPatterns);
        }

        Ok(Self {
            name,
            equipment,
            patterns,
        })
    }

    #[must_use]
    pub fn patterns(&self) -> &[MovementPattern] {
        &self.patterns
    }

    #[must_use]
    pub fn has_pattern(&self, pattern: MovementPattern) -> bool {
        self.patterns.contains(&pattern)
    }

    #[must_use]
    pub fn available_with(&self, ceiling: Equipment) -> bool {
        self.equipment.tier() <= ceiling
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseEntryError {
    #[error("Exercise must have at least one movement pattern")]
    NoPatterns,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(EquipmentClass::None, Equipment::None)]
    #[case(EquipmentClass::PullUpBar, Equipment::Home)]
    #[case(EquipmentClass::ResistanceBand, Equipment::Home)]
    #[case(EquipmentClass::Dumbbell, Equipment::Home)]
    #[case(EquipmentClass::Kettlebell, Equipment::Home)]
    #[case(EquipmentClass::Barbell, Equipment::Gym)]
    #[case(EquipmentClass::Machine, Equipment::Gym)]
    fn test_equipment_class_tier(#[case] class: EquipmentClass, #[case] tier: Equipment) {
        assert_eq!(class.tier(), tier);
    }

    #[test]
    fn test_equipment_ordering() {
        assert!(Equipment::None < Equipment::Home);
        assert!(Equipment::Home < Equipment::Gym);
    }

    #[test]
    fn test_exercise_entry_new() {
        let entry = ExerciseEntry::new(
            Name::new("Push-up").unwrap(),
            EquipmentClass::None,
            vec![MovementPattern::Push],
        )
        .unwrap();

        assert!(entry.has_pattern(MovementPattern::Push));
        assert!(!entry.has_pattern(MovementPattern::Pull));
        assert_eq!(entry.patterns(), [MovementPattern::Push]);
    }

    #[test]
    fn test_exercise_entry_new_without_patterns() {
        assert_eq!(
            ExerciseEntry::new(
                Name::new("Push-up").unwrap(),
                EquipmentClass::None,
                vec![]
            ),
            Err(ExerciseEntryError::NoPatterns)
        );
    }

    #[rstest]
    #[case(EquipmentClass::None, Equipment::None, true)]
    #[case(EquipmentClass::Dumbbell, Equipment::None, false)]
    #[case(EquipmentClass::Dumbbell, Equipment::Home, true)]
    #[case(EquipmentClass::Barbell, Equipment::Home, false)]
    #[case(EquipmentClass::Barbell, Equipment::Gym, true)]
    fn test_exercise_entry_available_with(
        #[case] class: EquipmentClass,
        #[case] ceiling: Equipment,
        #[case] expected: bool,
    ) {
        let entry = ExerciseEntry::new(
            Name::new("A").unwrap(),
            class,
            vec![MovementPattern::Core],
        )
        .unwrap();

        assert_eq!(entry.available_with(ceiling), expected);
    }

    #[test]
    fn test_movement_pattern_iter_order() {
        assert_eq!(
            MovementPattern::iter().copied().collect::<Vec<_>>(),
            [
                MovementPattern::Squat,
                MovementPattern::Hinge,
                MovementPattern::Push,
                MovementPattern::Pull,
                MovementPattern::Core,
                MovementPattern::SingleLeg,
            ]
        );
    }
}
