use derive_more::{AsRef, Display};

/// Display name of an exercise or a training plan.
///
/// Exercise names are the keys by which plans reference catalog entries,
/// so they must be non-empty and unique within a catalog.
#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Back Squat", Ok(Name("Back Squat".to_string())))]
    #[case("  Plank  ", Ok(Name("Plank".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "Excessively Elaborate Single-Arm Overhead Kettlebell Walking Lunge",
        Err(NameError::TooLong(66))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_in_hash_set() {
        let names = std::collections::HashSet::from([
            Name::new("Plank").unwrap(),
            Name::new("Plank").unwrap(),
            Name::new("Push-up").unwrap(),
        ]);
        assert_eq!(names.len(), 2);
        assert!(names.contains(&Name::new("Plank").unwrap()));
    }
}
