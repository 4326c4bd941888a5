#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod generator;
mod name;
mod options;
mod plan;
mod service;

pub use error::{CreateError, DeleteError, ReadError, StorageError, SyncError};
pub use exercise::{
    Equipment, EquipmentClass, ExerciseEntry, ExerciseEntryError, MovementPattern, Property,
};
pub use generator::{GenerateError, candidates, generate, required_patterns};
pub use name::{Name, NameError};
pub use options::{GenerationOptions, Goal, Level, OptionsError, PlanType};
pub use plan::{
    Day, Microcycle, PlanID, PlanRepository, PlanService, RepScheme, Reps, RepsError, Sets,
    SetsError, TrainingPlan,
};
pub use service::Service;
