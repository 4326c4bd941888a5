use log::{debug, error};

use crate::{
    CreateError, DeleteError, ExerciseEntry, GenerationOptions, Name, PlanID, PlanRepository,
    PlanService, ReadError, SyncError, TrainingPlan, generator,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: PlanRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn sync(&self) -> Result<(), SyncError> {
        self.repository.sync_plans().await?;
        Ok(())
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plans(&self) -> Result<Vec<TrainingPlan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    async fn create_plan(
        &self,
        name: Name,
        options: &GenerationOptions,
        catalog: &[ExerciseEntry],
        seed: u64,
    ) -> Result<TrainingPlan, CreateError> {
        let plan = generator::generate(name, options, catalog, seed)?;
        log_on_error!(
            self.repository.create_plan(plan),
            CreateError,
            "create",
            "plan"
        )
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(self.repository.delete_plan(id), DeleteError, "delete", "plan")
    }
}
