use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::distributor::use_cases::update::{
    UpdateDistributorParams, UpdateDistributorUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::text::non_blank;

pub struct UpdateDistributorUseCaseImpl {
    pub repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateDistributorUseCase for UpdateDistributorUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateDistributorParams,
    ) -> Result<Distributor, DistributorError> {
        self.logger
            .info(&format!("Updating distributor: {}", params.id));

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(DistributorError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DistributorError::NotFound,
                other => DistributorError::Repository(other),
            })?;

        if let Some(other) = self.repository.find_by_name(&name).await?
            && other.id != existing.id
        {
            return Err(DistributorError::AlreadyExists);
        }

        let updated = Distributor::from_repository(
            existing.id,
            name,
            non_blank(params.cnpj),
            non_blank(params.contact),
            non_blank(params.notes),
            existing.created_at,
        );
        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Distributor updated: {}", updated.id));
        Ok(updated)
    }
}
