use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::{Distributor, NewDistributorProps};
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::distributor::use_cases::create::{
    CreateDistributorParams, CreateDistributorUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateDistributorUseCaseImpl {
    pub repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateDistributorUseCase for CreateDistributorUseCaseImpl {
    async fn execute(
        &self,
        params: CreateDistributorParams,
    ) -> Result<Distributor, DistributorError> {
        self.logger
            .info(&format!("Creating distributor: {}", params.name.trim()));

        let distributor = Distributor::new(NewDistributorProps {
            name: params.name,
            cnpj: params.cnpj,
            contact: params.contact,
            notes: params.notes,
        })?;

        if self
            .repository
            .find_by_name(&distributor.name)
            .await?
            .is_some()
        {
            return Err(DistributorError::AlreadyExists);
        }

        self.repository.save(&distributor).await?;

        self.logger
            .info(&format!("Distributor created: {}", distributor.id));
        Ok(distributor)
    }
}
