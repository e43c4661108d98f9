use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::distributor::use_cases::get_all::{
    GetAllDistributorsParams, GetAllDistributorsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetAllDistributorsUseCaseImpl {
    pub repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllDistributorsUseCase for GetAllDistributorsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllDistributorsParams,
    ) -> Result<Vec<Distributor>, DistributorError> {
        self.logger.debug("Listing distributors");

        let distributors = self.repository.get_all().await?;

        Ok(match params.search.as_deref() {
            Some(term) => distributors.into_iter().filter(|d| d.matches(term)).collect(),
            None => distributors,
        })
    }
}
