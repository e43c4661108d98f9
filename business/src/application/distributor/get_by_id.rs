use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::Distributor;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::distributor::use_cases::get_by_id::{
    GetDistributorByIdParams, GetDistributorByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetDistributorByIdUseCaseImpl {
    pub repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDistributorByIdUseCase for GetDistributorByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetDistributorByIdParams,
    ) -> Result<Distributor, DistributorError> {
        self.logger
            .debug(&format!("Fetching distributor: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DistributorError::NotFound,
                other => DistributorError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockDistributorRepo, arc_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_map_missing_row_to_not_found() {
        let mut mock_repo = MockDistributorRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetDistributorByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(GetDistributorByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), DistributorError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_backend_failures() {
        let mut mock_repo = MockDistributorRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetDistributorByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(GetDistributorByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DistributorError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
