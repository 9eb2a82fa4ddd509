use crate::endpoints;
use crate::error::Result;
use crate::models::Environment;
use crate::page::Page;
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    #[instrument(level = "debug", skip_all)]
    pub async fn create_environment<B>(
        &self,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Environment>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(&endpoints::CREATE_ENVIRONMENT, &[], dto, options)
            .await
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn get_all_environments(
        &self,
        options: &RequestOptions,
    ) -> Result<Envelope<Page<Environment>>> {
        self.send(&endpoints::GET_ALL_ENVIRONMENTS, &[], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_environment(
        &self,
        environment_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Environment>> {
        self.send(&endpoints::GET_ENVIRONMENT, &[("environmentId", environment_id)], options)
            .await
    }

    /// Replace an environment
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_environment<B>(
        &self,
        environment_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Environment>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_ENVIRONMENT,
            &[("environmentId", environment_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn delete_environment(
        &self,
        environment_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Environment>> {
        self.send(&endpoints::DELETE_ENVIRONMENT, &[("environmentId", environment_id)], options)
            .await
    }
}
