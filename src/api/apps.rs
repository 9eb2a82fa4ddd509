use crate::endpoints;
use crate::error::Result;
use crate::models::Application;
use crate::page::Page;
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    #[instrument(level = "debug", skip_all)]
    pub async fn create_app<B>(
        &self,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Application>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(&endpoints::CREATE_APP, &[], dto, options)
            .await
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn get_all_apps(
        &self,
        options: &RequestOptions,
    ) -> Result<Envelope<Page<Application>>> {
        self.send(&endpoints::GET_ALL_APPS, &[], options).await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_app(
        &self,
        app_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Application>> {
        self.send(&endpoints::GET_APP, &[("appId", app_id)], options)
            .await
    }

    /// Replace an application
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_app<B>(
        &self,
        app_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Application>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(&endpoints::UPDATE_APP, &[("appId", app_id)], dto, options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn delete_app(
        &self,
        app_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Application>> {
        self.send(&endpoints::DELETE_APP, &[("appId", app_id)], options)
            .await
    }
}
