use crate::endpoints;
use crate::error::Result;
use crate::models::{Application, Blueprint};
use crate::page::Page;
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    #[instrument(level = "debug", skip_all)]
    pub async fn create_blueprint<B>(
        &self,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(&endpoints::CREATE_BLUEPRINT, &[], dto, options)
            .await
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn get_all_blueprints(
        &self,
        options: &RequestOptions,
    ) -> Result<Envelope<Page<Blueprint>>> {
        self.send(&endpoints::GET_ALL_BLUEPRINTS, &[], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>> {
        self.send(&endpoints::GET_BLUEPRINT, &[("blueprintId", blueprint_id)], options)
            .await
    }

    /// Partially update a blueprint; only the fields present in `dto` change
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn delete_blueprint(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>> {
        self.send(&endpoints::DELETE_BLUEPRINT, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_apps(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<Application>>> {
        self.send(&endpoints::GET_BLUEPRINT_APPS, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_app(
        &self,
        blueprint_id: &str,
        app_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Application>> {
        self.send(
            &endpoints::GET_BLUEPRINT_APP,
            &[("blueprintId", blueprint_id), ("appId", app_id)],
            options,
        )
        .await
    }

    /// Attach an app; the service answers with the updated blueprint
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_app<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_APP,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    /// Detach an app; the service answers with the updated blueprint
    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_app(
        &self,
        blueprint_id: &str,
        app_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Blueprint>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_APP,
            &[("blueprintId", blueprint_id), ("appId", app_id)],
            options,
        )
        .await
    }
}
