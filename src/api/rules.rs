//! Blueprint rules: assertions, parameters, correlations, files and run
//! configurations. Each family supports list, get, add, partial update and
//! remove under `/api/blueprints/{blueprintId}/...`.

use crate::endpoints;
use crate::error::Result;
use crate::models::{AssertionRule, CorrelationRule, FileRule, ParameterRule, RunConfiguration};
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    // Assertions

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_assertions(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<AssertionRule>>> {
        self.send(&endpoints::GET_BLUEPRINT_ASSERTIONS, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_assertion(
        &self,
        blueprint_id: &str,
        assertion_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<AssertionRule>> {
        self.send(
            &endpoints::GET_BLUEPRINT_ASSERTION,
            &[("blueprintId", blueprint_id), ("assertionId", assertion_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_assertion<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<AssertionRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_ASSERTION,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_assertion<B>(
        &self,
        blueprint_id: &str,
        assertion_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<AssertionRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_ASSERTION,
            &[("blueprintId", blueprint_id), ("assertionId", assertion_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_assertion(
        &self,
        blueprint_id: &str,
        assertion_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<AssertionRule>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_ASSERTION,
            &[("blueprintId", blueprint_id), ("assertionId", assertion_id)],
            options,
        )
        .await
    }

    // Parameters

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_parameters(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<ParameterRule>>> {
        self.send(&endpoints::GET_BLUEPRINT_PARAMETERS, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_parameter(
        &self,
        blueprint_id: &str,
        parameter_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<ParameterRule>> {
        self.send(
            &endpoints::GET_BLUEPRINT_PARAMETER,
            &[("blueprintId", blueprint_id), ("parameterId", parameter_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_parameter<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<ParameterRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_PARAMETER,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_parameter<B>(
        &self,
        blueprint_id: &str,
        parameter_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<ParameterRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_PARAMETER,
            &[("blueprintId", blueprint_id), ("parameterId", parameter_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_parameter(
        &self,
        blueprint_id: &str,
        parameter_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<ParameterRule>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_PARAMETER,
            &[("blueprintId", blueprint_id), ("parameterId", parameter_id)],
            options,
        )
        .await
    }

    // Correlations

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_correlations(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<CorrelationRule>>> {
        self.send(&endpoints::GET_BLUEPRINT_CORRELATIONS, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_correlation(
        &self,
        blueprint_id: &str,
        correlation_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<CorrelationRule>> {
        self.send(
            &endpoints::GET_BLUEPRINT_CORRELATION,
            &[("blueprintId", blueprint_id), ("correlationId", correlation_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_correlation<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<CorrelationRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_CORRELATION,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_correlation<B>(
        &self,
        blueprint_id: &str,
        correlation_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<CorrelationRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_CORRELATION,
            &[("blueprintId", blueprint_id), ("correlationId", correlation_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_correlation(
        &self,
        blueprint_id: &str,
        correlation_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<CorrelationRule>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_CORRELATION,
            &[("blueprintId", blueprint_id), ("correlationId", correlation_id)],
            options,
        )
        .await
    }

    // Files

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_files(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<FileRule>>> {
        self.send(&endpoints::GET_BLUEPRINT_FILES, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_file(
        &self,
        blueprint_id: &str,
        file_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<FileRule>> {
        self.send(
            &endpoints::GET_BLUEPRINT_FILE,
            &[("blueprintId", blueprint_id), ("fileId", file_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_file<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<FileRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_FILE,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_file<B>(
        &self,
        blueprint_id: &str,
        file_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<FileRule>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_FILE,
            &[("blueprintId", blueprint_id), ("fileId", file_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_file(
        &self,
        blueprint_id: &str,
        file_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<FileRule>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_FILE,
            &[("blueprintId", blueprint_id), ("fileId", file_id)],
            options,
        )
        .await
    }

    // Run configurations

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_run_configurations(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<RunConfiguration>>> {
        self.send(
            &endpoints::GET_BLUEPRINT_RUN_CONFIGURATIONS,
            &[("blueprintId", blueprint_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_run_configuration(
        &self,
        blueprint_id: &str,
        run_configuration_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<RunConfiguration>> {
        self.send(
            &endpoints::GET_BLUEPRINT_RUN_CONFIGURATION,
            &[("blueprintId", blueprint_id), ("runConfigurationId", run_configuration_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_run_configuration<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<RunConfiguration>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_RUN_CONFIGURATION,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_run_configuration<B>(
        &self,
        blueprint_id: &str,
        run_configuration_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<RunConfiguration>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_RUN_CONFIGURATION,
            &[("blueprintId", blueprint_id), ("runConfigurationId", run_configuration_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_run_configuration(
        &self,
        blueprint_id: &str,
        run_configuration_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<RunConfiguration>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_RUN_CONFIGURATION,
            &[("blueprintId", blueprint_id), ("runConfigurationId", run_configuration_id)],
            options,
        )
        .await
    }
}
