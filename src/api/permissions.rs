use crate::endpoints;
use crate::error::Result;
use crate::models::{Permissions, UserPermissions};
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_permissions(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Permissions>> {
        self.send(&endpoints::GET_BLUEPRINT_PERMISSIONS, &[("blueprintId", blueprint_id)], options)
            .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_permissions<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Permissions>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_PERMISSIONS,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_all_blueprint_user_permissions(
        &self,
        blueprint_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<UserPermissions>>> {
        self.send(
            &endpoints::GET_ALL_BLUEPRINT_USER_PERMISSIONS,
            &[("blueprintId", blueprint_id)],
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_blueprint_user_permissions(
        &self,
        blueprint_id: &str,
        user_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<UserPermissions>> {
        self.send(
            &endpoints::GET_BLUEPRINT_USER_PERMISSIONS,
            &[("blueprintId", blueprint_id), ("userId", user_id)],
            options,
        )
        .await
    }

    /// Grant a user access to a blueprint
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn add_blueprint_user_permissions<B>(
        &self,
        blueprint_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<UserPermissions>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::ADD_BLUEPRINT_USER_PERMISSIONS,
            &[("blueprintId", blueprint_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_blueprint_user_permissions<B>(
        &self,
        blueprint_id: &str,
        user_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<UserPermissions>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_BLUEPRINT_USER_PERMISSIONS,
            &[("blueprintId", blueprint_id), ("userId", user_id)],
            dto,
            options,
        )
        .await
    }

    /// Revoke a user's access to a blueprint
    #[instrument(level = "debug", skip(self, options))]
    pub async fn remove_blueprint_user_permissions(
        &self,
        blueprint_id: &str,
        user_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<UserPermissions>> {
        self.send(
            &endpoints::REMOVE_BLUEPRINT_USER_PERMISSIONS,
            &[("blueprintId", blueprint_id), ("userId", user_id)],
            options,
        )
        .await
    }
}
