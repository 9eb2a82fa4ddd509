use crate::endpoints;
use crate::error::Result;
use crate::models::Namespace;
use crate::page::Page;
use crate::request::RequestOptions;
use crate::response::Envelope;
use crate::rest::TestamentClient;
use serde::Serialize;
use tracing::instrument;

impl TestamentClient {
    #[instrument(level = "debug", skip_all)]
    pub async fn create_namespace<B>(
        &self,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Namespace>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(&endpoints::CREATE_NAMESPACE, &[], dto, options)
            .await
    }

    /// List namespaces. Filters such as `metadata.creator.userId` go in
    /// `options.query` and are passed through untouched.
    #[instrument(level = "debug", skip_all)]
    pub async fn get_all_namespaces(
        &self,
        options: &RequestOptions,
    ) -> Result<Envelope<Page<Namespace>>> {
        self.send(&endpoints::GET_ALL_NAMESPACES, &[], options)
            .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_namespace(
        &self,
        namespace_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Namespace>> {
        self.send(&endpoints::GET_NAMESPACE, &[("namespaceId", namespace_id)], options)
            .await
    }

    /// Ids of the namespaces `member_id` belongs to. Ids are opaque, so they
    /// are returned without date reconstitution.
    #[instrument(level = "debug", skip(self, options))]
    pub async fn get_namespaces_for_member(
        &self,
        member_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Vec<String>>> {
        self.send_verbatim(
            &endpoints::GET_NAMESPACES_FOR_MEMBER,
            &[("memberId", member_id)],
            options,
        )
        .await
    }

    /// Replace a namespace
    #[instrument(level = "debug", skip(self, dto, options))]
    pub async fn update_namespace<B>(
        &self,
        namespace_id: &str,
        dto: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<Namespace>>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(
            &endpoints::UPDATE_NAMESPACE,
            &[("namespaceId", namespace_id)],
            dto,
            options,
        )
        .await
    }

    #[instrument(level = "debug", skip(self, options))]
    pub async fn delete_namespace(
        &self,
        namespace_id: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<Namespace>> {
        self.send(&endpoints::DELETE_NAMESPACE, &[("namespaceId", namespace_id)], options)
            .await
    }
}
