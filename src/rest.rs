use crate::client::Config;
use crate::error::Result;
use crate::request::{build, Operation, RequestOptions};
use crate::response::{normalize, Envelope};
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Client for the Testament core service.
///
/// Holds only its configuration and a shared transport; every call builds
/// its own request and envelope, so one client can serve concurrent calls.
#[derive(Clone)]
pub struct TestamentClient {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl TestamentClient {
    /// Create a client for `base_url` with the default reqwest transport
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(Config::new(base_url)?)
    }

    /// Create a client with custom configuration and the default transport
    pub fn with_config(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends through the given transport.
    ///
    /// `config.user_agent` and the timeouts only apply to the default
    /// transport; a supplied transport is used as is.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        TestamentClient { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Run one operation and decode the response body into `T`.
    ///
    /// # Arguments
    /// * `operation` - Endpoint descriptor, see [`crate::endpoints`]
    /// * `path_params` - Values for every placeholder in the path template
    /// * `options` - Extra headers and query parameters
    /// * `body` - Request body for operations that take one
    ///
    /// # Errors
    /// [`MissingPathParameter`](crate::ClientError::MissingPathParameter) before
    /// anything is sent, [`Status`](crate::ClientError::Status) when the service
    /// answers with a failure status, [`Transport`](crate::ClientError::Transport)
    /// when no response arrives.
    pub async fn execute<T, B>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        options: &RequestOptions,
        body: Option<&B>,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(operation, path_params, options, body, true)
            .await
    }

    async fn dispatch<T, B>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        options: &RequestOptions,
        body: Option<&B>,
        revive_dates: bool,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let request = build(&self.config.base_url, operation, path_params, options, body)?;

        let method = request.method;
        let url = request.url.clone();
        let start = Instant::now();
        let outcome = self.transport.send(request).await;
        let elapsed = start.elapsed();

        match &outcome {
            Ok(raw) => {
                tracing::debug!(%method, %url, status = raw.status, ?elapsed, "request completed")
            }
            Err(failure) => match &failure.response {
                Some(raw) => {
                    tracing::debug!(%method, %url, status = raw.status, ?elapsed, "request failed")
                }
                None => {
                    tracing::warn!(%method, %url, error = %failure.message, ?elapsed, "no response")
                }
            },
        }

        normalize(outcome, revive_dates)
    }

    pub(crate) async fn send<T>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        options: &RequestOptions,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.execute::<T, ()>(operation, path_params, options, None)
            .await
    }

    /// Like `send`, but string leaves reach `T` exactly as received
    pub(crate) async fn send_verbatim<T>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        options: &RequestOptions,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.dispatch::<T, ()>(operation, path_params, options, None, false)
            .await
    }

    pub(crate) async fn send_with_body<T, B>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        body: &B,
        options: &RequestOptions,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(operation, path_params, options, Some(body))
            .await
    }
}

impl fmt::Debug for TestamentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestamentClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
