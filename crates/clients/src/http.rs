use crate::{config::ClientConfig, error::ClientError};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

/// Shared JSON-over-HTTP transport for the service clients
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// POST a JSON body and deserialize the JSON response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send(path, Some(body)).await?;
        Self::read_json(response).await
    }

    /// POST without a body, ignoring whatever the service responds with
    pub async fn post_and_discard(&self, path: &str) -> Result<(), ClientError> {
        self.send(path, None::<&()>).await?;
        Ok(())
    }

    async fn send<B>(&self, path: &str, body: Option<&B>) -> Result<Response, ClientError>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("POST {}", url);

        let mut request = self.authorized(self.client.post(&url));
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Connection(e.to_string())
            }
        })?;

        Self::check_status(response).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(
            header::AUTHORIZATION,
            format!("Bearer {}", self.config.token),
        )
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status_code, body);

        match status_code {
            401 | 403 => Err(ClientError::Auth(body)),
            404 => Err(ClientError::NotFound(body)),
            _ => Err(ClientError::Api {
                status: status_code,
                body,
            }),
        }
    }

    async fn read_json<T>(response: Response) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        response
            .json()
            .await
            .map_err(|e| ClientError::Deserialize(e.to_string()))
    }
}
