//! Plain-text REST client for query endpoints.

use crate::error::TransportError;
use rand::Rng;
use tracing::debug;

/// Idle connections kept per query host.
pub const MAX_IDLE_PER_HOST: usize = 1000;

/// Sends statements to one of several query endpoints.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    uris: Vec<String>,
}

impl RestClient {
    /// Build a client for `addresses`. Each address is a base URL ending in
    /// `/`; the endpoint is `{address}query`.
    pub fn new(addresses: &[String]) -> Result<Self, TransportError> {
        if addresses.is_empty() {
            return Err(TransportError::NoEndpoints);
        }

        let uris = addresses
            .iter()
            .map(|address| format!("{address}query"))
            .collect();
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self { client, uris })
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    /// POST `statement` to a random endpoint and drain the response.
    pub async fn execute(&self, statement: &str) -> Result<(), TransportError> {
        let uri = &self.uris[rand::rng().random_range(0..self.uris.len())];

        let response = self
            .client
            .post(uri)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(statement.to_string())
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(TransportError::Status {
                uri: uri.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Query returned {} bytes from {uri}", body.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uris() {
        let client = RestClient::new(&[
            "http://10.0.0.1:8093/".to_string(),
            "http://10.0.0.2:8093/".to_string(),
        ])
        .unwrap();
        assert_eq!(
            client.uris(),
            ["http://10.0.0.1:8093/query", "http://10.0.0.2:8093/query"]
        );
    }

    #[test]
    fn test_no_addresses() {
        assert!(matches!(
            RestClient::new(&[]),
            Err(TransportError::NoEndpoints)
        ));
    }
}
