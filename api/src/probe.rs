//! The backend connectivity probe.
//!
//! One GET against the projects endpoint. The response body is not parsed;
//! the only question the probe answers is "is something listening there and
//! answering without an error status". There is no retry and no timeout: a
//! request that never settles simply never settles, and overlapping probes
//! are independent requests.

use thiserror::Error;

/// Why a probe did not count as a successful connection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// The request never produced an HTTP response (refused, unreachable,
    /// DNS failure, ...). Carries the client's human-readable description.
    #[error("{0}")]
    Transport(String),

    /// The backend answered, but with an error status.
    #[error("server returned status {0}")]
    Status(u16),
}

/// Issues a single GET against `url`.
///
/// Any response that is not a 4xx/5xx counts as success. Every failure mode
/// is captured here and mapped into [`ProbeError`]; nothing escapes as a
/// panic or an untyped error.
pub async fn check_backend(url: &str) -> Result<(), ProbeError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProbeError::Transport(e.to_string()))?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ProbeError::Status(status.as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reachable_backend_is_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let url = format!("{}/projects", server.url());
        assert_eq!(check_backend(&url).await, Ok(()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_maps_to_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/projects")
            .with_status(503)
            .create_async()
            .await;

        let url = format!("{}/projects", server.url());
        assert_eq!(check_backend(&url).await, Err(ProbeError::Status(503)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        // Grab a port from a short-lived listener, then drop it so the
        // connection is refused. (A dropped mockito server keeps its port
        // open in the shared pool, so it cannot play this role.)
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/projects");
        drop(listener);

        match check_backend(&url).await {
            Err(ProbeError::Transport(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
