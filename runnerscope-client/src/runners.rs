//! Runner-related API endpoints

use crate::GithubClient;
use crate::error::{ClientError, Result};
use runnerscope_core::dto::runner::{RunnerGroupList, RunnerList};
use tracing::debug;

impl GithubClient {
    // =============================================================================
    // Runner Inventory
    // =============================================================================

    /// List the runner groups of an organization
    ///
    /// # Arguments
    /// * `organization` - Organization login, used verbatim in the path
    ///
    /// # Returns
    /// The groups as returned by a single API response
    pub async fn list_runner_groups(&self, organization: &str) -> Result<RunnerGroupList> {
        if organization.is_empty() {
            return Err(ClientError::InvalidRequest(
                "Organization cannot be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/orgs/{}/actions/runner-groups",
            self.base_url, organization
        );
        debug!("GET {}", url);
        let response = self.get(&url)?.send().await?;

        let groups: RunnerGroupList = self.handle_response(response).await?;
        debug!("Received {} runner groups", groups.runner_groups.len());
        Ok(groups)
    }

    /// List the runners behind a group's `runners_url`
    ///
    /// # Arguments
    /// * `runners_url` - Absolute URL from a runner group, or a path relative
    ///   to the API base URL
    ///
    /// # Returns
    /// The runners as returned by a single API response
    pub async fn list_runners(&self, runners_url: &str) -> Result<RunnerList> {
        let url = self.resolve(runners_url)?;
        debug!("GET {}", url);
        let response = self.get(&url)?.send().await?;

        let runners: RunnerList = self.handle_response(response).await?;
        debug!("Received {} runners", runners.runners.len());
        Ok(runners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request head
    async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_list_runner_groups_sends_authenticated_request() {
        let body = r#"{"total_count":1,"runner_groups":[{"id":1,"name":"Default","default":true,"runners_url":"https://api.github.com/orgs/octo/actions/runner-groups/1/runners"}]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let client = GithubClient::with_client(base_url, "secret", Client::new());

        let groups = client.list_runner_groups("octo").await.unwrap();
        let request = server.await.unwrap().to_lowercase();

        assert_eq!(groups.runner_groups.len(), 1);
        assert!(groups.runner_groups[0].is_default);
        assert!(request.starts_with("get /orgs/octo/actions/runner-groups http/1.1"));
        assert!(request.contains("authorization: bearer secret"));
        assert!(request.contains("x-github-api-version: 2022-11-28"));
    }

    #[tokio::test]
    async fn test_list_runners_resolves_relative_path() {
        let body = r#"{"total_count":2,"runners":[{"id":1,"name":"a","os":"Linux"},{"id":2,"name":"b","os":"Windows"}]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let client = GithubClient::with_client(base_url, "secret", Client::new());

        let runners = client
            .list_runners("/orgs/octo/actions/runner-groups/1/runners")
            .await
            .unwrap();
        let request = server.await.unwrap();

        let names: Vec<&str> = runners.runners.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(request.starts_with("GET /orgs/octo/actions/runner-groups/1/runners "));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_api_message() {
        let (base_url, _server) =
            serve_once("401 Unauthorized", r#"{"message":"Bad credentials"}"#).await;
        let client = GithubClient::with_client(base_url, "wrong", Client::new());

        let err = client.list_runner_groups("octo").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "API error (status 401): Bad credentials");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (base_url, _server) = serve_once("200 OK", r#"{"unexpected":true}"#).await;
        let client = GithubClient::with_client(base_url, "secret", Client::new());

        let err = client.list_runner_groups("octo").await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_empty_organization_is_rejected() {
        let client = GithubClient::new("secret");
        let err = client.list_runner_groups("").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
