//! reqwest-backed hiscores client.
//!
//! Talks to `index_lite.json` on the configured host:
//! `<base_url>/<mode endpoint>?player=<url-encoded username>`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use urlencoding::encode;

use crate::errors::HiscoresError;
use crate::models::{GameMode, HiscoresResponse, PlayerPayload};

use super::config::ClientConfig;
use super::traits::HiscoresSource;

/// Hiscores client over HTTPS.
pub struct HiscoresClient {
    client: Client,
    base_url: String,
}

impl HiscoresClient {
    /// Create a client against the public hiscores with the default timeout.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a player under a game mode.
    pub fn player_url(&self, username: &str, mode: GameMode) -> String {
        format!(
            "{}/{}?player={}",
            self.base_url,
            mode.endpoint_path(),
            encode(username)
        )
    }

    /// GET the raw body. `Ok(None)` means the endpoint answered 404.
    async fn fetch_body(
        &self,
        username: &str,
        mode: GameMode,
    ) -> Result<Option<String>, HiscoresError> {
        let url = self.player_url(username, mode);
        debug!("Hiscores request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                HiscoresError::Timeout {
                    username: username.to_string(),
                    mode,
                }
            } else {
                HiscoresError::Request {
                    username: username.to_string(),
                    mode,
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(HiscoresError::Http {
                username: username.to_string(),
                mode,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HiscoresError::Timeout {
                    username: username.to_string(),
                    mode,
                }
            } else {
                HiscoresError::Request {
                    username: username.to_string(),
                    mode,
                    message: format!("Failed to read response: {}", e),
                }
            }
        })?;

        Ok(Some(body))
    }
}

impl Default for HiscoresClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an `index_lite.json` body into a payload tagged with `mode`.
pub(crate) fn parse_player_body(
    body: &str,
    username: &str,
    mode: GameMode,
) -> Result<PlayerPayload, HiscoresError> {
    let response: HiscoresResponse =
        serde_json::from_str(body).map_err(|e| HiscoresError::MalformedResponse {
            username: username.to_string(),
            mode,
            message: e.to_string(),
        })?;
    Ok(response.into_payload(mode))
}

#[async_trait]
impl HiscoresSource for HiscoresClient {
    async fn fetch_player(
        &self,
        username: &str,
        mode: GameMode,
    ) -> Result<Option<PlayerPayload>, HiscoresError> {
        info!("Fetching data for player '{}' in {} mode", username, mode);

        let Some(body) = self.fetch_body(username, mode).await? else {
            info!(
                "No data found for username '{}' in game mode '{}'",
                username, mode
            );
            return Ok(None);
        };

        parse_player_body(&body, username, mode).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const PLAYER_BODY: &str = r#"{
        "skills": [
            {"id": 0, "name": "Overall", "rank": 1, "level": 2277, "xp": 4600000000},
            {"id": 1, "name": "Attack", "rank": 15, "level": 99, "xp": 200000000}
        ],
        "activities": [
            {"id": 0, "name": "League Points", "rank": -1, "score": -1},
            {"id": 6, "name": "Clue Scrolls (all)", "rank": 2000, "score": 100}
        ]
    }"#;

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// Accept one connection, hand back its request line, reply with `response`.
    async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let head = String::from_utf8_lossy(&request);
            let request_line = head.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), rx)
    }

    fn client_for(base_url: String) -> HiscoresClient {
        HiscoresClient::with_config(ClientConfig {
            base_url,
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        })
    }

    #[test]
    fn test_player_url_encodes_username() {
        let client = HiscoresClient::new();
        assert_eq!(
            client.player_url("Lynx Titan", GameMode::Regular),
            "https://secure.runescape.com/m=hiscore_oldschool/index_lite.json?player=Lynx%20Titan"
        );
        assert_eq!(
            client.player_url("5th hcim LUL", GameMode::Hardcore),
            "https://secure.runescape.com/m=hiscore_oldschool_hardcore_ironman/index_lite.json?player=5th%20hcim%20LUL"
        );
    }

    #[test]
    fn test_player_url_trims_trailing_slash() {
        let client = client_for("http://localhost:8080/".to_string());
        assert_eq!(
            client.player_url("Gibbed", GameMode::Ultimate),
            "http://localhost:8080/m=hiscore_oldschool_ultimate/index_lite.json?player=Gibbed"
        );
    }

    #[test]
    fn test_parse_player_body_rejects_non_json() {
        let err = parse_player_body("<html>", "Zezima", GameMode::Regular).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Format);
    }

    #[tokio::test]
    async fn test_fetch_player_success() {
        let (base_url, request_line) = serve_once(http_response("200 OK", PLAYER_BODY)).await;
        let client = client_for(base_url);

        let payload = client
            .fetch_player("Lynx Titan", GameMode::Regular)
            .await
            .unwrap()
            .expect("player should be found");

        assert_eq!(payload.game_mode, GameMode::Regular);
        assert_eq!(payload.skills.len(), 2);
        assert_eq!(payload.activities[1].name, "Clue Scrolls (all)");

        let line = request_line.await.unwrap();
        assert_eq!(
            line,
            "GET /m=hiscore_oldschool/index_lite.json?player=Lynx%20Titan HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_fetch_player_not_found_is_none() {
        let (base_url, _) = serve_once(http_response("404 Not Found", "")).await;
        let client = client_for(base_url);

        let result = client
            .fetch_player("Lynx Titan", GameMode::Ultimate)
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_player_server_error_is_transport_error() {
        let (base_url, _) =
            serve_once(http_response("500 Internal Server Error", "oops")).await;
        let client = client_for(base_url);

        let err = client
            .fetch_player("Zezima", GameMode::Regular)
            .await
            .unwrap_err();

        assert!(matches!(err, HiscoresError::Http { status: 500, .. }));
        assert_eq!(err.kind(), FailureKind::Transport);
    }

    #[tokio::test]
    async fn test_fetch_player_missing_field_is_format_error() {
        let (base_url, _) =
            serve_once(http_response("200 OK", r#"{"skills": []}"#)).await;
        let client = client_for(base_url);

        let err = client
            .fetch_player("Zezima", GameMode::Ironman)
            .await
            .unwrap_err();

        assert!(matches!(err, HiscoresError::MalformedResponse { .. }));
        assert_eq!(err.kind(), FailureKind::Format);
    }

    #[tokio::test]
    async fn test_fetch_player_unreachable_host_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client_for(format!("http://{}", addr));

        let err = client
            .fetch_player("Zezima", GameMode::Regular)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Transport);
    }

    #[tokio::test]
    async fn test_fetch_player_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let client = HiscoresClient::with_config(ClientConfig {
            base_url: format!("http://{}", addr),
            timeout: Duration::from_millis(200),
            ..ClientConfig::default()
        });

        let err = client
            .fetch_player("Zezima", GameMode::Regular)
            .await
            .unwrap_err();

        assert!(matches!(err, HiscoresError::Timeout { .. }));
    }
}
