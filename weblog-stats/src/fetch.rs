use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to read body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

// One GET, no retries. Whatever the client library defaults to for timeouts
// is what we get.
pub async fn download(url: &str) -> Result<String, FetchError> {
    let response = reqwest::get(url).await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }
    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_the_full_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weblog.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a,b,c\nd,e,f\n"))
            .mount(&server)
            .await;

        let body = download(&format!("{}/weblog.csv", server.uri())).await.unwrap();
        assert_eq!(body, "a,b,c\nd,e,f\n");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = download(&format!("{}/missing.csv", server.uri())).await.unwrap_err();
        match err {
            FetchError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        // Nothing listens on this port.
        let err = download("http://127.0.0.1:9/weblog.csv").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
