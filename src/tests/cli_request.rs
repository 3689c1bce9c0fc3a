// The binary's `request` command against local servers: status maps to
// the exit code, `--header` replaces the stored token, query survives.

#[cfg(test)]
mod test {

    use std::process::ExitCode;

    use axum::{http::StatusCode, routing::get, Router};
    use serde_json::Value;

    use crate::tests::common::{client_for, spawn_axum, spawn_echo};
    use crate::utils::cli::send_request;

    #[tokio::test]
    async fn header_flag_overrides_stored_token() {
        let (handle, addr) = spawn_echo().await;
        let client = client_for(addr, Some("abc123"));
        let headers = vec!["Authorization: Bearer admin-token".to_string()];

        let outcome = send_request(&client, "get", "/jobs?company=7", None, &headers).await.unwrap();

        assert_eq!(outcome.exit_code(), ExitCode::SUCCESS);
        let body: Value = serde_json::from_str(&outcome.body).unwrap();
        assert_eq!(body["method"], "GET");
        assert_eq!(body["path"], "/api/jobs");
        assert_eq!(body["query"], "company=7");
        assert_eq!(body["authorization"], serde_json::json!(["Bearer admin-token"]));
        handle.abort();
    }

    #[tokio::test]
    async fn stored_token_is_sent_without_header_flag() {
        let (handle, addr) = spawn_echo().await;
        let client = client_for(addr, Some("abc123"));

        let outcome = send_request(&client, "POST", "/login", Some(r#"{"username":"root"}"#), &[])
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&outcome.body).unwrap();
        assert_eq!(body["method"], "POST");
        assert_eq!(body["query"], Value::Null);
        assert_eq!(body["authorization"], serde_json::json!(["Bearer abc123"]));
        handle.abort();
    }

    #[tokio::test]
    async fn error_status_gives_failing_exit_code_and_keeps_body() {
        let router = Router::new().route(
            "/api/me",
            get(|| async { (StatusCode::UNAUTHORIZED, r#"{"error":"unauthorized"}"#) }),
        );
        let (handle, addr) = spawn_axum(router).await;
        let client = client_for(addr, Some("expired"));

        let outcome = send_request(&client, "GET", "/me", None, &[]).await.unwrap();

        assert_eq!(outcome.status, reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(outcome.exit_code(), ExitCode::FAILURE);
        assert!(outcome.body.contains("unauthorized"));
        assert_eq!(outcome.url.path(), "/api/me");
        handle.abort();
    }

    #[tokio::test]
    async fn bad_arguments_fail_before_sending() {
        let client = client_for("127.0.0.1:9".parse().unwrap(), None);

        assert!(send_request(&client, "GET", "/x", None, &["no-colon".to_string()]).await.is_err());
        assert!(send_request(&client, "POST", "/x", Some("{not json"), &[]).await.is_err());
        assert!(send_request(&client, "BAD METHOD", "/x", None, &[]).await.is_err());
    }
}
