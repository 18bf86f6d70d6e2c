#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use takt::api::server::{Server, UploadPayload};
    use takt::libs::config::ServerConfig;

    #[test]
    fn test_payload_wire_format() {
        let date = NaiveDate::parse_from_str("2025-06-02", "%Y-%m-%d").unwrap();
        let payload = UploadPayload::new(10, 1, date, 3600, 120);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_id"], 10);
        assert_eq!(json["task_id"], 1);
        assert_eq!(json["date"], "2025-06-02");
        assert_eq!(json["total_seconds"], 3600);
        assert_eq!(json["inactive_seconds"], 120);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = ServerConfig {
            api_url: "http://127.0.0.1:8000/api/store-time-tracking".to_string(),
        };
        assert!(Server::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_upload_against_unreachable_server_reports_failure() {
        // Nothing listens on this port; the dispatcher surfaces the
        // transport error instead of retrying or panicking.
        let config = ServerConfig {
            api_url: "http://127.0.0.1:59123/api/store-time-tracking".to_string(),
        };
        let server = Server::new(&config).unwrap();
        let date = NaiveDate::parse_from_str("2025-06-02", "%Y-%m-%d").unwrap();
        let payload = UploadPayload::new(10, 1, date, 60, 0);

        let (ok, body) = server.upload(&payload).await;
        assert!(!ok);
        assert!(!body.is_empty());
    }
}
