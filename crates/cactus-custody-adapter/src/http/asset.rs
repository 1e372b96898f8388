/*
[INPUT]:  Optional business id
[OUTPUT]: Current and historical notional asset values
[POS]:    HTTP layer - custody asset endpoints
[UPDATE]: When adding asset endpoints
*/

use crate::http::client::optional_params;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{AssetHistory, AssetSummary};

pub const ASSET_PATH: &str = "/custody/v1/api/asset";
pub const ASSET_HISTORY_PATH: &str = "/custody/v1/api/history-asset";

impl CustodyClient {
    /// Notional value over time; an empty `b_id` covers every project
    ///
    /// GET /custody/v1/api/history-asset
    pub async fn asset_history(&self, b_id: &str) -> Result<AssetHistory> {
        let params = optional_params([("b_id", b_id)]);
        self.enveloped(&SignableRequest::get(ASSET_HISTORY_PATH, params)).await
    }

    /// GET /custody/v1/api/asset
    pub async fn asset_summary(&self, b_id: &str) -> Result<AssetSummary> {
        let params = optional_params([("b_id", b_id)]);
        self.enveloped(&SignableRequest::get(ASSET_PATH, params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EcdsaSigner, KeyPairCredential};
    use crate::http::ClientConfig;
    use crate::types::StorageType;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CustodyClient {
        let credential = KeyPairCredential::new("key-id", "api-key", EcdsaSigner::generate());
        CustodyClient::new(ClientConfig::with_base_url(server.uri()), credential).unwrap()
    }

    #[tokio::test]
    async fn test_asset_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ASSET_PATH))
            .and(query_param("b_id", "b1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "message": "ok",
                "successful": true,
                "data": {
                    "hot_market_value": 12.5,
                    "cold_market_value": 100,
                    "total_market_value": 112.5,
                    "coins": [{
                        "coin_name": "BTC",
                        "amount": 2,
                        "value": 112.5,
                        "value_cny": 800.0,
                        "store_type": "PRIME_COLD_LV1"
                    }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client(&server).asset_summary("b1").await.unwrap();
        assert_eq!(summary.total_market_value, 112.5);
        assert_eq!(summary.hot_market_value_cny, 0.0);
        assert_eq!(summary.coins[0].store_type, Some(StorageType::Cold));
    }

    #[tokio::test]
    async fn test_asset_history_all_projects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ASSET_HISTORY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "message": "ok",
                "successful": true,
                "data": {
                    "history_asset_result": [{
                        "create_time": "2023-01-01",
                        "market_value": "10.5",
                        "market_value_cny": "72"
                    }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let history = client(&server).asset_history("").await.unwrap();
        assert_eq!(history.history_asset_result[0].market_value, "10.5");

        let received = server.received_requests().await.unwrap();
        assert!(received[0].url.query().is_none());
    }
}
