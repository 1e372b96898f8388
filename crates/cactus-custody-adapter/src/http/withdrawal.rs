/*
[INPUT]:  Withdrawal orders and coin names
[OUTPUT]: Fee estimates, fee rate ranges and created order numbers
[POS]:    HTTP layer - custody withdrawal endpoints
[UPDATE]: When adding withdrawal endpoints or changing fee parameters
*/

// ### Withdrawal Endpoints

use crate::http::client::optional_params;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{CreatedOrder, FeeRateRange, WithdrawalRequest};

pub const FEE_RATE_RANGE_PATH: &str = "/custody/v1/api/customize-fee-rate/range";
pub const RECOMMENDED_FEE_RATES_PATH: &str = "/custody/v1/api/recommend-fee-rate/list";

impl CustodyClient {
    /// Miner fee the withdrawal would cost, in the coin's smallest unit
    ///
    /// POST /custody/v1/api/projects/{b_id}/estimate-miner-fee
    pub async fn estimate_withdrawal_fee(
        &self,
        b_id: &str,
        withdrawal: &WithdrawalRequest,
    ) -> Result<u64> {
        let path = format!("/custody/v1/api/projects/{b_id}/estimate-miner-fee");
        self.enveloped(&SignableRequest::post_json(path, withdrawal)?).await
    }

    /// POST /custody/v1/api/projects/{b_id}/order/create
    pub async fn create_withdrawal(
        &self,
        b_id: &str,
        withdrawal: &WithdrawalRequest,
    ) -> Result<CreatedOrder> {
        let path = format!("/custody/v1/api/projects/{b_id}/order/create");
        self.enveloped(&SignableRequest::post_json(path, withdrawal)?).await
    }

    /// Bounds for a custom fee rate
    ///
    /// GET /custody/v1/api/customize-fee-rate/range?coin_name={coin_name}
    pub async fn fee_rate_range(&self, coin_name: &str) -> Result<FeeRateRange> {
        let params = optional_params([("coin_name", coin_name)]);
        self.enveloped(&SignableRequest::get(FEE_RATE_RANGE_PATH, params)).await
    }

    /// GET /custody/v1/api/recommend-fee-rate/list?coin_name={coin_name}
    pub async fn recommended_fee_rates(&self, coin_name: &str) -> Result<Vec<u64>> {
        let params = optional_params([("coin_name", coin_name)]);
        self.enveloped(&SignableRequest::get(RECOMMENDED_FEE_RATES_PATH, params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EcdsaSigner, KeyPairCredential};
    use crate::http::{ClientConfig, CustodyError};
    use crate::types::DestinationItem;
    use wiremock::matchers::{body_json, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CustodyClient {
        let credential = KeyPairCredential::new("key-id", "api-key", EcdsaSigner::generate());
        CustodyClient::new(ClientConfig::with_base_url(server.uri()), credential).unwrap()
    }

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "ok",
            "successful": true,
            "data": data
        }))
    }

    fn withdrawal() -> WithdrawalRequest {
        WithdrawalRequest {
            from_wallet_code: "W1".into(),
            coin_name: Some("BTC".into()),
            fee_rate_level: Some("MEDIUM".into()),
            dest_address_item_list: vec![DestinationItem {
                amount: 0.5,
                dest_address: "bc1qdest".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_estimate_withdrawal_fee() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/v1/api/projects/b1/estimate-miner-fee"))
            .and(body_json(serde_json::json!({
                "from_wallet_code": "W1",
                "coin_name": "BTC",
                "fee_rate_level": "MEDIUM",
                "dest_address_item_list": [{
                    "amount": 0.5,
                    "dest_address": "bc1qdest",
                    "is_all_withdrawal": false
                }]
            })))
            .and(header_exists("Content-SHA256"))
            .respond_with(ok(serde_json::json!(2250)))
            .expect(1)
            .mount(&server)
            .await;

        let fee = client(&server)
            .estimate_withdrawal_fee("b1", &withdrawal())
            .await
            .unwrap();
        assert_eq!(fee, 2250);
    }

    #[tokio::test]
    async fn test_create_withdrawal_returns_order_no() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/v1/api/projects/b1/order/create"))
            .respond_with(ok(serde_json::json!({"OrderNo": "WD-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let order = client(&server).create_withdrawal("b1", &withdrawal()).await.unwrap();
        assert_eq!(order.order_no, "WD-1");
    }

    #[tokio::test]
    async fn test_fee_rates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FEE_RATE_RANGE_PATH))
            .and(query_param("coin_name", "BTC"))
            .respond_with(ok(serde_json::json!({"maxFeeRate": 500, "minFeeRate": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(RECOMMENDED_FEE_RATES_PATH))
            .and(query_param("coin_name", "BTC"))
            .respond_with(ok(serde_json::json!([5, 10, 20])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let range = client.fee_rate_range("BTC").await.unwrap();
        assert_eq!(range.max_fee_rate, 500.0);
        assert_eq!(client.recommended_fee_rates("BTC").await.unwrap(), vec![5, 10, 20]);
    }

    #[tokio::test]
    async fn test_withdrawal_rejected_by_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/v1/api/projects/b1/order/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 40021,
                "message": "insufficient balance",
                "successful": false,
                "data": null
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_withdrawal("b1", &withdrawal())
            .await
            .unwrap_err();
        assert!(matches!(err, CustodyError::Api { code: 40021, .. }));
    }
}
