/*
[INPUT]:  Contract calls, signature requests and DeFi wallet filters
[OUTPUT]: Created order numbers and contract order history
[POS]:    HTTP layer - custody DeFi wallet endpoints
[UPDATE]: When adding DeFi endpoints or changing request bodies
*/

// ### DeFi Endpoints

use std::collections::BTreeMap;

use crate::http::wallet::project_wallet_path;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{
    ContractCallRequest, ContractOrder, ContractOrderQuery, CreatedOrder, Page, SignatureRequest,
};

fn contract_orders_path(b_id: &str, wallet_code: &str) -> String {
    format!("{}/contract/orders", project_wallet_path(b_id, wallet_code))
}

impl CustodyClient {
    /// Submit a contract call from a DeFi wallet
    ///
    /// POST /custody/v1/api/projects/{b_id}/contract/call
    pub async fn create_contract_call(
        &self,
        b_id: &str,
        call: &ContractCallRequest,
    ) -> Result<CreatedOrder> {
        let path = format!("/custody/v1/api/projects/{b_id}/contract/call");
        self.enveloped(&SignableRequest::post_json(path, call)?).await
    }

    /// Ask the custodian to sign a message or typed data
    ///
    /// POST /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/signatures
    pub async fn create_signature(
        &self,
        b_id: &str,
        wallet_code: &str,
        signature: &SignatureRequest,
    ) -> Result<CreatedOrder> {
        let path = format!("{}/signatures", project_wallet_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::post_json(path, signature)?).await
    }

    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/contract/orders
    pub async fn contract_orders(
        &self,
        b_id: &str,
        wallet_code: &str,
        query: &ContractOrderQuery,
    ) -> Result<Page<ContractOrder>> {
        let path = contract_orders_path(b_id, wallet_code);
        self.enveloped(&SignableRequest::get(path, query.to_params())).await
    }

    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/contract/orders/{order_no}
    pub async fn contract_order(
        &self,
        b_id: &str,
        wallet_code: &str,
        order_no: &str,
    ) -> Result<ContractOrder> {
        let path = format!("{}/{order_no}", contract_orders_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::get(path, BTreeMap::new())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EcdsaSigner, KeyPairCredential};
    use crate::http::ClientConfig;
    use wiremock::matchers::{body_json, method, path, query_param};
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

    #[tokio::test]
    async fn test_create_contract_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/v1/api/projects/b1/contract/call"))
            .and(body_json(serde_json::json!({
                "order_no": "C1",
                "from_wallet_code": "D1",
                "from_address": "0xfrom",
                "to_address": "0xpool",
                "amount": "0",
                "chain": "ETH",
                "contract_data": "0xa9059cbb",
                "gas_price_level": "HIGH",
                "gas_limit": 90000,
                "description": ""
            })))
            .respond_with(ok(serde_json::json!({"OrderNo": "C1"})))
            .expect(1)
            .mount(&server)
            .await;

        let call = ContractCallRequest {
            order_no: "C1".into(),
            from_wallet_code: "D1".into(),
            from_address: "0xfrom".into(),
            to_address: "0xpool".into(),
            amount: "0".into(),
            chain: "ETH".into(),
            contract_data: "0xa9059cbb".into(),
            gas_price_level: Some("HIGH".into()),
            gas_limit: 90_000,
            ..Default::default()
        };
        let order = client(&server).create_contract_call("b1", &call).await.unwrap();
        assert_eq!(order.order_no, "C1");
    }

    #[tokio::test]
    async fn test_create_signature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/v1/api/projects/b1/wallets/D1/signatures"))
            .and(body_json(serde_json::json!({
                "address": "0xfrom",
                "signature_version": "personal_sign",
                "payload": "hello",
                "chain": "ETH",
                "order_no": "S1"
            })))
            .respond_with(ok(serde_json::json!({"OrderNo": "S1"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = SignatureRequest {
            address: "0xfrom".into(),
            signature_version: "personal_sign".into(),
            payload: serde_json::json!("hello"),
            chain: "ETH".into(),
            order_no: "S1".into(),
            description: None,
        };
        let order = client(&server)
            .create_signature("b1", "D1", &request)
            .await
            .unwrap();
        assert_eq!(order.order_no, "S1");
    }

    #[tokio::test]
    async fn test_contract_orders_and_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/custody/v1/api/projects/b1/wallets/D1/contract/orders"))
            .and(query_param("chain", "ETH"))
            .and(query_param("sort_by_time", "DESC"))
            .respond_with(ok(serde_json::json!({
                "offset": 0,
                "limit": 10,
                "total": 1,
                "list": [{
                    "order_no": "C1",
                    "status": "SUCCESS",
                    "description": null,
                    "deposit_trans": [{"coin_name": "USDT", "amount": 100}]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/custody/v1/api/projects/b1/wallets/D1/contract/orders/C1"))
            .respond_with(ok(serde_json::json!({
                "order_no": "C1",
                "contract_function": "transfer",
                "withdraw_trans": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let query = ContractOrderQuery {
            chain: "ETH".into(),
            sort_by_time: Some("DESC".into()),
            ..Default::default()
        };
        let page = client.contract_orders("b1", "D1", &query).await.unwrap();
        assert_eq!(page.list[0].deposit_trans[0].amount, 100.0);

        let order = client.contract_order("b1", "D1", "C1").await.unwrap();
        assert_eq!(order.contract_function.as_deref(), Some("transfer"));
    }
}
