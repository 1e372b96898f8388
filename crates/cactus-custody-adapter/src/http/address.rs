/*
[INPUT]:  Business ids, wallet codes, addresses and address filters
[OUTPUT]: Wallet addresses unwrapped from the response envelope
[POS]:    HTTP layer - custody address endpoints
[UPDATE]: When adding address endpoints or changing query parameters
*/

// ### Address Endpoints

use crate::http::client::optional_params;
use crate::http::wallet::project_wallet_path;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{
    AddressInfo, AddressListQuery, ApplyAddressRequest, DescriptionUpdate, NORMAL_ADDRESS, Page,
    VerifyAddressRequest,
};

pub const VERIFY_ADDRESS_PATH: &str = "/custody/v1/api/addresses/type/check";

fn addresses_path(b_id: &str, wallet_code: &str) -> String {
    format!("{}/addresses", project_wallet_path(b_id, wallet_code))
}

impl CustodyClient {
    /// Apply for new deposit addresses and return them
    ///
    /// POST /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/addresses/apply
    pub async fn apply_addresses(
        &self,
        b_id: &str,
        wallet_code: &str,
        coin_name: Option<&str>,
        address_num: u32,
    ) -> Result<Vec<String>> {
        let body = ApplyAddressRequest {
            address_num,
            address_type: NORMAL_ADDRESS.to_string(),
            b_id: b_id.to_string(),
            wallet_code: wallet_code.to_string(),
            coin_name: coin_name.filter(|c| !c.is_empty()).map(str::to_string),
        };
        let path = format!("{}/apply", addresses_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::post_json(path, &body)?).await
    }

    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/addresses/{address}
    pub async fn address_info(
        &self,
        b_id: &str,
        wallet_code: &str,
        address: &str,
        coin_name: Option<&str>,
    ) -> Result<AddressInfo> {
        let params = optional_params([("coin_name", coin_name.unwrap_or_default())]);
        let path = format!("{}/{address}", addresses_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::get(path, params)).await
    }

    /// Addresses of one wallet
    ///
    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/addresses
    pub async fn address_list(
        &self,
        b_id: &str,
        wallet_code: &str,
        query: &AddressListQuery,
    ) -> Result<Page<AddressInfo>> {
        let request = SignableRequest::get(addresses_path(b_id, wallet_code), query.to_params());
        self.enveloped(&request).await
    }

    /// POST /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/addresses/{address}
    pub async fn edit_address_description(
        &self,
        b_id: &str,
        wallet_code: &str,
        address: &str,
        description: &str,
    ) -> Result<()> {
        let body = DescriptionUpdate {
            description: description.to_string(),
        };
        let path = format!("{}/{address}", addresses_path(b_id, wallet_code));
        self.acknowledged(&SignableRequest::post_json(path, &body)?).await
    }

    /// Check address formats for a coin, returning the malformed ones
    ///
    /// POST /custody/v1/api/addresses/type/check
    pub async fn verify_addresses(
        &self,
        coin_name: &str,
        addresses: &[String],
    ) -> Result<Vec<String>> {
        let body = VerifyAddressRequest {
            coin_name: coin_name.to_string(),
            addresses: addresses.to_vec(),
        };
        self.enveloped(&SignableRequest::post_json(VERIFY_ADDRESS_PATH, &body)?)
            .await
    }
}
