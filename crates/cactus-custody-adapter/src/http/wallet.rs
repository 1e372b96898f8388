/*
[INPUT]:  Wallet filters, business ids and wallet codes
[OUTPUT]: Wallet, coin and chain data unwrapped from the response envelope
[POS]:    HTTP layer - custody wallet endpoints
[UPDATE]: When adding wallet endpoints or changing query parameters
*/

// ### Wallet Endpoints

use crate::http::client::optional_params;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{ChainInfo, CoinInfo, CreateWalletRequest, Page, WalletInfo, WalletListQuery};

pub const WALLETS_PATH: &str = "/custody/v1/api/wallets";
pub const COIN_INFOS_PATH: &str = "/custody/v1/api/coin-infos";
pub const CHAIN_INFOS_PATH: &str = "/custody/v1/api/chain-infos";

pub(crate) fn project_wallet_path(b_id: &str, wallet_code: &str) -> String {
    format!("/custody/v1/api/projects/{b_id}/wallets/{wallet_code}")
}

fn create_wallet_path(b_id: &str) -> String {
    format!("/custody/v1/api/projects/{b_id}/wallets/create")
}

impl CustodyClient {
    /// List wallets matching the filters
    ///
    /// GET /custody/v1/api/wallets
    pub async fn wallet_list(&self, query: &WalletListQuery) -> Result<Page<WalletInfo>> {
        self.enveloped(&SignableRequest::get(WALLETS_PATH, query.to_params()))
            .await
    }

    /// Single wallet, optionally narrowed to one coin
    ///
    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}?coin_name={coin_name}
    pub async fn wallet_info(
        &self,
        b_id: &str,
        wallet_code: &str,
        coin_name: Option<&str>,
    ) -> Result<WalletInfo> {
        let params = optional_params([("coin_name", coin_name.unwrap_or_default())]);
        let request = SignableRequest::get(project_wallet_path(b_id, wallet_code), params);
        self.enveloped(&request).await
    }

    /// Coins supported by the custody, empty filters list everything
    ///
    /// GET /custody/v1/api/coin-infos
    pub async fn coin_info(&self, cactus_symbol: &str, symbol: &str) -> Result<Vec<CoinInfo>> {
        let params = optional_params([("cactus_symbol", cactus_symbol), ("symbol", symbol)]);
        self.enveloped(&SignableRequest::get(COIN_INFOS_PATH, params))
            .await
    }

    /// GET /custody/v1/api/chain-infos
    pub async fn chain_info(&self, chain: &str, full_name: &str) -> Result<Vec<ChainInfo>> {
        let params = optional_params([("chain", chain), ("full_name", full_name)]);
        self.enveloped(&SignableRequest::get(CHAIN_INFOS_PATH, params))
            .await
    }

    /// Create wallets and return their codes
    ///
    /// POST /custody/v1/api/projects/{b_id}/wallets/create
    pub async fn create_wallet(
        &self,
        b_id: &str,
        wallet_type: &str,
        number: u32,
    ) -> Result<Vec<String>> {
        let body = CreateWalletRequest {
            wallet_type: wallet_type.to_string(),
            number,
        };
        let request = SignableRequest::post_json(create_wallet_path(b_id), &body)?;
        self.enveloped(&request).await
    }
}
