/*
[INPUT]:  Caller-supplied request options
[OUTPUT]: Serializable request bodies and query parameter maps
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new endpoints are added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{SortOrder, WalletFilter, WalletType};

/// Grant type sent with every token exchange
pub const REFRESH_TOKEN_GRANT: &str = "refresh_token";

/// Body of the refresh-token exchange
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeRequest<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl<'a> TokenExchangeRequest<'a> {
    pub fn new(refresh_token: &'a str) -> Self {
        Self {
            grant_type: REFRESH_TOKEN_GRANT,
            refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub wallet_type: String,
    pub number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    pub from: String,
    pub to: String,
    pub gas_limit: String,
    pub value: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
}

/// Filters for `GET /custody/v1/api/wallets`; unset fields are not sent
#[derive(Debug, Clone, Default)]
pub struct WalletListQuery {
    pub b_id: Option<String>,
    pub filter: Option<WalletFilter>,
    pub hide_no_coin_wallet: bool,
    pub coin_names: Vec<String>,
    pub wallet_type: Option<WalletType>,
    pub keyword: Option<String>,
    pub defi_wallet_code: Option<String>,
    pub main_wallet_code: Option<String>,
    pub chain: Option<String>,
    pub total_market_order: Option<SortOrder>,
    pub create_time_order: Option<SortOrder>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl WalletListQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        insert_opt(&mut params, "b_id", self.b_id.as_deref());
        insert_opt(&mut params, "type", self.filter.map(|f| f.as_str()));
        if self.hide_no_coin_wallet {
            params.insert("hide_no_coin_wallet".to_string(), "true".to_string());
        }
        insert_list(&mut params, "coin_names", &self.coin_names);
        insert_opt(&mut params, "wallet_types", self.wallet_type.map(|t| t.as_str()));
        insert_opt(&mut params, "keyword", self.keyword.as_deref());
        insert_opt(&mut params, "defi_wallet_code", self.defi_wallet_code.as_deref());
        insert_opt(&mut params, "main_wallet_code", self.main_wallet_code.as_deref());
        insert_opt(&mut params, "chain", self.chain.as_deref());
        insert_opt(
            &mut params,
            "total_market_order",
            self.total_market_order.map(|o| o.as_param()),
        );
        insert_opt(
            &mut params,
            "create_time_order",
            self.create_time_order.map(|o| o.as_param()),
        );
        insert_page(&mut params, self.offset, self.limit);
        params
    }
}

/// Filters for `GET /transactions`
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub chain_id: String,
    pub from: Option<String>,
    pub custodian_tx_id: Option<String>,
    pub transaction_hash: Option<String>,
}

impl TransactionQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("chainId".to_string(), self.chain_id.clone());
        insert_opt(&mut params, "from", self.from.as_deref());
        insert_opt(&mut params, "custodianTxId", self.custodian_tx_id.as_deref());
        insert_opt(&mut params, "transactionHash", self.transaction_hash.as_deref());
        params
    }
}

/// Address type accepted by the address apply endpoint
pub const NORMAL_ADDRESS: &str = "NORMAL_ADDRESS";

/// Body of `POST .../addresses/apply`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyAddressRequest {
    pub address_num: u32,
    pub address_type: String,
    pub b_id: String,
    pub wallet_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAddressRequest {
    pub coin_name: String,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionUpdate {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemarkUpdate {
    pub remark: String,
}

/// Filters for the address list of one wallet
#[derive(Debug, Clone, Default)]
pub struct AddressListQuery {
    pub coin_name: Option<String>,
    pub hide_no_coin_address: bool,
    pub keyword: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl AddressListQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        insert_opt(&mut params, "coin_name", self.coin_name.as_deref());
        if self.hide_no_coin_address {
            params.insert("hide_no_coin_address".to_string(), "true".to_string());
        }
        insert_opt(&mut params, "keyword", self.keyword.as_deref());
        insert_page(&mut params, self.offset, self.limit);
        params
    }
}

/// Filters for `GET /custody/v1/api/projects/{b_id}/orders`
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub applicants: Vec<String>,
    pub coin_names: Vec<String>,
    pub chain_names: Vec<String>,
    pub wallet_names: Vec<String>,
    pub statuses: Vec<String>,
    pub keyword: Option<String>,
    pub sort_by_time: Option<SortOrder>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl OrderQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        insert_list(&mut params, "applicant", &self.applicants);
        insert_list(&mut params, "coin_name", &self.coin_names);
        insert_list(&mut params, "chain_name", &self.chain_names);
        insert_list(&mut params, "wallet_name", &self.wallet_names);
        insert_list(&mut params, "status", &self.statuses);
        insert_opt(&mut params, "keyword", self.keyword.as_deref());
        insert_opt(&mut params, "sort_by_time", self.sort_by_time.map(|o| o.as_param()));
        insert_time_range(&mut params, self.start_time, self.end_time);
        insert_page(&mut params, self.offset, self.limit);
        params
    }
}

/// Fee level for accelerating or cancelling a pending order
///
/// `gas_price` is only read by the server for a custom level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeBumpRequest {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<f64>,
}

/// Withdrawal order, also used to estimate its miner fee
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    pub from_wallet_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_rate_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<f64>,
    pub dest_address_item_list: Vec<DestinationItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationItem {
    pub amount: f64,
    pub dest_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub is_all_withdrawal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Filters shared by the wallet transaction summary and detail endpoints
#[derive(Debug, Clone, Default)]
pub struct WalletTransactionQuery {
    pub coin_name: Option<String>,
    pub tx_types: Vec<String>,
    pub addresses: Vec<String>,
    pub create_time_order: Option<SortOrder>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// Detail endpoint only: wallet detail item id
    pub id: Option<String>,
    /// Detail endpoint only
    pub tx_id: Option<String>,
    /// Detail endpoint only
    pub order_no: Option<String>,
}

impl WalletTransactionQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        insert_opt(&mut params, "coin_name", self.coin_name.as_deref());
        insert_list(&mut params, "tx_types", &self.tx_types);
        insert_list(&mut params, "addresses", &self.addresses);
        insert_opt(
            &mut params,
            "create_time_order",
            self.create_time_order.map(|o| o.as_param()),
        );
        insert_time_range(&mut params, self.start_time, self.end_time);
        insert_page(&mut params, self.offset, self.limit);
        insert_opt(&mut params, "id", self.id.as_deref());
        insert_opt(&mut params, "tx_id", self.tx_id.as_deref());
        insert_opt(&mut params, "order_no", self.order_no.as_deref());
        params
    }
}

/// Contract call submitted from a DeFi wallet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractCallRequest {
    pub order_no: String,
    pub from_wallet_code: String,
    pub from_address: String,
    pub to_address: String,
    pub amount: String,
    pub chain: String,
    pub contract_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u64>,
    pub gas_limit: u64,
    pub description: String,
}

/// Message or typed-data signature request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureRequest {
    pub address: String,
    pub signature_version: String,
    pub payload: serde_json::Value,
    pub chain: String,
    pub order_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for the contract order history of a DeFi wallet
#[derive(Debug, Clone, Default)]
pub struct ContractOrderQuery {
    pub chain: String,
    pub keyword: Option<String>,
    /// `ASC` or `DESC`
    pub sort_by_time: Option<String>,
    pub status: Option<String>,
    pub start_time: Option<i64>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ContractOrderQuery {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("chain".to_string(), self.chain.clone());
        insert_opt(&mut params, "keyword", self.keyword.as_deref());
        insert_opt(&mut params, "sort_by_time", self.sort_by_time.as_deref());
        insert_opt(&mut params, "status", self.status.as_deref());
        insert_time_range(&mut params, self.start_time, None);
        insert_page(&mut params, self.offset, self.limit);
        params
    }
}

fn insert_opt(params: &mut BTreeMap<String, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.insert(key.to_string(), value.to_string());
    }
}

fn insert_list(params: &mut BTreeMap<String, String>, key: &str, values: &[String]) {
    if !values.is_empty() {
        params.insert(key.to_string(), values.join(","));
    }
}

fn insert_time_range(params: &mut BTreeMap<String, String>, start: Option<i64>, end: Option<i64>) {
    if let Some(start) = start {
        params.insert("start_time".to_string(), start.to_string());
    }
    if let Some(end) = end {
        params.insert("end_time".to_string(), end.to_string());
    }
}

fn insert_page(params: &mut BTreeMap<String, String>, offset: Option<u32>, limit: Option<u32>) {
    if let Some(offset) = offset {
        params.insert("offset".to_string(), offset.to_string());
    }
    if let Some(limit) = limit {
        params.insert("limit".to_string(), limit.to_string());
    }
}
