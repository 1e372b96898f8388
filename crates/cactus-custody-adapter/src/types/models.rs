/*
[INPUT]:  Custody API payload schemas
[OUTPUT]: Typed wallet, coin, chain and account models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new models are needed
*/

use serde::{Deserialize, Serialize};

use super::enums::{StorageType, WalletType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    #[serde(default)]
    pub domain_id: String,
    pub b_id: String,
    pub wallet_code: String,
    #[serde(default)]
    pub wallet_name: String,
    #[serde(default)]
    pub coin_name: String,
    pub wallet_type: Option<WalletType>,
    pub storage_type: Option<StorageType>,
    #[serde(default)]
    pub available_amount: f64,
    #[serde(default)]
    pub freeze_amount: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub usd_total_market: f64,
    #[serde(default)]
    pub coin_status: String,
    #[serde(default)]
    pub english_reason_of_status: String,
    #[serde(default)]
    pub normal_address_limit: u32,
    #[serde(default)]
    pub normal_address_num: u32,
    #[serde(default)]
    pub create_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub cactus_symbol: String,
    pub symbol: String,
    pub chain: String,
    #[serde(default)]
    pub cactus_chain: String,
    #[serde(default)]
    pub decimals: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub deposit_block_number: String,
    #[serde(default)]
    pub confirm_block_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub main_coin: String,
    #[serde(default)]
    pub evm_chain: bool,
    #[serde(default)]
    pub support_eip1559: bool,
    #[serde(default)]
    pub confirm_block_number: u32,
    #[serde(default)]
    pub miner_block_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodianDetails {
    pub domain_id: String,
    pub project_id: String,
    pub wallet_id: String,
}

/// Account entry returned by `GET /eth-accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthAccount {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub balance: String,
    pub chain_id: u64,
    pub custodian_details: Option<CustodianDetails>,
}

/// Transaction as returned by the `/transactions` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_status: String,
    #[serde(default)]
    pub transaction_hash: String,
    #[serde(rename = "custodian_transactionId", default)]
    pub custodian_transaction_id: String,
    #[serde(default)]
    pub gas_price: String,
    #[serde(default)]
    pub max_fee_per_gas: String,
    #[serde(default)]
    pub max_priority_fee_per_gas: String,
    #[serde(default)]
    pub gas_limit: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub signature: String,
}

/// Deposit address of a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    #[serde(default)]
    pub address_storage: Option<StorageType>,
    #[serde(default)]
    pub address_type: String,
    #[serde(default)]
    pub coin_name: String,
    #[serde(default)]
    pub b_id: String,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default)]
    pub wallet_code: String,
    #[serde(default)]
    pub wallet_type: Option<WalletType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub available_amount: Option<f64>,
    #[serde(default)]
    pub freeze_amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHistory {
    #[serde(default)]
    pub history_asset_result: Vec<AssetSnapshot>,
}

/// Notional value at one point in time, amounts as decimal strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub create_time: String,
    #[serde(default)]
    pub market_value: String,
    #[serde(default)]
    pub market_value_cny: String,
}

/// Current notional value split by storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    #[serde(default)]
    pub cold_market_value: f64,
    #[serde(default)]
    pub cold_market_value_cny: f64,
    #[serde(default)]
    pub hot_market_value: f64,
    #[serde(default)]
    pub hot_market_value_cny: f64,
    #[serde(default)]
    pub total_market_value: f64,
    #[serde(default)]
    pub total_market_value_cny: f64,
    #[serde(default)]
    pub coins: Vec<CoinAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinAsset {
    pub coin_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub value_cny: f64,
    pub store_type: Option<StorageType>,
}

/// Withdrawal order as listed and as embedded in order details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_no: String,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default, alias = "b_id")]
    pub bid: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub coin_name: String,
    #[serde(default)]
    pub wallet_type: Option<WalletType>,
    #[serde(default)]
    pub storage_type: Option<StorageType>,
    #[serde(default)]
    pub wallet_name: String,
    #[serde(default)]
    pub wallet_code: String,
    #[serde(default, alias = "timestamp")]
    pub time_stamp: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub original_amount: Option<f64>,
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub miner_fee_rate: Option<f64>,
    #[serde(default)]
    pub miner_fee: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub gas_price: Option<f64>,
    #[serde(default)]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub inner_status: String,
    #[serde(default)]
    pub order_dest_address_info_vo_list: Vec<OrderDestination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDestination {
    pub dest_address: String,
    #[serde(default)]
    pub memo_type: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub origin_balance: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_wallet_info: OrderInfo,
    #[serde(default)]
    pub tx_info_models: Vec<OrderTransaction>,
    #[serde(default)]
    pub consolidation_tx_info_models: Vec<OrderTransaction>,
    #[serde(default)]
    pub miner_fee_tx_info_models: Vec<OrderTransaction>,
    #[serde(default)]
    pub partial_failed: Vec<serde_json::Value>,
    #[serde(default)]
    pub partial_success: Vec<serde_json::Value>,
}

/// On-chain transaction produced by an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTransaction {
    #[serde(default)]
    pub tx_type: String,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub tx_size: Option<u64>,
    pub tx_hash: String,
    #[serde(default)]
    pub gas_price: Option<f64>,
    #[serde(default)]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub miner_fee: Option<String>,
}

/// Order number assigned to a newly created order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    #[serde(rename = "OrderNo", alias = "order_no")]
    pub order_no: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRateRange {
    pub max_fee_rate: f64,
    pub min_fee_rate: f64,
}

/// Entry of the per-wallet transaction summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub tx_id: String,
    #[serde(default)]
    pub wallet_code: String,
    #[serde(default)]
    pub wallet_type: Option<WalletType>,
    #[serde(default)]
    pub coin_name: String,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub tx_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub wallet_balance: f64,
    #[serde(default)]
    pub remark_detail: Option<String>,
    #[serde(default)]
    pub tx_time_stamp: i64,
    #[serde(default)]
    pub create_time_stamp: i64,
}

/// Wallet ledger item with its inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub id: u64,
    pub tx_id: String,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default)]
    pub wallet_code: String,
    #[serde(default)]
    pub wallet_type: Option<WalletType>,
    #[serde(default)]
    pub coin_name: String,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub tx_size: Option<u64>,
    #[serde(default)]
    pub tx_type: String,
    #[serde(default)]
    pub tx_status: String,
    #[serde(default)]
    pub tx_fee: Option<f64>,
    #[serde(default)]
    pub withdraw_amount: Option<f64>,
    #[serde(default)]
    pub deposit_amount: Option<f64>,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    #[serde(default)]
    pub remark_detail: Option<String>,
    #[serde(default)]
    pub vins: Vec<TransactionLeg>,
    #[serde(default)]
    pub vouts: Vec<TransactionLeg>,
    #[serde(default)]
    pub tx_time_stamp: i64,
    #[serde(default)]
    pub create_time_stamp: i64,
    #[serde(default)]
    pub bid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLeg {
    pub address: String,
    #[serde(default)]
    pub idx: u32,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub is_change: u8,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Contract call order of a DeFi wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractOrder {
    pub order_no: String,
    #[serde(default)]
    pub time_stamp: i64,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub contract_function: Option<String>,
    #[serde(default)]
    pub contract_data: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub miner_fee: Option<f64>,
    #[serde(default)]
    pub gas_price: Option<f64>,
    #[serde(default)]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deposit_trans: Vec<CoinTransfer>,
    #[serde(default)]
    pub withdraw_trans: Vec<CoinTransfer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTransfer {
    pub coin_name: String,
    #[serde(default)]
    pub amount: f64,
}
