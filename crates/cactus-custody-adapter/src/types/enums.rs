/*
[INPUT]:  Custody API enumerations
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new variants are added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    MixedAddress,
    SegregatedAddress,
    DappAddress,
    DappCustomAddress,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::MixedAddress => "MIXED_ADDRESS",
            WalletType::SegregatedAddress => "SEGREGATED_ADDRESS",
            WalletType::DappAddress => "DAPP_ADDRESS",
            WalletType::DappCustomAddress => "DAPP_CUSTOM_ADDRESS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StorageType {
    Cold,
    Hot,
    Other(String),
}

impl From<String> for StorageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRIME_COLD_LV1" => StorageType::Cold,
            "PRIME_HOT" => StorageType::Hot,
            _ => StorageType::Other(value),
        }
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        match value {
            StorageType::Cold => "PRIME_COLD_LV1".to_string(),
            StorageType::Hot => "PRIME_HOT".to_string(),
            StorageType::Other(other) => other,
        }
    }
}

/// Hot/cold filter for wallet listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletFilter {
    Hot,
    Cold,
}

impl WalletFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletFilter::Hot => "HOT",
            WalletFilter::Cold => "COLD",
        }
    }
}

/// Sort direction, sent as `0` (descending) or `1` (ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Desc => "0",
            SortOrder::Asc => "1",
        }
    }
}
