/*
[INPUT]:  Chain ids, account filters and transaction payloads
[OUTPUT]: Custodian accounts and transaction records
[POS]:    HTTP layer - custodian account endpoints (bare JSON, no envelope)
[UPDATE]: When adding account endpoints or changing query parameters
*/

// ### Account Endpoints

use std::collections::BTreeMap;

use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{EthAccount, SendTransactionRequest, TransactionQuery, TransactionRecord};

pub const ETH_ACCOUNTS_PATH: &str = "/eth-accounts";
pub const TRANSACTIONS_PATH: &str = "/transactions";

impl CustodyClient {
    /// Accounts on a chain, optionally narrowed to one address
    ///
    /// GET /eth-accounts?chainId={chain_id}&account={account}
    pub async fn eth_accounts(
        &self,
        chain_id: u64,
        account: Option<&str>,
    ) -> Result<Vec<EthAccount>> {
        let mut params = BTreeMap::from([("chainId".to_string(), chain_id.to_string())]);
        if let Some(account) = account.filter(|a| !a.is_empty()) {
            params.insert("account".to_string(), account.to_string());
        }
        self.get_json(ETH_ACCOUNTS_PATH, params).await
    }

    /// Submit a transaction for custodian signing
    ///
    /// POST /transactions?chainId={chain_id}
    pub async fn create_transaction(
        &self,
        chain_id: &str,
        transaction: &SendTransactionRequest,
    ) -> Result<TransactionRecord> {
        let query = BTreeMap::from([("chainId".to_string(), chain_id.to_string())]);
        let request = SignableRequest::post_json(TRANSACTIONS_PATH, transaction)?.with_query(query);
        self.execute_json(&request).await
    }

    /// GET /transactions
    pub async fn transactions(&self, query: &TransactionQuery) -> Result<Vec<TransactionRecord>> {
        self.get_json(TRANSACTIONS_PATH, query.to_params()).await
    }
}
