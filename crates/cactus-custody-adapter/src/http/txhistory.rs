/*
[INPUT]:  Business ids, wallet codes and transaction filters
[OUTPUT]: Wallet transaction summaries and ledger details
[POS]:    HTTP layer - custody transaction history endpoints
[UPDATE]: When adding history endpoints or changing query parameters
*/

use crate::http::wallet::project_wallet_path;
use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{
    Page, RemarkUpdate, TransactionDetail, WalletTransaction, WalletTransactionQuery,
};

impl CustodyClient {
    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/tx-summaries
    pub async fn wallet_transactions(
        &self,
        b_id: &str,
        wallet_code: &str,
        query: &WalletTransactionQuery,
    ) -> Result<Page<WalletTransaction>> {
        let path = format!("{}/tx-summaries", project_wallet_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::get(path, query.to_params())).await
    }

    /// Ledger items with inputs and outputs
    ///
    /// GET /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/tx-details
    pub async fn transaction_details(
        &self,
        b_id: &str,
        wallet_code: &str,
        query: &WalletTransactionQuery,
    ) -> Result<Page<TransactionDetail>> {
        let path = format!("{}/tx-details", project_wallet_path(b_id, wallet_code));
        self.enveloped(&SignableRequest::get(path, query.to_params())).await
    }

    /// POST /custody/v1/api/projects/{b_id}/wallets/{wallet_code}/details/{id}
    pub async fn edit_transaction_remark(
        &self,
        b_id: &str,
        wallet_code: &str,
        id: &str,
        remark: &str,
    ) -> Result<()> {
        let body = RemarkUpdate {
            remark: remark.to_string(),
        };
        let path = format!("{}/details/{id}", project_wallet_path(b_id, wallet_code));
        self.acknowledged(&SignableRequest::post_json(path, &body)?).await
    }
}
