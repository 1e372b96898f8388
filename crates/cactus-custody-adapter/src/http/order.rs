/*
[INPUT]:  Business ids, order numbers, order filters and fee levels
[OUTPUT]: Withdrawal orders and their on-chain transactions
[POS]:    HTTP layer - custody order endpoints
[UPDATE]: When adding order endpoints or changing query parameters
*/

// ### Order Endpoints

use std::collections::BTreeMap;

use crate::http::{CustodyClient, Result, SignableRequest};
use crate::types::{FeeBumpRequest, OrderDetails, OrderInfo, OrderQuery, Page};

fn orders_path(b_id: &str) -> String {
    format!("/custody/v1/api/projects/{b_id}/orders")
}

impl CustodyClient {
    /// GET /custody/v1/api/projects/{b_id}/orders
    pub async fn orders(&self, b_id: &str, query: &OrderQuery) -> Result<Page<OrderInfo>> {
        self.enveloped(&SignableRequest::get(orders_path(b_id), query.to_params())).await
    }

    /// GET /custody/v1/api/projects/{b_id}/orders/{order_no}
    pub async fn order_details(&self, b_id: &str, order_no: &str) -> Result<OrderDetails> {
        let path = format!("{}/{order_no}", orders_path(b_id));
        self.enveloped(&SignableRequest::get(path, BTreeMap::new())).await
    }

    /// Resubmit a pending order with a higher fee, returning the new gas price
    ///
    /// POST /custody/v1/api/projects/{b_id}/orders/{order_no}/accelerate
    pub async fn accelerate_order(
        &self,
        b_id: &str,
        order_no: &str,
        fee: &FeeBumpRequest,
    ) -> Result<u64> {
        let path = format!("{}/{order_no}/accelerate", orders_path(b_id));
        self.enveloped(&SignableRequest::post_json(path, fee)?).await
    }

    /// Cancel a pending order by replacing it, returning the gas price used
    ///
    /// POST /custody/v1/api/projects/{b_id}/orders/{order_no}/cancel
    pub async fn cancel_order(
        &self,
        b_id: &str,
        order_no: &str,
        fee: &FeeBumpRequest,
    ) -> Result<u64> {
        let path = format!("{}/{order_no}/cancel", orders_path(b_id));
        self.enveloped(&SignableRequest::post_json(path, fee)?).await
    }
}
