use shared::{FeeItemListResponse, FeeItemRequest, FeeItemResponse};

use super::api::{ApiClient, ApiError};

/// `GET /finance/fee-items` → `FeeItemListResponse { fee_items }`.
/// `POST /finance/fee-items`
/// Request: `FeeItemRequest { category, name, amount, per_credit, active }`.
/// Response: `FeeItemResponse { fee_item, msg }`.
pub const FEE_ITEMS: &str = "/finance/fee-items";

/// `PUT /finance/fee-items/:id` (same request/response as create).
/// `DELETE /finance/fee-items/:id` → `FeeItemResponse` for the removed item.
pub fn fee_item_route(fee_item_id: i64) -> String {
    format!("/finance/fee-items/{}", fee_item_id)
}

impl ApiClient {
    pub async fn list_fee_items(&self) -> Result<FeeItemListResponse, ApiError> {
        self.get_json(FEE_ITEMS).await
    }

    pub async fn create_fee_item(
        &self,
        request: &FeeItemRequest,
    ) -> Result<FeeItemResponse, ApiError> {
        self.post_json(FEE_ITEMS, request).await
    }

    pub async fn update_fee_item(
        &self,
        fee_item_id: i64,
        request: &FeeItemRequest,
    ) -> Result<FeeItemResponse, ApiError> {
        self.put_json(&fee_item_route(fee_item_id), request).await
    }

    pub async fn delete_fee_item(&self, fee_item_id: i64) -> Result<FeeItemResponse, ApiError> {
        self.delete_json(&fee_item_route(fee_item_id)).await
    }
}
