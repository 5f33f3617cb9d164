use shared::{MakePaymentRequest, PaymentListResponse, PaymentResponse};

use super::api::{ApiClient, ApiError};

/// `POST /students/pay`
/// Request: `MakePaymentRequest { amount, method, reference, proof_filename? }`.
/// Response: `PaymentResponse { payment, msg }`. Card payments come back
/// `RECEIVED`; bank transfers come back `PENDING` awaiting staff
/// verification against the bank statement.
pub const PAY: &str = "/students/pay";

/// `GET /students/payments`
/// Response: `PaymentListResponse { payments }`, newest first.
pub const HISTORY: &str = "/students/payments";

/// `GET /students/payments/:id`
/// Response: `PaymentResponse { payment, msg }`.
pub fn payment_route(payment_id: i64) -> String {
    format!("/students/payments/{}", payment_id)
}

impl ApiClient {
    pub async fn make_payment(
        &self,
        request: &MakePaymentRequest,
    ) -> Result<PaymentResponse, ApiError> {
        self.post_json(PAY, request).await
    }

    pub async fn payment_history(&self) -> Result<PaymentListResponse, ApiError> {
        self.get_json(HISTORY).await
    }

    pub async fn get_payment(&self, payment_id: i64) -> Result<PaymentResponse, ApiError> {
        self.get_json(&payment_route(payment_id)).await
    }
}
