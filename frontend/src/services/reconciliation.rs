use shared::{
    BankTransactionListResponse, IgnoreTransactionResponse, MatchStatus, MatchTransactionRequest,
    MatchTransactionResponse,
};

use super::api::{ApiClient, ApiError};

/// `GET /finance/bank-reconciliation`
/// Query: `status?` (`Matched` | `Unmatched` | `Pending`).
/// Response: `BankTransactionListResponse { total, transactions }` - the
/// imported bank statement lines with their current match state.
pub const BANK_TRANSACTIONS: &str = "/finance/bank-reconciliation";

/// `PUT /finance/bank-reconciliation/:id/match`
/// Request: `MatchTransactionRequest { student_id, payment_id }` - the pair
/// staff selected in the match dialog; the backend owns the actual
/// reconciliation bookkeeping.
/// Response: `MatchTransactionResponse { transaction, msg }` with the row
/// now `Matched`; 409 when the payment is already matched elsewhere.
pub fn match_route(transaction_id: i64) -> String {
    format!("/finance/bank-reconciliation/{}/match", transaction_id)
}

/// `PUT /finance/bank-reconciliation/:id/ignore`
/// Response: `IgnoreTransactionResponse { transaction_id, msg }`. Removes
/// the line from the work queue without linking a payment.
pub fn ignore_route(transaction_id: i64) -> String {
    format!("/finance/bank-reconciliation/{}/ignore", transaction_id)
}

/// Route with an optional match-status filter.
pub fn list_route(status: Option<MatchStatus>) -> String {
    match status {
        Some(status) => format!("{}?status={}", BANK_TRANSACTIONS, status.label()),
        None => BANK_TRANSACTIONS.to_string(),
    }
}

impl ApiClient {
    pub async fn list_bank_transactions(
        &self,
        status: Option<MatchStatus>,
    ) -> Result<BankTransactionListResponse, ApiError> {
        self.get_json(&list_route(status)).await
    }

    pub async fn match_transaction(
        &self,
        transaction_id: i64,
        request: &MatchTransactionRequest,
    ) -> Result<MatchTransactionResponse, ApiError> {
        self.put_json(&match_route(transaction_id), request).await
    }

    pub async fn ignore_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<IgnoreTransactionResponse, ApiError> {
        self.put_empty(&ignore_route(transaction_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_route() {
        assert_eq!(list_route(None), "/finance/bank-reconciliation");
        assert_eq!(
            list_route(Some(MatchStatus::Unmatched)),
            "/finance/bank-reconciliation?status=Unmatched"
        );
    }

    #[test]
    fn test_row_routes() {
        assert_eq!(match_route(12), "/finance/bank-reconciliation/12/match");
        assert_eq!(ignore_route(12), "/finance/bank-reconciliation/12/ignore");
    }
}
