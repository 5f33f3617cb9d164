use shared::{
    DuesFilter, DuesSummary, FacultyBreakdown, FinanceSummary, RecordPaymentRequest,
    RecordPaymentResponse, StatusReport, StudentActionKind, StudentActionRequest,
    StudentActionResponse, UnpaidReport,
};

use super::api::{ApiClient, ApiError};

/// `GET /finance/summary`
/// Response: `FinanceSummary { total_students, total_payments,
/// total_outstanding, unpaid_students, partial_students, paid_students }`.
pub const SUMMARY: &str = "/finance/summary";

/// `GET /finance/reports/faculty`
/// Response: `Vec<FacultyBreakdown> { faculty, student_count, outstanding }`.
pub const FACULTY_BREAKDOWN: &str = "/finance/reports/faculty";

/// `GET /finance/dues`
/// Query: `min_amount?`, `max_amount?`, `sort_by?` (`dues_balance` |
/// `username`, defaults to dues descending).
/// Response: `DuesSummary { total_students_with_dues,
/// total_outstanding_amount, students }`.
pub const DUES: &str = "/finance/dues";

/// `GET /finance/unpaid-report`
/// Response: `UnpaidReport { report_date, total_students, total_outstanding,
/// students }`, each row carrying its severity bucket and days overdue.
pub const UNPAID_REPORT: &str = "/finance/unpaid-report";

/// `POST /finance/record-payment`
/// Request: `RecordPaymentRequest { student_id, amount, payment_method,
/// reference_number?, notes }` for payments taken outside the portal.
/// Response: `RecordPaymentResponse { payment_id, student_id, amount,
/// remaining_dues, msg }`.
pub const RECORD_PAYMENT: &str = "/finance/record-payment";

/// `GET /finance/reports/status?threshold=N`
/// Response: `StatusReport` splitting students into PASS (dues <= threshold)
/// and FAIL.
pub fn status_report_route(threshold: f64) -> String {
    format!("/finance/reports/status?threshold={}", threshold)
}

/// `PUT /finance/action/{contact|penalty|block}/:student_id`
/// Request: `StudentActionRequest { contact_method?, amount?, notes }`.
/// Response: `StudentActionResponse { action_id, student_id, action_date,
/// msg }`. Every action is logged server-side and notifies the student.
pub fn action_route(kind: StudentActionKind, student_id: i64) -> String {
    let segment = match kind {
        StudentActionKind::Contact => "contact",
        StudentActionKind::Penalty => "penalty",
        StudentActionKind::Block => "block",
    };
    format!("/finance/action/{}/{}", segment, student_id)
}

/// Query-string form of a [`DuesFilter`]; the bare route when empty.
pub fn dues_route(filter: &DuesFilter) -> String {
    let mut params = Vec::new();
    if let Some(min) = filter.min_amount {
        params.push(format!("min_amount={}", min));
    }
    if let Some(max) = filter.max_amount {
        params.push(format!("max_amount={}", max));
    }
    if let Some(sort) = filter.sort_by {
        params.push(format!("sort_by={}", sort.as_param()));
    }
    if params.is_empty() {
        DUES.to_string()
    } else {
        format!("{}?{}", DUES, params.join("&"))
    }
}

impl ApiClient {
    pub async fn finance_summary(&self) -> Result<FinanceSummary, ApiError> {
        self.get_json(SUMMARY).await
    }

    pub async fn faculty_breakdown(&self) -> Result<Vec<FacultyBreakdown>, ApiError> {
        self.get_json(FACULTY_BREAKDOWN).await
    }

    pub async fn dues(&self, filter: &DuesFilter) -> Result<DuesSummary, ApiError> {
        self.get_json(&dues_route(filter)).await
    }

    pub async fn unpaid_report(&self) -> Result<UnpaidReport, ApiError> {
        self.get_json(UNPAID_REPORT).await
    }

    pub async fn status_report(&self, threshold: f64) -> Result<StatusReport, ApiError> {
        self.get_json(&status_report_route(threshold)).await
    }

    pub async fn record_payment(
        &self,
        request: &RecordPaymentRequest,
    ) -> Result<RecordPaymentResponse, ApiError> {
        self.post_json(RECORD_PAYMENT, request).await
    }

    pub async fn student_action(
        &self,
        kind: StudentActionKind,
        student_id: i64,
        request: &StudentActionRequest,
    ) -> Result<StudentActionResponse, ApiError> {
        self.put_json(&action_route(kind, student_id), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DuesSort;

    #[test]
    fn test_dues_route_without_filters() {
        assert_eq!(dues_route(&DuesFilter::default()), "/finance/dues");
    }

    #[test]
    fn test_dues_route_with_filters() {
        let filter = DuesFilter {
            min_amount: Some(100.0),
            max_amount: Some(2500.0),
            sort_by: Some(DuesSort::Username),
        };
        assert_eq!(
            dues_route(&filter),
            "/finance/dues?min_amount=100&max_amount=2500&sort_by=username"
        );
    }

    #[test]
    fn test_dues_route_partial_filter() {
        let filter = DuesFilter {
            min_amount: None,
            max_amount: Some(500.0),
            sort_by: None,
        };
        assert_eq!(dues_route(&filter), "/finance/dues?max_amount=500");
    }

    #[test]
    fn test_action_routes() {
        assert_eq!(
            action_route(StudentActionKind::Contact, 9),
            "/finance/action/contact/9"
        );
        assert_eq!(
            action_route(StudentActionKind::Penalty, 9),
            "/finance/action/penalty/9"
        );
        assert_eq!(
            action_route(StudentActionKind::Block, 9),
            "/finance/action/block/9"
        );
    }
}
