use shared::{GenerateReportRequest, GenerateReportResponse, ReportListResponse};

use super::api::{ApiClient, ApiError};

/// `POST /finance/reports/generate`
/// Request: `GenerateReportRequest { report_type, format }`.
/// Response: `GenerateReportResponse { report, msg }`; 501 for formats the
/// backend declares but has not implemented (PDF, Excel).
pub const GENERATE: &str = "/finance/reports/generate";

/// `GET /finance/reports/recent`
/// Response: `ReportListResponse { reports }`, newest first. Each report
/// carries a backend-served `download_url`.
pub const RECENT: &str = "/finance/reports/recent";

impl ApiClient {
    pub async fn generate_report(
        &self,
        request: &GenerateReportRequest,
    ) -> Result<GenerateReportResponse, ApiError> {
        self.post_json(GENERATE, request).await
    }

    pub async fn recent_reports(&self) -> Result<ReportListResponse, ApiError> {
        self.get_json(RECENT).await
    }
}
