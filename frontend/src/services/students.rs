use shared::{StudentListResponse, StudentStatusResponse};

use super::api::{ApiClient, ApiError};

/// `GET /students/status`
/// Response: `StudentStatusResponse { student, enrollments, recent_payments }`
/// for the signed-in student.
pub const STATUS: &str = "/students/status";

/// `GET /students`
/// Response: `StudentListResponse { total_students, students }`. Finance only.
pub const LIST: &str = "/students";

/// `GET /students/:id`
/// Response: `StudentStatusResponse` for any student. Finance only; used by
/// the reconciliation match flow to list a student's payments.
pub fn student_route(student_id: i64) -> String {
    format!("/students/{}", student_id)
}

impl ApiClient {
    pub async fn student_status(&self) -> Result<StudentStatusResponse, ApiError> {
        self.get_json(STATUS).await
    }

    pub async fn list_students(&self) -> Result<StudentListResponse, ApiError> {
        self.get_json(LIST).await
    }

    pub async fn get_student(&self, student_id: i64) -> Result<StudentStatusResponse, ApiError> {
        self.get_json(&student_route(student_id)).await
    }
}
