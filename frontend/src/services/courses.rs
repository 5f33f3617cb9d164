use shared::{CourseListResponse, DropEnrollmentResponse, EnrollRequest, EnrollResponse};

use super::api::{ApiClient, ApiError};

/// `GET /courses`
/// Response: `CourseListResponse { total_courses, courses }`, scoped to the
/// signed-in student's faculty by the backend.
pub const LIST: &str = "/courses";

/// `POST /students/enroll`
/// Request: `EnrollRequest { course_id }`.
/// Response: `EnrollResponse { enrollment, new_dues_balance, msg }`; 409 when
/// already enrolled, 403 when the account is blocked.
pub const ENROLL: &str = "/students/enroll";

/// `DELETE /students/enrollments/:id`
/// Response: `DropEnrollmentResponse { enrollment_id, new_dues_balance, msg }`.
pub fn drop_enrollment_route(enrollment_id: i64) -> String {
    format!("/students/enrollments/{}", enrollment_id)
}

impl ApiClient {
    pub async fn list_courses(&self) -> Result<CourseListResponse, ApiError> {
        self.get_json(LIST).await
    }

    pub async fn enroll(&self, request: &EnrollRequest) -> Result<EnrollResponse, ApiError> {
        self.post_json(ENROLL, request).await
    }

    pub async fn drop_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<DropEnrollmentResponse, ApiError> {
        self.delete_json(&drop_enrollment_route(enrollment_id)).await
    }
}
