use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted payment-proof upload (5 MB).
pub const MAX_PROOF_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum length of a bank-transfer reference after trimming.
pub const MIN_BANK_REFERENCE_LEN: usize = 3;

/// Dues above this amount put a student in the critical bucket.
pub const CRITICAL_DUES_THRESHOLD: f64 = 5000.0;

/// Dues at or above this amount (and at most the critical threshold)
/// put a student in the moderate bucket.
pub const MODERATE_DUES_THRESHOLD: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Role attached to a signed-in user. Drives which dashboard the router
/// sends the user to and which routes the finance gate admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Finance,
}

/// The signed-in user as held by the auth context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: UserRole,
    /// Dues balance snapshot taken at login; pages refetch live values.
    pub dues_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub dues_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
    pub msg: String,
}

impl LoginResponse {
    /// The context-ready user carried by a successful login.
    pub fn to_user(&self) -> AuthUser {
        AuthUser {
            user_id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            dues_balance: self.dues_balance,
        }
    }
}

// ---------------------------------------------------------------------------
// Students and enrollments
// ---------------------------------------------------------------------------

/// Aggregate fee standing of a student account, owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeesStatus {
    Unpaid,
    Partial,
    Paid,
}

impl FeesStatus {
    /// Label used in status badges.
    pub fn label(&self) -> &'static str {
        match self {
            FeesStatus::Unpaid => "Unpaid",
            FeesStatus::Partial => "Partial",
            FeesStatus::Paid => "Paid",
        }
    }
}

/// One row of the finance staff student list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub student_number: String,
    pub name: String,
    pub email: Option<String>,
    pub faculty: String,
    pub dues_balance: f64,
    pub fees_status: FeesStatus,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub total_students: usize,
    pub students: Vec<StudentSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    Dropped,
}

/// A course offered for registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub name: String,
    pub credits: u32,
    /// Resolved fee for the course: per-credit rate times credits when the
    /// course is billed per credit, otherwise a flat amount.
    pub total_fee: f64,
    pub description: String,
    pub faculty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub total_courses: usize,
    pub courses: Vec<Course>,
}

/// A student's registration in one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub fee: f64,
    pub status: EnrollmentStatus,
    /// RFC 3339 timestamp.
    pub enrolled_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub course_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
    pub new_dues_balance: f64,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEnrollmentResponse {
    pub enrollment_id: i64,
    pub new_dues_balance: f64,
    pub msg: String,
}

/// Everything the student dashboard renders, fetched in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStatusResponse {
    pub student: StudentSummary,
    pub enrollments: Vec<Enrollment>,
    pub recent_payments: Vec<Payment>,
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Cash => "Cash",
        }
    }
}

/// Payment lifecycle state. Transitions happen server-side; bank transfers
/// arrive `Pending` until staff verify the statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Received,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Received => "Received",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
    pub reference: String,
    pub status: PaymentStatus,
    /// RFC 3339 timestamp.
    pub paid_at: String,
    pub remaining_dues: f64,
}

impl Payment {
    /// Reference string constructed client-side for card payments:
    /// `PAY-<epoch millis>-<last 4 digits>`. Bank transfers keep the
    /// user-supplied reference instead.
    pub fn synthetic_reference(epoch_millis: u64, card_number: &str) -> String {
        let digits = digits_only(card_number);
        let last4 = if digits.len() >= 4 {
            &digits[digits.len() - 4..]
        } else {
            digits.as_str()
        };
        format!("PAY-{}-{}", epoch_millis, last4)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakePaymentRequest {
    pub amount: f64,
    pub method: PaymentMethod,
    pub reference: String,
    /// Name of the uploaded proof file, bank transfers only.
    pub proof_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment: Payment,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
}

// ---------------------------------------------------------------------------
// Payment form validation
// ---------------------------------------------------------------------------

/// Card fields as typed into the payment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: String,
    pub holder: String,
}

/// Bank-transfer fields as typed into the payment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransferDetails {
    pub reference: String,
    /// `(file name, size in bytes)` of the selected proof upload.
    pub proof: Option<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<PaymentValidationError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaymentValidationError {
    /// Card number did not contain exactly 16 digits; carries the count found.
    CardNumberLength(usize),
    /// Expiry was not a well-formed `MM/YY`.
    ExpiryFormat,
    /// Expiry month/year is before the current month/year.
    ExpiryInPast,
    /// CVV was not 3 or 4 digits.
    InvalidCvv,
    EmptyCardHolder,
    /// Bank reference shorter than the minimum; carries the trimmed length.
    ReferenceTooShort(usize),
    MissingProof,
    /// Proof upload larger than [`MAX_PROOF_BYTES`]; carries the size.
    ProofTooLarge(u64),
}

impl fmt::Display for PaymentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentValidationError::CardNumberLength(found) => {
                write!(f, "Card number must be 16 digits ({} entered)", found)
            }
            PaymentValidationError::ExpiryFormat => write!(f, "Expiry must be MM/YY"),
            PaymentValidationError::ExpiryInPast => write!(f, "Card has expired"),
            PaymentValidationError::InvalidCvv => write!(f, "CVV must be 3 or 4 digits"),
            PaymentValidationError::EmptyCardHolder => write!(f, "Cardholder name is required"),
            PaymentValidationError::ReferenceTooShort(len) => {
                write!(
                    f,
                    "Bank reference must be at least {} characters ({} entered)",
                    MIN_BANK_REFERENCE_LEN, len
                )
            }
            PaymentValidationError::MissingProof => write!(f, "A proof of transfer is required"),
            PaymentValidationError::ProofTooLarge(size) => {
                write!(
                    f,
                    "Proof file is {} which exceeds the 5MB limit",
                    format_file_size(*size)
                )
            }
        }
    }
}

impl std::error::Error for PaymentValidationError {}

/// Keep only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a card number for display: digits grouped in fours, at most 16.
/// Any other characters the user typed are dropped.
pub fn format_card_number(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(16).collect();
    let mut out = String::with_capacity(19);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Parse a strict `MM/YY` expiry into `(month, full year)`.
pub fn parse_expiry(input: &str) -> Option<(u32, u32)> {
    let (m, y) = input.trim().split_once('/')?;
    if m.len() != 2 || y.len() != 2 {
        return None;
    }
    let month: u32 = m.parse().ok()?;
    let year: u32 = y.parse().ok()?;
    if month == 0 || month > 12 {
        return None;
    }
    Some((month, 2000 + year))
}

/// Validate the card path of the payment form. `now_month`/`now_year` are
/// injected by the caller so the expiry check is deterministic.
pub fn validate_card(details: &CardDetails, now_month: u32, now_year: u32) -> PaymentFormValidation {
    let mut errors = Vec::new();

    let digits = digits_only(&details.number);
    if digits.len() != 16 {
        errors.push(PaymentValidationError::CardNumberLength(digits.len()));
    }

    match parse_expiry(&details.expiry) {
        None => errors.push(PaymentValidationError::ExpiryFormat),
        Some((month, year)) => {
            if year < now_year || (year == now_year && month < now_month) {
                errors.push(PaymentValidationError::ExpiryInPast);
            }
        }
    }

    let cvv = details.cvv.trim();
    if !(cvv.len() == 3 || cvv.len() == 4) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        errors.push(PaymentValidationError::InvalidCvv);
    }

    if details.holder.trim().is_empty() {
        errors.push(PaymentValidationError::EmptyCardHolder);
    }

    PaymentFormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validate the bank-transfer path of the payment form.
pub fn validate_bank_transfer(details: &BankTransferDetails) -> PaymentFormValidation {
    let mut errors = Vec::new();

    let reference = details.reference.trim();
    if reference.len() < MIN_BANK_REFERENCE_LEN {
        errors.push(PaymentValidationError::ReferenceTooShort(reference.len()));
    }

    match &details.proof {
        None => errors.push(PaymentValidationError::MissingProof),
        Some((_, size)) if *size > MAX_PROOF_BYTES => {
            errors.push(PaymentValidationError::ProofTooLarge(*size));
        }
        Some(_) => {}
    }

    PaymentFormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Fee configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeCategory {
    Tuition,
    Bus,
    Library,
    Lab,
    Other,
}

impl FeeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FeeCategory::Tuition => "Tuition",
            FeeCategory::Bus => "Bus",
            FeeCategory::Library => "Library",
            FeeCategory::Lab => "Lab",
            FeeCategory::Other => "Other",
        }
    }
}

/// A configured fee line. `per_credit` fees multiply by enrolled credit
/// hours; all others are flat amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeItem {
    pub id: i64,
    pub category: FeeCategory,
    pub name: String,
    pub amount: f64,
    pub per_credit: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeItemRequest {
    pub category: FeeCategory,
    pub name: String,
    pub amount: f64,
    pub per_credit: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeItemResponse {
    pub fee_item: FeeItem,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeItemListResponse {
    pub fee_items: Vec<FeeItem>,
}

/// Total fees for a semester:
/// per-credit items times `credit_hours`, plus flat items, with bus fees
/// counted only when `include_bus` is set. Inactive items never count.
pub fn fee_total(items: &[FeeItem], credit_hours: u32, include_bus: bool) -> f64 {
    items
        .iter()
        .filter(|item| item.active)
        .filter(|item| include_bus || item.category != FeeCategory::Bus)
        .map(|item| {
            if item.per_credit {
                item.amount * credit_hours as f64
            } else {
                item.amount
            }
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Bank reconciliation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Matched,
    Unmatched,
    Pending,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "Matched",
            MatchStatus::Unmatched => "Unmatched",
            MatchStatus::Pending => "Pending",
        }
    }
}

/// One imported bank statement line. The matching decision is made by
/// staff; a `Matched` row links exactly one payment and is read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    pub id: i64,
    pub bank_reference: String,
    pub amount: f64,
    /// Value date, `YYYY-MM-DD`.
    pub value_date: String,
    pub match_status: MatchStatus,
    pub student_id: Option<i64>,
    pub payment_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransactionListResponse {
    pub total: usize,
    pub transactions: Vec<BankTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTransactionRequest {
    pub student_id: i64,
    pub payment_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTransactionResponse {
    pub transaction: BankTransaction,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnoreTransactionResponse {
    pub transaction_id: i64,
    pub msg: String,
}

// ---------------------------------------------------------------------------
// Finance aggregates
// ---------------------------------------------------------------------------

/// Headline numbers for the finance dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_students: usize,
    pub total_payments: f64,
    pub total_outstanding: f64,
    pub unpaid_students: usize,
    pub partial_students: usize,
    pub paid_students: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyBreakdown {
    pub faculty: String,
    pub student_count: usize,
    pub outstanding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuesSort {
    DuesBalance,
    Username,
}

impl DuesSort {
    /// Query-string value for the `sort_by` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            DuesSort::DuesBalance => "dues_balance",
            DuesSort::Username => "username",
        }
    }
}

/// Filters applied by the student list dues view; all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuesFilter {
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub sort_by: Option<DuesSort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuesSummary {
    pub total_students_with_dues: usize,
    pub total_outstanding_amount: f64,
    pub students: Vec<StudentSummary>,
}

/// Severity bucket a student with outstanding dues falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuesSeverity {
    Critical,
    Moderate,
    Low,
}

impl DuesSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            DuesSeverity::Critical => "Critical",
            DuesSeverity::Moderate => "Moderate",
            DuesSeverity::Low => "Low",
        }
    }
}

/// Bucket a dues balance: critical above 5000, moderate from 1000 to 5000,
/// low below 1000. Every balance lands in exactly one bucket.
pub fn dues_severity(dues_balance: f64) -> DuesSeverity {
    if dues_balance > CRITICAL_DUES_THRESHOLD {
        DuesSeverity::Critical
    } else if dues_balance >= MODERATE_DUES_THRESHOLD {
        DuesSeverity::Moderate
    } else {
        DuesSeverity::Low
    }
}

/// One row of the unpaid report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnpaidStudent {
    pub student: StudentSummary,
    pub severity: DuesSeverity,
    /// Days past the payment deadline, computed by the backend.
    pub days_overdue: u32,
    pub last_payment_date: Option<String>,
    pub total_enrollments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnpaidReport {
    /// RFC 3339 timestamp.
    pub report_date: String,
    pub total_students: usize,
    pub total_outstanding: f64,
    pub students: Vec<UnpaidStudent>,
}

/// Strict overdue filter: keeps rows with `days_overdue > days`.
pub fn filter_overdue(students: &[UnpaidStudent], days: u32) -> Vec<UnpaidStudent> {
    students
        .iter()
        .filter(|s| s.days_overdue > days)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassFail {
    Pass,
    Fail,
}

/// One row of the pass/fail status report: pass when dues are at or below
/// the requested threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReportEntry {
    pub student: StudentSummary,
    pub total_fees: f64,
    pub status: PassFail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub report_date: String,
    pub threshold: f64,
    pub total_students: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    pub entries: Vec<StatusReportEntry>,
}

// ---------------------------------------------------------------------------
// Staff actions
// ---------------------------------------------------------------------------

/// Mutations finance staff can trigger against a student account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentActionKind {
    Contact,
    Penalty,
    Block,
}

impl StudentActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            StudentActionKind::Contact => "Contact",
            StudentActionKind::Penalty => "Apply penalty",
            StudentActionKind::Block => "Block registration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentActionRequest {
    /// Contact channel (`EMAIL`, `PHONE`) for contact actions.
    pub contact_method: Option<String>,
    /// Penalty amount for penalty actions.
    pub amount: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentActionResponse {
    pub action_id: i64,
    pub student_id: i64,
    /// RFC 3339 timestamp.
    pub action_date: String,
    pub msg: String,
}

/// Payment received outside the portal (bank counter, cash office),
/// recorded manually by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub student_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub reference_number: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentResponse {
    pub payment_id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub remaining_dues: f64,
    pub msg: String,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFormat {
    Json,
    Csv,
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Json => "JSON",
            ReportFormat::Csv => "CSV",
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }

    /// Formats the backend can actually render today. PDF and Excel are
    /// part of the contract but answer 501 until implemented server-side.
    pub fn is_implemented(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Csv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    FinanceSummary,
    UnpaidStudents,
    FacultyBreakdown,
    PaymentLedger,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::FinanceSummary => "Finance summary",
            ReportType::UnpaidStudents => "Unpaid students",
            ReportType::FacultyBreakdown => "Faculty breakdown",
            ReportType::PaymentLedger => "Payment ledger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    pub report_type: ReportType,
    pub format: ReportFormat,
}

/// A generated report artifact, persisted server-side and listed in the
/// recent-reports feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_type: ReportType,
    pub format: ReportFormat,
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub row_count: usize,
    pub download_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    pub report: Report,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<Report>,
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Money for display: thousands separators and two decimals, e.g. `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, rem)
}

/// Byte count for display, used in proof-file errors.
pub fn format_file_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0}KB", bytes as f64 / 1024.0)
    } else {
        format!("{}B", bytes)
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

/// RFC 3339 timestamp for display, e.g. "March 4, 2026". Falls back to the
/// input when it does not parse.
pub fn format_date(rfc3339: &str) -> String {
    use chrono::Datelike;

    match chrono::DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => format!("{} {}, {}", month_name(dt.month()), dt.day(), dt.year()),
        Err(_) => rfc3339.to_string(),
    }
}

/// `YYYY-MM-DD` date for display; same fallback behavior as [`format_date`].
pub fn format_day(date: &str) -> String {
    use chrono::Datelike;

    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {}, {}", month_name(d.month()), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(category: FeeCategory, amount: f64, per_credit: bool, active: bool) -> FeeItem {
        FeeItem {
            id: 0,
            category,
            name: "fee".to_string(),
            amount,
            per_credit,
            active,
        }
    }

    fn card(number: &str, expiry: &str, cvv: &str, holder: &str) -> CardDetails {
        CardDetails {
            number: number.to_string(),
            expiry: expiry.to_string(),
            cvv: cvv.to_string(),
            holder: holder.to_string(),
        }
    }

    #[test]
    fn test_format_card_number_groups_of_four() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111-1111 2222"), "4111 1111 2222");
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_card_number_truncates_at_sixteen() {
        // 20 digits entered, only 16 kept
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry("08/27"), Some((8, 2027)));
        assert_eq!(parse_expiry("12/99"), Some((12, 2099)));
        assert_eq!(parse_expiry(" 01/30 "), Some((1, 2030)));

        assert_eq!(parse_expiry("13/27"), None);
        assert_eq!(parse_expiry("00/27"), None);
        assert_eq!(parse_expiry("8/27"), None);
        assert_eq!(parse_expiry("08/2027"), None);
        assert_eq!(parse_expiry("0827"), None);
        assert_eq!(parse_expiry("ab/cd"), None);
    }

    #[test]
    fn test_validate_card_accepts_valid_input() {
        let result = validate_card(
            &card("4111 1111 1111 1111", "08/27", "123", "A Student"),
            6,
            2026,
        );
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_card_rejects_wrong_length() {
        let result = validate_card(&card("4111 1111", "08/27", "123", "A Student"), 6, 2026);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&PaymentValidationError::CardNumberLength(8)));
    }

    #[test]
    fn test_validate_card_rejects_past_expiry() {
        // expired last month
        let result = validate_card(&card("4111111111111111", "05/26", "123", "A Student"), 6, 2026);
        assert!(result.errors.contains(&PaymentValidationError::ExpiryInPast));

        // current month is still valid
        let result = validate_card(&card("4111111111111111", "06/26", "123", "A Student"), 6, 2026);
        assert!(result.is_valid);

        // previous year
        let result = validate_card(&card("4111111111111111", "12/25", "123", "A Student"), 6, 2026);
        assert!(result.errors.contains(&PaymentValidationError::ExpiryInPast));
    }

    #[test]
    fn test_validate_card_rejects_month_over_twelve() {
        let result = validate_card(&card("4111111111111111", "13/27", "123", "A Student"), 6, 2026);
        assert!(result.errors.contains(&PaymentValidationError::ExpiryFormat));
    }

    #[test]
    fn test_validate_card_cvv_and_holder() {
        let result = validate_card(&card("4111111111111111", "08/27", "12", "A Student"), 6, 2026);
        assert!(result.errors.contains(&PaymentValidationError::InvalidCvv));

        let result = validate_card(&card("4111111111111111", "08/27", "12a", "A Student"), 6, 2026);
        assert!(result.errors.contains(&PaymentValidationError::InvalidCvv));

        let result = validate_card(&card("4111111111111111", "08/27", "1234", "   "), 6, 2026);
        assert!(result
            .errors
            .contains(&PaymentValidationError::EmptyCardHolder));
    }

    #[test]
    fn test_validate_bank_transfer() {
        let ok = validate_bank_transfer(&BankTransferDetails {
            reference: "TRF-2026-001".to_string(),
            proof: Some(("receipt.pdf".to_string(), 120_000)),
        });
        assert!(ok.is_valid);

        let short = validate_bank_transfer(&BankTransferDetails {
            reference: "  ab  ".to_string(),
            proof: Some(("receipt.pdf".to_string(), 120_000)),
        });
        assert!(short
            .errors
            .contains(&PaymentValidationError::ReferenceTooShort(2)));

        let missing = validate_bank_transfer(&BankTransferDetails {
            reference: "TRF-1".to_string(),
            proof: None,
        });
        assert!(missing.errors.contains(&PaymentValidationError::MissingProof));

        let oversized = validate_bank_transfer(&BankTransferDetails {
            reference: "TRF-1".to_string(),
            proof: Some(("scan.png".to_string(), MAX_PROOF_BYTES + 1)),
        });
        assert!(oversized
            .errors
            .contains(&PaymentValidationError::ProofTooLarge(MAX_PROOF_BYTES + 1)));

        // exactly at the limit passes
        let at_limit = validate_bank_transfer(&BankTransferDetails {
            reference: "TRF-1".to_string(),
            proof: Some(("scan.png".to_string(), MAX_PROOF_BYTES)),
        });
        assert!(at_limit.is_valid);
    }

    #[test]
    fn test_synthetic_reference() {
        assert_eq!(
            Payment::synthetic_reference(1765432100000, "4111 1111 1111 1234"),
            "PAY-1765432100000-1234"
        );
        // fewer than four digits available: keep what is there
        assert_eq!(Payment::synthetic_reference(1000, "12"), "PAY-1000-12");
    }

    #[test]
    fn test_fee_total() {
        let items = vec![
            fee(FeeCategory::Tuition, 150.0, true, true),
            fee(FeeCategory::Library, 75.0, false, true),
            fee(FeeCategory::Bus, 200.0, false, true),
        ];

        // 150 * 12 credits + 75 flat, no bus
        assert_eq!(fee_total(&items, 12, false), 150.0 * 12.0 + 75.0);
        // with bus included
        assert_eq!(fee_total(&items, 12, true), 150.0 * 12.0 + 75.0 + 200.0);
        // zero credits still charges flat fees
        assert_eq!(fee_total(&items, 0, false), 75.0);
    }

    #[test]
    fn test_fee_total_skips_inactive() {
        let items = vec![
            fee(FeeCategory::Tuition, 150.0, true, false),
            fee(FeeCategory::Lab, 50.0, false, true),
        ];
        assert_eq!(fee_total(&items, 15, false), 50.0);
    }

    #[test]
    fn test_dues_severity_buckets() {
        assert_eq!(dues_severity(5000.01), DuesSeverity::Critical);
        assert_eq!(dues_severity(5000.0), DuesSeverity::Moderate);
        assert_eq!(dues_severity(1000.0), DuesSeverity::Moderate);
        assert_eq!(dues_severity(999.99), DuesSeverity::Low);
        assert_eq!(dues_severity(0.0), DuesSeverity::Low);
    }

    #[test]
    fn test_filter_overdue_is_strict() {
        let student = StudentSummary {
            id: 1,
            student_number: "S-001".to_string(),
            name: "Test Student".to_string(),
            email: None,
            faculty: "Engineering".to_string(),
            dues_balance: 1200.0,
            fees_status: FeesStatus::Unpaid,
            blocked: false,
        };
        let row = |days| UnpaidStudent {
            student: student.clone(),
            severity: DuesSeverity::Moderate,
            days_overdue: days,
            last_payment_date: None,
            total_enrollments: 2,
        };

        let rows = vec![row(0), row(7), row(8), row(30)];
        let filtered = filter_overdue(&rows, 7);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.days_overdue > 7));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(5.5), "$5.50");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_250_000.0), "$1,250,000.00");
        assert_eq!(format_money(-42.25), "-$42.25");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512B");
        assert_eq!(format_file_size(2048), "2KB");
        assert_eq!(format_file_size(6 * 1024 * 1024), "6.0MB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-04T10:15:00Z"), "March 4, 2026");
        assert_eq!(format_date("2026-03-04T10:15:00+02:00"), "March 4, 2026");
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_day("2026-01-31"), "January 31, 2026");
    }

    #[test]
    fn test_wire_spellings() {
        // The backend speaks upper-snake for lifecycle enums.
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Received).unwrap(),
            "\"RECEIVED\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"BANK_TRANSFER\""
        );
        assert_eq!(
            serde_json::to_string(&FeesStatus::Partial).unwrap(),
            "\"PARTIAL\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::Unmatched).unwrap(),
            "\"Unmatched\""
        );
        assert_eq!(
            serde_json::to_string(&DuesSort::DuesBalance).unwrap(),
            "\"dues_balance\""
        );

        let role: UserRole = serde_json::from_str("\"FINANCE\"").unwrap();
        assert_eq!(role, UserRole::Finance);
    }

    #[test]
    fn test_login_response_to_user() {
        let response = LoginResponse {
            access_token: "token".to_string(),
            user_id: 7,
            username: "amal".to_string(),
            email: Some("amal@example.edu".to_string()),
            role: UserRole::Student,
            dues_balance: 350.0,
        };
        let user = response.to_user();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.dues_balance, 350.0);
    }
}
