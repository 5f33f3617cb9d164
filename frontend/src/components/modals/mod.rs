pub mod confirm_modal;
pub mod match_transaction_modal;
pub mod record_payment_modal;
pub mod student_action_modal;

pub use confirm_modal::ConfirmModal;
pub use match_transaction_modal::MatchTransactionModal;
pub use record_payment_modal::RecordPaymentModal;
pub use student_action_modal::StudentActionModal;
