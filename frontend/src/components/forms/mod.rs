pub mod fee_item_form;
pub mod payment_form;

pub use fee_item_form::FeeItemForm;
pub use payment_form::PaymentForm;
