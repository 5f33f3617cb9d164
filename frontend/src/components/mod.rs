pub mod dashboard_layout;
pub mod finance_layout;
pub mod forms;
pub mod modals;
pub mod status_badge;

pub use dashboard_layout::DashboardLayout;
pub use finance_layout::FinanceLayout;
