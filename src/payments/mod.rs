pub mod amortization;
pub mod summary;

pub use amortization::{
    generate_schedule, monthly_payment, total_interest, total_repayment, AmortizationEngine,
    AmortizationSchedule, InstallmentEntry,
};
pub use summary::{compare_methods, ScheduleSummary};
