pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod serialization;
pub mod types;

use rust_decimal_macros::dec;

// re-export key types
pub use config::ScheduleConfig;
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use payments::{
    compare_methods, generate_schedule, monthly_payment, total_interest, total_repayment,
    AmortizationEngine, AmortizationSchedule, InstallmentEntry, ScheduleSummary,
};
pub use serialization::ScheduleView;
pub use types::{LoanTerms, LoanTermsBuilder, RepaymentMethod};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;

/// flat annual rate (percent) assumed when simulating before underwriting
pub const DEFAULT_SIMULATION_RATE_PERCENT: Decimal = dec!(5.5);
