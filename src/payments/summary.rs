use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payments::amortization::{AmortizationEngine, AmortizationSchedule};
use crate::types::{LoanTerms, RepaymentMethod};

/// headline figures of one schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub method: RepaymentMethod,
    pub installment_count: u32,
    /// first installment's total, not a constant unless the method is level-payment
    pub representative_payment: Money,
    pub final_payment: Money,
    pub total_interest: Money,
    pub total_repayment: Money,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &AmortizationSchedule) -> Self {
        Self {
            method: schedule.terms.method,
            installment_count: schedule.len() as u32,
            representative_payment: schedule.representative_payment(),
            final_payment: schedule.final_payment(),
            total_interest: schedule.total_interest,
            total_repayment: schedule.total_repayment,
        }
    }
}

impl AmortizationSchedule {
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_schedule(self)
    }
}

impl AmortizationEngine {
    pub fn summarize(&self, terms: &LoanTerms) -> Result<ScheduleSummary> {
        Ok(self.generate_schedule(terms)?.summary())
    }

    /// one summary per repayment method for the same loan, in presentation order
    pub fn compare_methods(
        &self,
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Result<Vec<ScheduleSummary>> {
        let base = LoanTerms::new(principal, annual_rate, term_months, RepaymentMethod::EqualPrincipalAndInterest);
        RepaymentMethod::ALL
            .into_iter()
            .map(|method| self.summarize(&base.with_method(method)))
            .collect()
    }
}

/// compare all repayment methods with the default configuration
pub fn compare_methods(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Vec<ScheduleSummary>> {
    AmortizationEngine::default().compare_methods(principal, annual_rate, term_months)
}
