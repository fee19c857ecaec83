/// serialization support for schedules
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::payments::{AmortizationSchedule, ScheduleSummary};
use crate::types::RepaymentMethod;

/// serializable view of a schedule for presentation
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub loan: LoanView,
    pub summary: ScheduleSummary,
    pub installments: Vec<InstallmentView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub principal: Money,
    /// annual rate as a fraction (0.055 for 5.5%)
    pub annual_rate: Rate,
    /// absent when the rate is too large to express in percent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annual_rate_percent: Option<Decimal>,
    pub term_months: u32,
    pub method: RepaymentMethod,
    pub method_label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InstallmentView {
    pub installment_number: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<NaiveDate>,
    pub principal_amount: Money,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub remaining_balance: Money,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &AmortizationSchedule) -> Self {
        let terms = &schedule.terms;
        ScheduleView {
            loan: LoanView {
                principal: terms.principal,
                annual_rate: terms.annual_rate,
                annual_rate_percent: terms.annual_rate.as_percentage().map(|p| p.normalize()),
                term_months: terms.term_months,
                method: terms.method,
                method_label: terms.method.label().to_string(),
            },
            summary: schedule.summary(),
            installments: schedule
                .iter()
                .map(|entry| InstallmentView {
                    installment_number: entry.installment_number,
                    due_date: entry.due_date,
                    principal_amount: entry.principal_amount,
                    interest_amount: entry.interest_amount,
                    total_amount: entry.total_amount,
                    remaining_balance: entry.remaining_balance,
                })
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
