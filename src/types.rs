use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ScheduleConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// how principal and interest are spread over the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepaymentMethod {
    /// level total payment each month, interest on the declining balance
    EqualPrincipalAndInterest,
    /// level principal each month, total payment declines with the balance
    EqualPrincipal,
    /// interest only, full principal at maturity
    Bullet,
}

impl RepaymentMethod {
    /// all methods in presentation order
    pub const ALL: [RepaymentMethod; 3] = [
        RepaymentMethod::EqualPrincipalAndInterest,
        RepaymentMethod::EqualPrincipal,
        RepaymentMethod::Bullet,
    ];

    /// wire tag used by the servicing api
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPrincipalAndInterest => "EQUAL_PRINCIPAL_AND_INTEREST",
            RepaymentMethod::EqualPrincipal => "EQUAL_PRINCIPAL",
            RepaymentMethod::Bullet => "BULLET",
        }
    }

    /// korean display label
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPrincipalAndInterest => "원리금균등상환",
            RepaymentMethod::EqualPrincipal => "원금균등상환",
            RepaymentMethod::Bullet => "만기일시상환",
        }
    }
}

impl fmt::Display for RepaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentMethod {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        RepaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::UnknownRepaymentMethod {
                value: s.to_string(),
            })
    }
}

/// loan parameters for one schedule calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub method: RepaymentMethod,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32, method: RepaymentMethod) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
            method,
        }
    }

    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::new()
    }

    /// same parameters under a different method
    pub fn with_method(self, method: RepaymentMethod) -> Self {
        Self { method, ..self }
    }

    /// Reject parameters the engine cannot schedule.
    ///
    /// Nothing is clamped: a negative principal or a principal finer than the
    /// currency precision is an input error, not something to round away.
    pub fn validate(&self, config: &ScheduleConfig) -> Result<()> {
        if self.principal.is_negative() {
            return Err(ScheduleError::invalid(
                "principal",
                format!("must not be negative, got {}", self.principal),
            ));
        }
        if !self.principal.fits_scale(config.currency_scale) {
            return Err(ScheduleError::invalid(
                "principal",
                format!(
                    "{} has more than {} fractional digits",
                    self.principal, config.currency_scale
                ),
            ));
        }
        if self.annual_rate.is_negative() {
            return Err(ScheduleError::invalid(
                "annual_rate",
                format!("must not be negative, got {}", self.annual_rate),
            ));
        }
        if self.term_months == 0 {
            return Err(ScheduleError::invalid("term_months", "must be at least 1"));
        }
        Ok(())
    }
}

/// builder for loan terms
pub struct LoanTermsBuilder {
    principal: Option<Money>,
    annual_rate: Option<Rate>,
    term_months: Option<u32>,
    method: RepaymentMethod,
}

impl LoanTermsBuilder {
    pub fn new() -> Self {
        Self {
            principal: None,
            annual_rate: None,
            term_months: None,
            method: RepaymentMethod::EqualPrincipalAndInterest,
        }
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn rate(mut self, annual_rate: Rate) -> Self {
        self.annual_rate = Some(annual_rate);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    pub fn method(mut self, method: RepaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn build(self) -> Result<LoanTerms> {
        let principal = self
            .principal
            .ok_or_else(|| ScheduleError::invalid("principal", "not set"))?;
        let annual_rate = self
            .annual_rate
            .ok_or_else(|| ScheduleError::invalid("annual_rate", "not set"))?;
        let term_months = self
            .term_months
            .ok_or_else(|| ScheduleError::invalid("term_months", "not set"))?;

        Ok(LoanTerms::new(principal, annual_rate, term_months, self.method))
    }
}

impl Default for LoanTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
