use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::types::{LoanTerms, RepaymentMethod};

/// one installment in an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentEntry {
    pub installment_number: u32,
    pub due_date: Option<NaiveDate>,
    pub beginning_balance: Money,
    pub principal_amount: Money,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub remaining_balance: Money,
}

/// amortization schedule with its aggregates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub terms: LoanTerms,
    pub installments: Vec<InstallmentEntry>,
    pub total_interest: Money,
    pub total_repayment: Money,
}

impl AmortizationSchedule {
    /// generate with the default (won) configuration
    pub fn generate(terms: &LoanTerms) -> Result<Self> {
        AmortizationEngine::default().generate_schedule(terms)
    }

    fn from_installments(terms: LoanTerms, installments: Vec<InstallmentEntry>) -> Result<Self> {
        let total_interest = installments
            .iter()
            .try_fold(Money::ZERO, |acc, entry| acc.checked_add(entry.interest_amount))
            .ok_or_else(|| ScheduleError::overflow("total interest"))?;

        let total_repayment = terms
            .principal
            .checked_add(total_interest)
            .ok_or_else(|| ScheduleError::overflow("total repayment"))?;

        Ok(Self {
            terms,
            installments,
            total_interest,
            total_repayment,
        })
    }

    /// get installment by its 1-based number
    pub fn get_installment(&self, installment_number: u32) -> Option<&InstallmentEntry> {
        installment_number
            .checked_sub(1)
            .and_then(|index| self.installments.get(index as usize))
    }

    /// remaining balance after the given installment; installment 0 is the start
    pub fn balance_after(&self, installment_number: u32) -> Money {
        self.get_installment(installment_number)
            .map(|entry| entry.remaining_balance)
            .unwrap_or(self.terms.principal)
    }

    /// First installment's total.
    ///
    /// Only `EqualPrincipalAndInterest` keeps this figure for every installment
    /// but the last. Under `EqualPrincipal` it is the largest payment of the
    /// schedule, under `Bullet` an interest-only payment far below the balloon.
    pub fn representative_payment(&self) -> Money {
        self.installments
            .first()
            .map(|entry| entry.total_amount)
            .unwrap_or(Money::ZERO)
    }

    /// last installment's total (the balloon under `Bullet`)
    pub fn final_payment(&self) -> Money {
        self.installments
            .last()
            .map(|entry| entry.total_amount)
            .unwrap_or(Money::ZERO)
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstallmentEntry> {
        self.installments.iter()
    }

    pub fn into_installments(self) -> Vec<InstallmentEntry> {
        self.installments
    }
}

/// how a non-final installment's principal portion is derived
enum PrincipalRule {
    /// level total payment, principal is what interest leaves over
    Annuity { payment: Money },
    /// level principal
    Level { amount: Money },
    /// nothing until maturity
    Balloon,
}

impl PrincipalRule {
    fn portion(&self, interest: Money) -> Result<Money> {
        match self {
            PrincipalRule::Annuity { payment } => payment
                .checked_sub(interest)
                .ok_or_else(|| ScheduleError::overflow("principal portion")),
            PrincipalRule::Level { amount } => Ok(*amount),
            PrincipalRule::Balloon => Ok(Money::ZERO),
        }
    }
}

/// Stateless schedule calculator.
///
/// Every interest and principal figure is rounded to the currency scale as it
/// is computed; nothing fractional carries into the next installment. The last
/// installment always takes the exact remaining balance, so principal portions
/// sum to the loan principal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmortizationEngine {
    config: ScheduleConfig,
}

impl AmortizationEngine {
    pub fn new(config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// calculate full amortization schedule
    pub fn generate_schedule(&self, terms: &LoanTerms) -> Result<AmortizationSchedule> {
        let installments = self.calculate_installments(terms, None)?;
        self.finish(terms, installments)
    }

    /// calculate schedule with due dates `start_date + n months`
    pub fn generate_dated_schedule(
        &self,
        terms: &LoanTerms,
        start_date: NaiveDate,
    ) -> Result<AmortizationSchedule> {
        let installments = self.calculate_installments(terms, Some(start_date))?;
        self.finish(terms, installments)
    }

    /// first installment's total, see [`AmortizationSchedule::representative_payment`]
    pub fn monthly_payment(&self, terms: &LoanTerms) -> Result<Money> {
        Ok(self.generate_schedule(terms)?.representative_payment())
    }

    pub fn total_interest(&self, terms: &LoanTerms) -> Result<Money> {
        Ok(self.generate_schedule(terms)?.total_interest)
    }

    pub fn total_repayment(&self, terms: &LoanTerms) -> Result<Money> {
        Ok(self.generate_schedule(terms)?.total_repayment)
    }

    fn finish(&self, terms: &LoanTerms, installments: Vec<InstallmentEntry>) -> Result<AmortizationSchedule> {
        let schedule = AmortizationSchedule::from_installments(*terms, installments)?;
        log::debug!(
            "generated {} schedule: principal {}, rate {}, {} installments, total interest {}",
            terms.method,
            terms.principal,
            terms.annual_rate,
            schedule.len(),
            schedule.total_interest
        );
        Ok(schedule)
    }

    fn calculate_installments(
        &self,
        terms: &LoanTerms,
        start_date: Option<NaiveDate>,
    ) -> Result<Vec<InstallmentEntry>> {
        if let Err(err) = terms.validate(&self.config) {
            log::warn!("rejected loan terms: {}", err);
            return Err(err);
        }

        let term_months = terms.term_months;
        let monthly_rate = terms.annual_rate.periodic_rate(self.config.periodic_rate_scale);
        let rule = self.principal_rule(terms, monthly_rate)?;

        let mut installments = Vec::new();
        let mut balance = terms.principal;

        for number in 1..=term_months {
            let interest = self.periodic_interest(balance, monthly_rate)?;

            // the last installment closes the loan; earlier ones never overdraw it
            let principal_portion = if number == term_months {
                balance
            } else {
                rule.portion(interest)?.min(balance)
            };

            let total = principal_portion
                .checked_add(interest)
                .ok_or_else(|| ScheduleError::overflow("installment total"))?;
            let remaining = balance
                .checked_sub(principal_portion)
                .ok_or_else(|| ScheduleError::overflow("remaining balance"))?;

            let due_date = match start_date {
                Some(start) => Some(due_date(start, number)?),
                None => None,
            };

            log::trace!(
                "installment {}: principal {}, interest {}, remaining {}",
                number,
                principal_portion,
                interest,
                remaining
            );

            installments.push(InstallmentEntry {
                installment_number: number,
                due_date,
                beginning_balance: balance,
                principal_amount: principal_portion,
                interest_amount: interest,
                total_amount: total,
                remaining_balance: remaining,
            });

            balance = remaining;
        }

        Ok(installments)
    }

    fn principal_rule(&self, terms: &LoanTerms, monthly_rate: Decimal) -> Result<PrincipalRule> {
        let rule = match terms.method {
            RepaymentMethod::EqualPrincipalAndInterest => PrincipalRule::Annuity {
                payment: self.level_payment(terms.principal, monthly_rate, terms.term_months)?,
            },
            RepaymentMethod::EqualPrincipal => PrincipalRule::Level {
                amount: self.equal_share(terms.principal, terms.term_months)?,
            },
            RepaymentMethod::Bullet => PrincipalRule::Balloon,
        };
        Ok(rule)
    }

    /// PMT = P * r * (1 + r)^n / ((1 + r)^n - 1), rounded once
    fn level_payment(&self, principal: Money, monthly_rate: Decimal, months: u32) -> Result<Money> {
        if monthly_rate.is_zero() {
            return self.equal_share(principal, months);
        }

        let compound = compound_factor(monthly_rate, months)?;
        let denominator = compound - Decimal::ONE;

        // rate too small to move (1 + r)^n at decimal precision
        if denominator.is_zero() {
            return self.equal_share(principal, months);
        }

        let payment = principal
            .as_decimal()
            .checked_mul(monthly_rate)
            .and_then(|x| x.checked_mul(compound))
            .and_then(|x| x.checked_div(denominator))
            .ok_or_else(|| ScheduleError::overflow("level payment"))?;

        Ok(Money::from_decimal(payment).round_to(self.config.currency_scale))
    }

    fn equal_share(&self, principal: Money, months: u32) -> Result<Money> {
        principal
            .checked_split(months)
            .map(|share| share.round_to(self.config.currency_scale))
            .ok_or_else(|| ScheduleError::overflow("equal principal share"))
    }

    fn periodic_interest(&self, balance: Money, monthly_rate: Decimal) -> Result<Money> {
        balance
            .checked_mul(monthly_rate)
            .map(|interest| interest.round_to(self.config.currency_scale))
            .ok_or_else(|| ScheduleError::overflow("periodic interest"))
    }
}

/// (1 + r)^n by repeated multiplication
fn compound_factor(rate: Decimal, periods: u32) -> Result<Decimal> {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor
            .checked_mul(base)
            .ok_or_else(|| ScheduleError::overflow("compound factor"))?;
    }
    Ok(factor)
}

fn due_date(start: NaiveDate, months: u32) -> Result<NaiveDate> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| ScheduleError::InvalidDate {
            message: format!("{} plus {} months is out of range", start, months),
        })
}

/// full schedule with the default (won) configuration
pub fn generate_schedule(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    method: RepaymentMethod,
) -> Result<Vec<InstallmentEntry>> {
    let terms = LoanTerms::new(principal, annual_rate, term_months, method);
    Ok(AmortizationSchedule::generate(&terms)?.into_installments())
}

/// first installment's total with the default configuration
pub fn monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    method: RepaymentMethod,
) -> Result<Money> {
    let terms = LoanTerms::new(principal, annual_rate, term_months, method);
    AmortizationEngine::default().monthly_payment(&terms)
}

pub fn total_interest(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    method: RepaymentMethod,
) -> Result<Money> {
    let terms = LoanTerms::new(principal, annual_rate, term_months, method);
    AmortizationEngine::default().total_interest(&terms)
}

pub fn total_repayment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    method: RepaymentMethod,
) -> Result<Money> {
    let terms = LoanTerms::new(principal, annual_rate, term_months, method);
    AmortizationEngine::default().total_repayment(&terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const PRINCIPAL: i64 = 10_000_000;

    fn simulation_rate() -> Rate {
        Rate::from_percent(dec!(5.5))
    }

    fn schedule(principal: i64, rate: Rate, term: u32, method: RepaymentMethod) -> AmortizationSchedule {
        AmortizationSchedule::generate(&LoanTerms::new(Money::from_major(principal), rate, term, method))
            .unwrap()
    }

    fn assert_invariants(schedule: &AmortizationSchedule) {
        let terms = schedule.terms;
        assert_eq!(schedule.len(), terms.term_months as usize);

        let principal_sum: Money = schedule.iter().map(|e| e.principal_amount).sum();
        assert_eq!(principal_sum, terms.principal);

        let interest_sum: Money = schedule.iter().map(|e| e.interest_amount).sum();
        assert_eq!(schedule.total_interest, interest_sum);
        assert_eq!(schedule.total_repayment, terms.principal + interest_sum);

        let mut previous = terms.principal;
        for (index, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.installment_number, index as u32 + 1);
            assert_eq!(entry.beginning_balance, previous);
            assert_eq!(entry.total_amount, entry.principal_amount + entry.interest_amount);
            assert!(!entry.principal_amount.is_negative());
            assert!(!entry.interest_amount.is_negative());
            assert!(entry.remaining_balance <= previous);
            previous = entry.remaining_balance;
        }
        assert_eq!(previous, Money::ZERO);
    }

    #[test]
    fn test_equal_principal_and_interest_schedule() {
        let schedule = schedule(PRINCIPAL, simulation_rate(), 12, RepaymentMethod::EqualPrincipalAndInterest);
        assert_invariants(&schedule);

        let first = schedule.get_installment(1).unwrap();
        assert_eq!(first.interest_amount, Money::from_major(45_833));
        assert_eq!(first.principal_amount, Money::from_major(812_535));
        assert_eq!(first.total_amount, Money::from_major(858_368));

        // level payment on every installment but the last
        for entry in &schedule.installments[..11] {
            assert_eq!(entry.total_amount, Money::from_major(858_368));
        }

        let last = schedule.get_installment(12).unwrap();
        assert_eq!(last.principal_amount, Money::from_major(854_449));
        assert_eq!(last.interest_amount, Money::from_major(3_916));
        assert_eq!(last.total_amount, Money::from_major(858_365));
        assert_eq!(last.remaining_balance, Money::ZERO);

        assert_eq!(schedule.total_interest, Money::from_major(300_413));
    }

    #[test]
    fn test_bullet_schedule() {
        let schedule = schedule(PRINCIPAL, simulation_rate(), 12, RepaymentMethod::Bullet);
        assert_invariants(&schedule);

        for entry in &schedule.installments[..11] {
            assert_eq!(entry.principal_amount, Money::ZERO);
            assert_eq!(entry.interest_amount, Money::from_major(45_833));
            assert_eq!(entry.remaining_balance, Money::from_major(PRINCIPAL));
        }

        let last = schedule.get_installment(12).unwrap();
        assert_eq!(last.principal_amount, Money::from_major(PRINCIPAL));
        assert_eq!(last.total_amount, Money::from_major(10_045_833));
        assert_eq!(last.remaining_balance, Money::ZERO);
        assert_eq!(schedule.final_payment(), Money::from_major(10_045_833));
        assert_eq!(schedule.total_interest, Money::from_major(549_996));
    }

    #[test]
    fn test_equal_principal_schedule() {
        let schedule = schedule(PRINCIPAL, simulation_rate(), 12, RepaymentMethod::EqualPrincipal);
        assert_invariants(&schedule);

        for entry in &schedule.installments[..11] {
            assert_eq!(entry.principal_amount, Money::from_major(833_333));
        }
        let last = schedule.get_installment(12).unwrap();
        assert_eq!(last.principal_amount, Money::from_major(833_337));
        assert_eq!(last.interest_amount, Money::from_major(3_819));

        for pair in schedule.installments.windows(2) {
            assert!(pair[1].interest_amount < pair[0].interest_amount);
            assert!(pair[1].total_amount <= pair[0].total_amount);
        }

        assert_eq!(schedule.representative_payment(), Money::from_major(879_166));
        assert_eq!(schedule.total_interest, Money::from_major(297_916));
    }

    #[test]
    fn test_single_installment() {
        for method in RepaymentMethod::ALL {
            let schedule = schedule(PRINCIPAL, simulation_rate(), 1, method);
            assert_invariants(&schedule);

            let only = schedule.get_installment(1).unwrap();
            assert_eq!(only.principal_amount, Money::from_major(PRINCIPAL));
            assert_eq!(only.interest_amount, Money::from_major(45_833));
            assert_eq!(only.remaining_balance, Money::ZERO);
        }
    }

    #[test]
    fn test_negative_principal_rejected() {
        for method in RepaymentMethod::ALL {
            let result = generate_schedule(Money::from_major(-1), simulation_rate(), 12, method);
            assert!(matches!(
                result,
                Err(ScheduleError::InvalidParameter { parameter: "principal", .. })
            ));
        }
    }

    #[test]
    fn test_zero_term_and_negative_rate_rejected() {
        let result = generate_schedule(
            Money::from_major(PRINCIPAL),
            simulation_rate(),
            0,
            RepaymentMethod::Bullet,
        );
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidParameter { parameter: "term_months", .. })
        ));

        let result = total_interest(
            Money::from_major(PRINCIPAL),
            Rate::from_percent(dec!(-0.5)),
            12,
            RepaymentMethod::EqualPrincipal,
        );
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidParameter { parameter: "annual_rate", .. })
        ));
    }

    #[test]
    fn test_zero_rate_degenerates_to_equal_principal() {
        let level = schedule(1_000_000, Rate::ZERO, 3, RepaymentMethod::EqualPrincipalAndInterest);
        let equal = schedule(1_000_000, Rate::ZERO, 3, RepaymentMethod::EqualPrincipal);
        assert_invariants(&level);

        let principals: Vec<Money> = level.iter().map(|e| e.principal_amount).collect();
        assert_eq!(
            principals,
            vec![
                Money::from_major(333_333),
                Money::from_major(333_333),
                Money::from_major(333_334),
            ]
        );
        assert_eq!(
            principals,
            equal.iter().map(|e| e.principal_amount).collect::<Vec<_>>()
        );

        for method in RepaymentMethod::ALL {
            let schedule = schedule(1_000_000, Rate::ZERO, 24, method);
            assert!(schedule.iter().all(|e| e.interest_amount.is_zero()));
            assert_eq!(schedule.total_interest, Money::ZERO);
            assert_eq!(schedule.total_repayment, Money::from_major(1_000_000));
        }
    }

    #[test]
    fn test_invariants_across_inputs() {
        let rates = [dec!(0), dec!(0.1), dec!(3.75), dec!(5.5), dec!(19.9)];
        let principals = [0, 1, 7, 999_999, 10_000_000, 300_000_000];
        let terms = [1, 2, 7, 12, 36, 360];

        for method in RepaymentMethod::ALL {
            for rate in rates {
                for principal in principals {
                    for term in terms {
                        let schedule = schedule(principal, Rate::from_percent(rate), term, method);
                        assert_invariants(&schedule);
                    }
                }
            }
        }
    }

    #[test]
    fn test_small_principal_never_overdraws_balance() {
        // round(5 / 7) = 1, so six level shares would exceed the principal
        let schedule = schedule(5, Rate::ZERO, 7, RepaymentMethod::EqualPrincipal);
        assert_invariants(&schedule);

        let principals: Vec<Money> = schedule.iter().map(|e| e.principal_amount).collect();
        let expected: Vec<Money> = [1, 1, 1, 1, 1, 0, 0].into_iter().map(Money::from_major).collect();
        assert_eq!(principals, expected);
    }

    #[test]
    fn test_scalar_entry_points() {
        let principal = Money::from_major(PRINCIPAL);
        let rate = simulation_rate();

        let method = RepaymentMethod::EqualPrincipalAndInterest;
        assert_eq!(monthly_payment(principal, rate, 12, method).unwrap(), Money::from_major(858_368));
        assert_eq!(total_interest(principal, rate, 12, method).unwrap(), Money::from_major(300_413));
        assert_eq!(total_repayment(principal, rate, 12, method).unwrap(), Money::from_major(10_300_413));

        // first installment only, not constant across the schedule
        assert_eq!(
            monthly_payment(principal, rate, 12, RepaymentMethod::EqualPrincipal).unwrap(),
            Money::from_major(879_166)
        );
        assert_eq!(
            monthly_payment(principal, rate, 12, RepaymentMethod::Bullet).unwrap(),
            Money::from_major(45_833)
        );
    }

    #[test]
    fn test_deterministic_output() {
        let terms = LoanTerms::new(
            Money::from_major(30_000_000),
            Rate::from_percent(dec!(4.2)),
            36,
            RepaymentMethod::EqualPrincipalAndInterest,
        );
        let engine = AmortizationEngine::default();
        assert_eq!(engine.generate_schedule(&terms).unwrap(), engine.generate_schedule(&terms).unwrap());
        assert_eq!(engine.total_interest(&terms).unwrap(), Money::from_major(1_982_077));
    }

    #[test]
    fn test_ledger_precision() {
        let engine = AmortizationEngine::new(ScheduleConfig::ledger()).unwrap();
        let terms = LoanTerms::new(
            Money::from_major(PRINCIPAL),
            Rate::from_percent(dec!(5.0)),
            12,
            RepaymentMethod::EqualPrincipalAndInterest,
        );
        let schedule = engine.generate_schedule(&terms).unwrap();
        assert_invariants(&schedule);

        assert_eq!(schedule.representative_payment(), Money::from_decimal(dec!(856074.82)));
        assert!(schedule.iter().all(|e| e.interest_amount.fits_scale(2)));
        assert!(schedule.iter().all(|e| e.principal_amount.fits_scale(2)));
    }

    #[test]
    fn test_dated_schedule() {
        let engine = AmortizationEngine::default();
        let terms = LoanTerms::new(
            Money::from_major(PRINCIPAL),
            simulation_rate(),
            12,
            RepaymentMethod::EqualPrincipalAndInterest,
        );

        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let schedule = engine.generate_dated_schedule(&terms, start).unwrap();
        for entry in schedule.iter() {
            let expected = start.checked_add_months(Months::new(entry.installment_number)).unwrap();
            assert_eq!(entry.due_date, Some(expected));
        }
        assert_eq!(schedule.get_installment(12).unwrap().due_date, NaiveDate::from_ymd_opt(2027, 1, 1));

        // month-end start clamps to the end of shorter months
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let schedule = engine.generate_dated_schedule(&terms, start).unwrap();
        assert_eq!(schedule.get_installment(1).unwrap().due_date, NaiveDate::from_ymd_opt(2026, 2, 28));
        assert_eq!(schedule.get_installment(2).unwrap().due_date, NaiveDate::from_ymd_opt(2026, 3, 31));
        assert_eq!(schedule.get_installment(3).unwrap().due_date, NaiveDate::from_ymd_opt(2026, 4, 30));

        // undated schedules carry no dates
        let undated = engine.generate_schedule(&terms).unwrap();
        assert!(undated.iter().all(|e| e.due_date.is_none()));
    }

    #[test]
    fn test_dated_schedule_out_of_range() {
        let terms = LoanTerms::new(Money::from_major(1_000), Rate::ZERO, 24, RepaymentMethod::Bullet);
        let result = AmortizationEngine::default().generate_dated_schedule(&terms, NaiveDate::MAX);
        assert!(matches!(result, Err(ScheduleError::InvalidDate { .. })));
    }

    #[test]
    fn test_overflow_is_reported() {
        // (1 + 1/12)^1200 is far beyond decimal range
        let result = generate_schedule(
            Money::from_major(1),
            Rate::from_percent(dec!(100)),
            1200,
            RepaymentMethod::EqualPrincipalAndInterest,
        );
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::ArithmeticOverflow {
                operation: "compound factor"
            }
        );

        let result = generate_schedule(
            Money::from_decimal(Decimal::MAX),
            simulation_rate(),
            12,
            RepaymentMethod::Bullet,
        );
        assert!(matches!(result, Err(ScheduleError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_extreme_negative_rate_rejected() {
        let result = generate_schedule(
            Money::from_major(1_000),
            Rate::from_decimal(Decimal::MIN),
            12,
            RepaymentMethod::Bullet,
        );
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidParameter { parameter: "annual_rate", .. })
        ));
    }

    #[test]
    fn test_balance_lookup() {
        let schedule = schedule(PRINCIPAL, simulation_rate(), 12, RepaymentMethod::EqualPrincipal);
        assert_eq!(schedule.balance_after(0), Money::from_major(PRINCIPAL));
        assert_eq!(schedule.balance_after(1), Money::from_major(9_166_667));
        assert_eq!(schedule.balance_after(12), Money::ZERO);
        assert!(schedule.get_installment(0).is_none());
        assert!(schedule.get_installment(13).is_none());
    }
}
