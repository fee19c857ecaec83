/// ledger-precision schedule with due dates
use loan_amortization::chrono::NaiveDate;
use loan_amortization::{AmortizationEngine, LoanTerms, Money, Rate, RepaymentMethod, ScheduleConfig};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = AmortizationEngine::new(ScheduleConfig::ledger())?;
    let terms = LoanTerms::new(
        Money::from_major(10_000_000),
        Rate::from_percent(dec!(5.0)),
        12,
        RepaymentMethod::EqualPrincipal,
    );

    let start = NaiveDate::from_ymd_opt(2026, 1, 31).ok_or("invalid start date")?;
    let schedule = engine.generate_dated_schedule(&terms, start)?;

    for entry in schedule.iter() {
        let due = entry.due_date.map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:>3} {} principal {:>12} interest {:>10} remaining {:>12}",
            entry.installment_number, due, entry.principal_amount, entry.interest_amount, entry.remaining_balance
        );
    }

    Ok(())
}
