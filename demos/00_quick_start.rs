/// quick start - minimal example to get started
use loan_amortization::{LoanTerms, Money, Rate, RepaymentMethod, ScheduleView};
use loan_amortization::{AmortizationEngine, DEFAULT_SIMULATION_RATE_PERCENT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000,000 won over 12 months at the simulation rate
    let terms = LoanTerms::builder()
        .principal(Money::from_major(10_000_000))
        .rate(Rate::from_percent(DEFAULT_SIMULATION_RATE_PERCENT))
        .term_months(12)
        .method(RepaymentMethod::EqualPrincipalAndInterest)
        .build()?;

    let schedule = AmortizationEngine::default().generate_schedule(&terms)?;

    println!("monthly payment: {}", schedule.representative_payment());
    println!("total interest:  {}", schedule.total_interest);
    println!("total repayment: {}", schedule.total_repayment);

    // print full schedule
    println!("{}", ScheduleView::from_schedule(&schedule).to_json_pretty()?);

    Ok(())
}
