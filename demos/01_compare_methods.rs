/// compare the three repayment methods for one loan
use loan_amortization::{compare_methods, Money, Rate, DEFAULT_SIMULATION_RATE_PERCENT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let principal = Money::from_major(30_000_000);
    let rate = Rate::from_percent(DEFAULT_SIMULATION_RATE_PERCENT);

    println!("{:<16} {:>14} {:>14} {:>14}", "method", "first payment", "total interest", "total");
    for summary in compare_methods(principal, rate, 36)? {
        println!(
            "{:<16} {:>14} {:>14} {:>14}",
            summary.method.label(),
            summary.representative_payment,
            summary.total_interest,
            summary.total_repayment,
        );
    }

    Ok(())
}
