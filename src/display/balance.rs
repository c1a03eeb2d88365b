//! Company balance display formatting

use crate::models::Money;

/// Format the company balance view: baseline, transaction delta, effective total
pub fn format_company_balance(baseline: Money, effective: Money) -> String {
    let delta = effective - baseline;

    let mut output = String::new();
    output.push_str("Company balance\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("{:>24} {:>12}\n", "Baseline:", format!("{}", baseline)));
    output.push_str(&format!("{:>24} {:>12}\n", "Transactions:", format!("{}", delta)));
    output.push_str(&format!("{:>24} {:>12}\n", "Effective:", format!("{}", effective)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_balance_view() {
        let view = format_company_balance(Money::from_cents(100000), Money::from_cents(125000));
        assert!(view.contains("$1000.00"));
        assert!(view.contains("$250.00"));
        assert!(view.contains("$1250.00"));
    }
}
