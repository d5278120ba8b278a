use crate::build_planning::domain::BuildLine;
use rust_decimal::Decimal;

/// Sums `price_at_time * quantity` across the lines with exact decimal
/// arithmetic. Money never goes through floating point here.
pub fn total_price(lines: &[BuildLine]) -> Decimal {
    lines.iter().map(BuildLine::line_total).sum()
}
