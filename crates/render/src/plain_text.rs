use std::fmt::Write;

use stagebill_billing::Statement;
use stagebill_core::money::usd;

/// Render a prepared statement as the plain-text billing report.
///
/// One line per performance, in statement (invoice) order, followed by the
/// owed total and earned credits. Rendering reads the statement only, so
/// rendering twice yields identical text.
pub fn render_plain_text(statement: &Statement) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Statement for {}", statement.customer());
    for valuation in statement.performances() {
        let _ = writeln!(
            out,
            "  {}: {} ({} seats)",
            valuation.name(),
            usd(valuation.amount()),
            valuation.audience()
        );
    }
    let _ = writeln!(out, "Amount owed is {}", usd(statement.total_amount()));
    let _ = writeln!(out, "You earned {} credits", statement.total_volume_credits());

    out
}
