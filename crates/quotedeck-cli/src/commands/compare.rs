use quotedeck_core::{
    comparison_overlay, display_symbol, format_date, format_number, format_percent,
    DashboardClient,
};

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &CompareArgs, json: bool) -> Result<(), CliError> {
    let result = client.compare(&args.symbol1, &args.symbol2).await?;
    if json {
        return emit_json(&result);
    }

    let overlay = comparison_overlay(&result)?;
    let [first, second] = &overlay.symbols;

    println!(
        "{} vs {} ({} to {})",
        display_symbol(first),
        display_symbol(second),
        format_date(&result.period.start),
        format_date(&result.period.end)
    );
    println!(
        "  returns correlation {}",
        format_number(Some(result.correlation.returns), 4)
    );
    for (symbol, perf) in &result.performance {
        println!(
            "  {:<10} total return {}  volatility {}",
            display_symbol(symbol),
            format_percent(Some(perf.total_return), 2),
            format_number(Some(perf.volatility), 2),
        );
    }

    println!(
        "{:<14} {:>12} {:>12}",
        "DATE",
        display_symbol(first),
        display_symbol(second)
    );
    for row in &overlay.rows {
        println!(
            "{:<14} {:>12} {:>12}",
            format_date(&row.date),
            format_number(Some(row.first), 2),
            format_number(Some(row.second), 2),
        );
    }
    Ok(())
}
