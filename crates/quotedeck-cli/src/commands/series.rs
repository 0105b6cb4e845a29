use quotedeck_core::{chart_rows, display_symbol, format_currency, format_date, DashboardClient};

use crate::cli::SeriesArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &SeriesArgs, json: bool) -> Result<(), CliError> {
    let series = client.series(&args.symbol, Some(args.days)).await?;
    if json {
        return emit_json(&series);
    }

    println!(
        "{} ({}), last {} days",
        series.name,
        display_symbol(&series.symbol),
        series.days
    );
    println!("{:<14} {:>12} {:>12} {:>12}", "DATE", "CLOSE", "MA7", "MA20");
    for row in chart_rows(&series.data) {
        println!(
            "{:<14} {:>12} {:>12} {:>12}",
            format_date(&row.date),
            format_currency(Some(row.close)),
            format_currency(row.ma7),
            format_currency(row.ma20),
        );
    }
    Ok(())
}
