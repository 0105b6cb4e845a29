use quotedeck_core::{
    display_symbol, format_currency, format_number, format_percent, format_volume,
    DashboardClient,
};

use crate::cli::SymbolArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &SymbolArgs, json: bool) -> Result<(), CliError> {
    let summary = client.summary(&args.symbol).await?;
    if json {
        return emit_json(&summary);
    }

    println!("{} ({})", summary.name, display_symbol(&summary.symbol));
    println!("  price          {}", format_currency(Some(summary.current_price)));
    println!("  daily return   {}", format_percent(Some(summary.daily_return), 2));
    println!("  52w high       {}", format_currency(Some(summary.high_52w)));
    println!("  52w low        {}", format_currency(Some(summary.low_52w)));
    println!("  avg close      {}", format_currency(Some(summary.avg_close)));
    println!(
        "  avg volume     {}",
        format_volume(Some(summary.avg_volume as f64))
    );
    println!("  volatility     {}", format_number(Some(summary.volatility), 2));
    println!("  momentum       {}", format_number(Some(summary.momentum), 2));
    println!(
        "  trend strength {}",
        format_number(Some(summary.trend_strength), 2)
    );
    Ok(())
}
