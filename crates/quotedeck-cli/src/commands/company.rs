use quotedeck_core::{display_symbol, format_currency, format_percent, DashboardClient};

use crate::cli::SymbolArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &SymbolArgs, json: bool) -> Result<(), CliError> {
    let company = client.company(&args.symbol).await?;
    if json {
        return emit_json(&company);
    }

    println!("{} ({})", company.name, display_symbol(&company.symbol));
    println!("  price  {}", format_currency(company.current_price));
    println!("  change {}", format_percent(company.daily_change, 2));
    Ok(())
}
