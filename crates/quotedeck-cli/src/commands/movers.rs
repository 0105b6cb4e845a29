use quotedeck_core::{
    display_symbol, format_currency, format_date, format_percent, CompanyInfo, DashboardClient,
};

use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, json: bool) -> Result<(), CliError> {
    let movers = client.top_movers().await?;
    if json {
        return emit_json(&movers);
    }

    println!("Top movers for {}", format_date(&movers.date));
    println!("Gainers:");
    print_block(&movers.gainers);
    println!("Losers:");
    print_block(&movers.losers);
    Ok(())
}

fn print_block(companies: &[CompanyInfo]) {
    for company in companies {
        println!(
            "  {:<10} {:<32} {:>12} {:>9}",
            display_symbol(&company.symbol),
            company.name,
            format_currency(company.current_price),
            format_percent(company.daily_change, 2),
        );
    }
}
