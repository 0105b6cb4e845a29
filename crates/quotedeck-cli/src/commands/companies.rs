use quotedeck_core::{
    display_symbol, format_currency, format_percent, ChangeDirection, DashboardClient,
};

use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, json: bool) -> Result<(), CliError> {
    let list = client.list_companies().await?;
    if json {
        return emit_json(&list);
    }

    println!("{} companies", list.count);
    println!("{:<10} {:<32} {:>12} {:>9}", "SYMBOL", "NAME", "PRICE", "CHANGE");
    for company in &list.companies {
        let marker = match ChangeDirection::classify(company.daily_change) {
            ChangeDirection::Positive => "▲",
            ChangeDirection::Negative => "▼",
            ChangeDirection::Neutral => " ",
        };
        println!(
            "{:<10} {:<32} {:>12} {:>8}{marker}",
            display_symbol(&company.symbol),
            company.name,
            format_currency(company.current_price),
            format_percent(company.daily_change, 2),
        );
    }
    Ok(())
}
