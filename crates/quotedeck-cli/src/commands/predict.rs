use quotedeck_core::{
    display_symbol, format_currency, format_date, format_percent, prediction_bands,
    DashboardClient, Trend,
};

use crate::cli::PredictArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &PredictArgs, json: bool) -> Result<(), CliError> {
    let prediction = client.predict(&args.symbol, Some(args.days)).await?;
    if json {
        return emit_json(&prediction);
    }

    let trend = match prediction.summary.trend {
        Trend::Bullish => "bullish",
        Trend::Bearish => "bearish",
        Trend::Neutral => "neutral",
    };
    println!(
        "{}: {}-day forecast ({trend})",
        display_symbol(&prediction.symbol),
        prediction.prediction_days
    );
    println!(
        "  current {}  expected {} ({})",
        format_currency(Some(prediction.current_price)),
        format_currency(Some(prediction.summary.expected_price)),
        format_percent(Some(prediction.summary.expected_return), 2),
    );

    println!(
        "{:<14} {:>12} {:>12} {:>12}",
        "DATE", "LOWER", "PREDICTED", "UPPER"
    );
    for row in prediction_bands(&prediction)? {
        println!(
            "{:<14} {:>12} {:>12} {:>12}",
            format_date(&row.date),
            format_currency(Some(row.lower)),
            format_currency(Some(row.predicted)),
            format_currency(Some(row.upper)),
        );
    }
    Ok(())
}
