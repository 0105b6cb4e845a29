use quotedeck_core::{correlation_cells, display_symbol, DashboardClient};

use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, json: bool) -> Result<(), CliError> {
    let matrix = client.correlation_matrix().await?;
    if json {
        return emit_json(&matrix);
    }

    let cells = correlation_cells(&matrix)?;
    let symbols = cells.symbols();

    print!("{:<10}", "");
    for symbol in symbols {
        print!("{:>8}", display_symbol(symbol));
    }
    println!();

    for row in symbols {
        print!("{:<10}", display_symbol(row));
        for col in symbols {
            match cells.value(row, col) {
                Some(value) => print!("{value:>8.2}"),
                None => print!("{:>8}", "-"),
            }
        }
        println!();
    }
    Ok(())
}
