use quotedeck_core::DashboardClient;

use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, json: bool) -> Result<(), CliError> {
    let health = client.health().await?;
    if json {
        return emit_json(&health);
    }

    match health.get("status").and_then(|status| status.as_str()) {
        Some(status) => println!("backend is {status}"),
        None => println!("backend answered: {health}"),
    }
    Ok(())
}
