use quotedeck_core::DashboardClient;

use crate::error::CliError;

pub async fn run(client: &DashboardClient) -> Result<(), CliError> {
    let ack = client.train_models().await?;
    println!("training started");
    tracing::debug!(ack = %ack, "train ack payload");
    Ok(())
}
