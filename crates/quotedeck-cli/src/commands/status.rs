use quotedeck_core::DashboardClient;

use crate::cli::SymbolArgs;
use crate::error::CliError;

use super::emit_json;

pub async fn run(client: &DashboardClient, args: &SymbolArgs) -> Result<(), CliError> {
    // The status payload is backend-defined and opaque to this layer.
    let status = client.model_status(&args.symbol).await?;
    emit_json(&status)
}
