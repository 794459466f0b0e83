use std::fs::File;
use std::io::BufWriter;

use crate::api::{ApiClient, HttpTransport};
use crate::cli::{Cli, Prompter, resolve_request};
use crate::error::AppError;
use crate::export::export;

/// List every QR code, fetch its statistics, and write the CSV
pub(crate) fn run(cli: &Cli, prompter: &mut dyn Prompter) -> Result<(), AppError> {
    log::info!("QR Code Generator Statistics Export Tool");

    let request = resolve_request(cli, prompter)?;

    let transport = HttpTransport::new(cli.base_url(), &request.api_key);
    let mut client = ApiClient::new(transport, cli.client_options());

    log::info!("Fetching QR Codes...");
    let listing = client.list_items()?;
    if listing.truncated {
        println!(
            "Pagination safeguard triggered after {} pages; exporting the QR codes fetched so far.",
            listing.pages
        );
    }
    println!("Found {} QR Codes.", listing.items.len());

    let path = cli.output();
    let file = File::create(&path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let summary = export(&mut writer, &request.mode, &listing.items, &mut client)?;

    println!(
        "Export complete! {} rows for {} QR codes saved to {}",
        summary.rows,
        summary.items,
        path.display()
    );
    Ok(())
}
