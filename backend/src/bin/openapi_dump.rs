//! Print the OpenAPI document as pretty JSON.

use std::io::Write;

use color_eyre::eyre::{Context, Result};
use login_backend::doc::api_document;

fn main() -> Result<()> {
    color_eyre::install()?;
    let json = api_document()
        .to_pretty_json()
        .wrap_err("failed to serialise OpenAPI document")?;
    writeln!(std::io::stdout().lock(), "{json}").wrap_err("failed to write to stdout")?;
    Ok(())
}
