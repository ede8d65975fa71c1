use anyhow::Result;
use fileops::{export, table::Table};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const OUTPUT: &str = "output.xlsx";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let table = Table::sample();
    export::write_xlsx(&table, OUTPUT)?;
    info!("wrote {}", OUTPUT);

    Ok(())
}
