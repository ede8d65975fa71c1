use anyhow::Result;
use fileops::read;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const INPUT: &str = "sample_data.csv";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    println!("Reading csv file>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>\n");
    let records = read::read_records(INPUT)?;
    for record in &records {
        println!("{:?}", record);
    }
    info!(records = records.len(), "structured pass done");

    println!("\nReading file line by line>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>\n");
    let lines = read::read_lines(INPUT)?;
    for line in &lines {
        println!("{}", line);
    }
    info!(lines = lines.len(), "raw pass done");

    Ok(())
}
