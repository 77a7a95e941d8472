use std::time::Duration;

use clap::Parser;
use node_status_mock::records::{changed_or_new, Record};

#[derive(Parser)]
#[command(name = "node-watch")]
#[command(about = "Poll a node-status endpoint and highlight changed records", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:5000/data")]
    url: String,

    /// Seconds between polls
    #[arg(short, long, default_value_t = 5)]
    interval_secs: u64,

    /// Poll once and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let mut previous: Vec<Record> = Vec::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(cli.interval_secs.max(1)));

    loop {
        ticker.tick().await;

        match fetch(&client, &cli.url).await {
            Ok(records) => {
                let changed = changed_or_new(&previous, &records);
                println!("{}", render_table(&records, &changed));
                previous = records;
            }
            Err(e) => {
                eprintln!("Error fetching {}: {}", cli.url, e);
                if cli.once {
                    return Err(e);
                }
            }
        }

        if cli.once {
            return Ok(());
        }
    }
}

async fn fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let res = client.get(url).send().await?.error_for_status()?;
    Ok(res.json().await?)
}

/// One poll's output: count, table with changed rows marked by `*`, summary.
fn render_table(records: &[Record], changed: &[u32]) -> String {
    let mut out = format!("Record count: {}\n", records.len());
    out.push_str(&format!("  {:>4}  {:<10}  {}\n", "ID", "Name", "Status"));
    for record in records {
        let marker = if changed.contains(&record.id) { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:>4}  {:<10}  {}\n",
            marker, record.id, record.name, record.status
        ));
    }
    if changed.is_empty() {
        out.push_str("No changes\n");
    } else {
        out.push_str(&format!("Changed/new ids: {:?}\n", changed));
    }
    out
}
