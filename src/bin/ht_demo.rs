//! Walks a small table through insert/delete/reuse and prints its buckets.

use clap::{Parser, ValueEnum};
use tomb_table::{HashTable, ProbeStrategy, Slot, TableConfig};
use tracing::level_filters::LevelFilter;
use tracing::info;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Probe {
    Linear,
    Double,
}

impl From<Probe> for ProbeStrategy {
    fn from(p: Probe) -> Self {
        match p {
            Probe::Linear => ProbeStrategy::Linear,
            Probe::Double => ProbeStrategy::DoubleHash,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ht-demo", about = "Exercise a tombstone hash table")]
struct Cli {
    /// Number of slots.
    #[arg(long, default_value_t = 53)]
    capacity: usize,

    /// Collision resolution rule.
    #[arg(long, value_enum, default_value_t = Probe::Linear)]
    probe: Probe,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn configure_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(format!("off,tomb_table={level},ht_demo={level}"))
        .init();
}

fn print_buckets(table: &HashTable) {
    for (i, slot) in table.slots() {
        if let Slot::Occupied(entry) = slot {
            println!(
                "bucket[{i}] | key: {} | value: {}",
                entry.key(),
                entry.value()
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    configure_logging(cli.verbose);

    let config = TableConfig::new(cli.capacity).probe(cli.probe.into());
    let mut table = HashTable::with_config(config)?;

    println!("Hash table created:");
    println!("  Size: {}", table.capacity());
    println!("  Count: {}", table.count());

    table.insert("cat", "meow")?;
    table.insert("dog", "woof")?;
    table.insert("mouse", "squeak")?;
    print_buckets(&table);

    table.delete("dog");
    info!(count = table.count(), "Deleted dog.");
    match table.search("dog") {
        Some(v) => println!("dog -> {v}"),
        None => println!("dog -> (not found)"),
    }

    table.insert("bird", "tweet")?;
    println!("After reuse:");
    print_buckets(&table);
    println!("  Count: {}", table.count());

    table.destroy();
    println!("Hash table deleted successfully");
    Ok(())
}
