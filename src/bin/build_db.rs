// Database build CLI
// Reads an IDS corpus and writes the radical database as JSON

use clap::Parser;
use hanzi_radicals::{read_records, DatabaseBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Build the radical database from an IDS decomposition corpus
#[derive(Parser, Debug)]
#[command(name = "build-db")]
#[command(about = "Parse an IDS corpus into a radical database for the word hunt game", long_about = None)]
struct Args {
    /// Path to the IDS corpus (e.g., ids.txt)
    #[arg(value_name = "IDS_FILE")]
    input: PathBuf,

    /// Output path for the JSON database
    #[arg(short, long, default_value = "radical_database.json")]
    output: PathBuf,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print this many sample accepted characters
    #[arg(short, long, default_value = "10")]
    sample: usize,

    /// Show per-verdict rejection counts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Parsing IDS corpus {}...", args.input.display());
    let reader = BufReader::new(File::open(&args.input)?);
    let records = read_records(reader)?;
    println!("  {} records read", records.len());

    let mut builder = DatabaseBuilder::new()?;
    builder.add_corpus(records);

    if args.verbose {
        println!("  {}", builder.stats());
    } else {
        println!(
            "  {} characters accepted ({} records processed)",
            builder.stats().accepted,
            builder.stats().processed
        );
    }

    let database = builder.finish();

    println!("Writing database to {}...", args.output.display());
    let writer = BufWriter::new(File::create(&args.output)?);
    if args.pretty {
        serde_json::to_writer_pretty(writer, &database)?;
    } else {
        serde_json::to_writer(writer, &database)?;
    }

    if args.sample > 0 {
        println!("\nSample characters:");
        for entry in database.characters.values().take(args.sample) {
            let components: String = entry.components.iter().collect();
            println!(
                "  {}: components={} complexity={}",
                entry.character, components, entry.complexity
            );
        }
    }

    println!("Done.");
    Ok(())
}
