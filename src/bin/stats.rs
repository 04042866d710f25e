use anyhow::{Context, Result};
use clap::Parser;
use gedchart::{Config, EventKind, Genealogy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gedstats")]
#[command(about = "Summarize the records in a GEDCOM file")]
struct Args {
    /// GEDCOM file to summarize
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.gedchart.log_level)
    ).init();

    let genealogy = Genealogy::from_path(&args.file)
        .with_context(|| format!("Failed to load GEDCOM file: {}", args.file.display()))?;

    let persons = genealogy.persons();
    let families = genealogy.families();

    println!("Record Summary for {}:\n", args.file.display());
    println!("{:-<50}", "");
    println!("{:<30} {:>15}", "Record", "Count");
    println!("{:-<50}", "");
    println!("{:<30} {:>15}", "Persons", persons.len());
    println!("{:<30} {:>15}", "Families", families.len());
    println!(
        "{:<30} {:>15}",
        "Unnamed persons",
        persons.values().filter(|p| p.display_name().is_empty()).count()
    );
    println!(
        "{:<30} {:>15}",
        "Persons without parents",
        persons.values().filter(|p| p.child_family.is_none()).count()
    );
    println!(
        "{:<30} {:>15}",
        "Childless families",
        families.values().filter(|f| f.children.is_empty()).count()
    );
    println!("{:-<50}", "");

    println!("\nEvents by Kind:\n");
    println!("{:-<50}", "");
    for kind in [EventKind::Birth, EventKind::Death, EventKind::Marriage] {
        let count = persons
            .values()
            .flat_map(|p| p.events.iter())
            .filter(|e| e.kind == kind)
            .count();
        println!("{:<30} {:>15}", kind.tag(), count);
    }
    println!("{:-<50}", "");

    let dangling = genealogy.dangling_references();
    if dangling.is_empty() {
        println!("\nAll cross-references resolve.");
    } else {
        println!("\nUnresolved cross-references ({}):", dangling.len());
        for (holder, missing) in &dangling {
            println!("  {} -> {}", holder, missing);
        }
    }

    println!();

    Ok(())
}
