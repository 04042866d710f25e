use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use gedchart::graph::ordinal;
use gedchart::{Config, Genealogy, Traversal, TraversalLimits};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gedchart")]
#[command(about = "Descendant, ancestor and cousin charts from a GEDCOM file")]
struct Args {
    /// Override the configured traversal depth limit (generations)
    #[arg(long, global = true, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a person's descendants as an indented tree
    Descendants { file: PathBuf, id: String },
    /// Print a person's ancestors, father's side above and mother's below
    Ancestors { file: PathBuf, id: String },
    /// Print a person's cousins of the given degree
    Cousins {
        file: PathBuf,
        id: String,
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        degree: i32,
    },
    /// Check whether ID is reached from ANCESTOR's families
    IsDescendant {
        file: PathBuf,
        ancestor: String,
        id: String,
    },
    /// List a person's siblings
    Siblings { file: PathBuf, id: String },
    /// List a person's children across all marriages
    Kids { file: PathBuf, id: String },
    /// Dump every person and family, sorted by id
    List {
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;

    // Logs go to stderr; RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.gedchart.log_level)
    ).init();

    let limits = match args.max_depth {
        Some(depth) => TraversalLimits::max_depth(depth),
        None => config.traversal_limits(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args.command, &config, limits, &mut out)?;
    out.flush()?;

    Ok(())
}

fn load(path: &Path) -> Result<Genealogy> {
    Genealogy::from_path(path)
        .with_context(|| format!("Failed to load GEDCOM file: {}", path.display()))
}

fn run(command: Command, config: &Config, limits: TraversalLimits, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Descendants { file, id } => {
            let genealogy = load(&file)?;
            traversal(&genealogy, config, limits).print_descendants(out, &id, "")?;
        }
        Command::Ancestors { file, id } => {
            let genealogy = load(&file)?;
            traversal(&genealogy, config, limits).print_ancestors(out, &id, "")?;
        }
        Command::Cousins { file, id, degree } => {
            let genealogy = load(&file)?;
            log::info!("Looking up {} cousins of {}", ordinal(degree), id);
            traversal(&genealogy, config, limits).print_cousins(out, &id, degree)?;
        }
        Command::IsDescendant { file, ancestor, id } => {
            let genealogy = load(&file)?;
            let found = traversal(&genealogy, config, limits).is_descendant(&ancestor, &id)?;
            writeln!(out, "{}", found)?;
        }
        Command::Siblings { file, id } => {
            let genealogy = load(&file)?;
            let siblings = traversal(&genealogy, config, limits).siblings(&id)?;
            print_people(out, &genealogy, &siblings)?;
        }
        Command::Kids { file, id } => {
            let genealogy = load(&file)?;
            let kids = traversal(&genealogy, config, limits).kids(&id)?;
            print_people(out, &genealogy, &kids)?;
        }
        Command::List { file, json } => {
            let genealogy = load(&file)?;
            if json {
                writeln!(out, "{}", genealogy.to_json()?)?;
            } else {
                for (id, person) in genealogy.persons() {
                    writeln!(out, "{}: {}", id, person.summary())?;
                }
                for (id, family) in genealogy.families() {
                    writeln!(out, "{}: {}", id, family.summary())?;
                }
            }
        }
    }
    Ok(())
}

fn traversal<'g>(genealogy: &'g Genealogy, config: &Config, limits: TraversalLimits) -> Traversal<'g> {
    Traversal::new(genealogy)
        .with_limits(limits)
        .with_style(config.chart_style())
}

fn print_people(out: &mut impl Write, genealogy: &Genealogy, ids: &[&str]) -> Result<()> {
    for id in ids {
        writeln!(out, "{}: {}", id, genealogy.person(id)?.display_name())?;
    }
    Ok(())
}
