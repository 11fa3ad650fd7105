use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use diskfit::entities::Inventory;
use diskfit::probs::exact::{CancellationToken, Outcome, exact_fit};
use diskfit::probs::split::split;
use fit::io;
use fit::io::cli::{Cli, Mode};
use fit::io::discover::discover;
use fit::io::output::{ExactOutput, SplitOutput};
use fit::units::{num_to_human, parse_size};
use log::info;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let capacity = parse_size(&args.capacity)?;
    let inventory = discover(&args.path)?;
    ensure!(
        !inventory.is_empty(),
        "no files found under {}",
        args.path.display()
    );
    info!(
        "[MAIN] discovered {} files totalling {}",
        inventory.len().separate_with_commas(),
        num_to_human(inventory.total_size())
    );

    match args.mode {
        Mode::Split => main_split(&inventory, capacity, args.json_output),
        Mode::Exact => main_exact(&inventory, capacity, args.json_output),
    }
}

fn main_split(inventory: &Inventory, capacity: u64, json_output: Option<PathBuf>) -> Result<()> {
    let solution = split(inventory, capacity)?;

    for bin in &solution.bins {
        for item in bin.items() {
            println!("{}", item.name);
        }
        println!(
            "==> {:.1}% wasted ({})",
            bin.free() as f64 / capacity as f64 * 100.0,
            num_to_human(bin.free())
        );
        println!();
    }
    let n_bins = solution.bins.len() as u64;
    println!(
        "Total {} bins, {:.1}% ({}) wasted",
        n_bins,
        solution.total_waste() as f64 / (n_bins * capacity) as f64 * 100.0,
        num_to_human(solution.total_waste())
    );

    if let Some(path) = json_output {
        io::write_json(&SplitOutput::from(&solution), &path)?;
    }
    Ok(())
}

fn main_exact(inventory: &Inventory, capacity: u64, json_output: Option<PathBuf>) -> Result<()> {
    let token = CancellationToken::new();
    {
        // Ctrl-C unwinds the search, which then reports its best snapshot
        let token = token.clone();
        ctrlc::set_handler(move || token.cancel())
            .context("could not install the interrupt handler")?;
    }

    let solution = exact_fit(inventory, capacity, &token)?;

    println!("{}", outcome_heading(solution.outcome));
    for item in &solution.selection {
        println!("{}", item.name);
    }
    println!(
        "{}/{} (size/waste)",
        num_to_human(solution.total_size()),
        num_to_human(solution.waste())
    );

    if let Some(path) = json_output {
        io::write_json(&ExactOutput::from(&solution), &path)?;
    }
    Ok(())
}

fn outcome_heading(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Exact => "==> Exact fit:",
        Outcome::BestEffort => "==> no exact match, best fit was:",
        Outcome::Interrupted => "==> Interrupted, best fit was:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_headings_match_the_report_format() {
        assert_eq!(outcome_heading(Outcome::Exact), "==> Exact fit:");
        assert_eq!(
            outcome_heading(Outcome::BestEffort),
            "==> no exact match, best fit was:"
        );
        assert_eq!(
            outcome_heading(Outcome::Interrupted),
            "==> Interrupted, best fit was:"
        );
    }
}
