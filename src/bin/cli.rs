//! KPI Engine CLI
//!
//! Command-line front end for the KPI registry and evaluation pipeline.
//! One-shot evaluation via `calc`, plus an interactive mode that drives an
//! evaluation session the way the web widget does (select, enter inputs,
//! calculate, reset).

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use kpi_engine::models::{CalculationResult, KpiDefinition};
use kpi_engine::registry;
use kpi_engine::services::{evaluator, EvaluationSession};

#[derive(Parser)]
#[command(name = "kpi-cli", version, about = "Maintenance KPI calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available KPIs in display order
    List,
    /// Show one KPI definition and its input fields
    Show {
        /// KPI id (e.g. "mtbf")
        id: String,
    },
    /// Evaluate a KPI from key=value input pairs
    Calc {
        /// KPI id (e.g. "mtbf")
        id: String,
        /// Raw input values, e.g. -i operatingTime=1000 -i failures=4
        #[arg(short = 'i', long = "input", value_name = "ID=VALUE")]
        inputs: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: select a KPI, enter values, calculate, reset
    Interactive {
        /// KPI to start on (defaults to the first in the registry)
        #[arg(long)]
        kpi: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => list(),
        Command::Show { id } => show(&id),
        Command::Calc { id, inputs, json } => calc(&id, &inputs, json),
        Command::Interactive { kpi } => interactive(kpi.as_deref()),
    }
}

fn list() -> anyhow::Result<()> {
    for def in registry::get_registry().definitions() {
        println!("{:<24} {}", def.id, def.title);
    }
    Ok(())
}

fn lookup(id: &str) -> anyhow::Result<&'static KpiDefinition> {
    registry::get_registry()
        .get(id)
        .with_context(|| format!("unknown KPI '{}'; run `kpi-cli list` for the available ids", id))
}

fn show(id: &str) -> anyhow::Result<()> {
    let def = lookup(id)?;
    println!("{} [{}]", def.title, def.unit);
    println!("{}", def.description);
    println!();
    for input in &def.inputs {
        let unit = input.unit.as_deref().unwrap_or("");
        let placeholder = input.placeholder.as_deref().unwrap_or("");
        println!("  {:<18} {} {}  {}", input.id, input.label, unit, placeholder);
    }
    Ok(())
}

fn calc(id: &str, pairs: &[String], json: bool) -> anyhow::Result<()> {
    let def = lookup(id)?;
    let raw_inputs = parse_pairs(pairs)?;

    match evaluator::evaluate(def, &raw_inputs) {
        Ok(result) => print_result(&result, json),
        Err(err) => bail!("{}", err),
    }
    Ok(())
}

/// Parse `id=value` pairs into the raw input map. Values stay strings; the
/// pipeline owns numeric parsing.
fn parse_pairs(pairs: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut raw_inputs = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid input '{}': expected ID=VALUE", pair);
        };
        raw_inputs.insert(key.trim().to_string(), value.to_string());
    }
    Ok(raw_inputs)
}

fn print_result(result: &CalculationResult, json: bool) {
    if json {
        // Serialization of a plain struct cannot fail
        println!("{}", serde_json::to_string_pretty(result).unwrap_or_default());
    } else {
        println!("{} {}", result.formatted_value, result.unit);
        println!("{}", result.message);
    }
}

fn interactive(start: Option<&str>) -> anyhow::Result<()> {
    let mut session = match start {
        Some(id) => EvaluationSession::for_kpi(id),
        None => EvaluationSession::new(),
    };

    println!("KPI interattivi - digita 'help' per i comandi disponibili.");
    print_selection(&session);

    let stdin = io::stdin();
    loop {
        print!("{}> ", session.kpi_id());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "help" => {
                println!("  list                KPI disponibili");
                println!("  kpi <id>            seleziona un KPI");
                println!("  show                definizione e valori correnti");
                println!("  set <campo> <val>   imposta un valore");
                println!("  calc                esegui il calcolo");
                println!("  reset               azzera la sessione");
                println!("  quit                esci");
            }
            "list" => list()?,
            "kpi" => match parts.next() {
                Some(id) => {
                    session.select(id);
                    print_selection(&session);
                }
                None => println!("uso: kpi <id>"),
            },
            "show" => {
                show(session.kpi_id())?;
                for input in &session.definition().inputs {
                    let value = session.raw_input(&input.id).unwrap_or("");
                    println!("  {} = {}", input.id, value);
                }
            }
            "set" => match (parts.next(), parts.next()) {
                (Some(field), Some(value)) => session.set_input(field, value),
                _ => println!("uso: set <campo> <valore>"),
            },
            "calc" => {
                session.calculate();
                if let Some(result) = session.result() {
                    print_result(result, false);
                } else if let Some(err) = session.error() {
                    println!("{}", err);
                }
            }
            "reset" => session.reset(),
            "quit" | "exit" => break,
            other => println!("comando sconosciuto '{}'; digita 'help'", other),
        }
    }

    Ok(())
}

fn print_selection(session: &EvaluationSession) {
    let def = session.definition();
    println!("KPI attivo: {} ({})", def.title, def.id);
}
