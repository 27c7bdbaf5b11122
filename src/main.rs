use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use faultsim_config::{Config, CONFIG_FILE_NAME};
use faultsim_report::{write_report_file, ReportFormat};
use faultsim_sim::{Circuit, FaultSimulator, VectorSet};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// faultsim - stuck-at fault simulation for combinational netlists
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a vector set against a netlist and write a coverage report
    Run {
        /// Structural Verilog netlist
        netlist: Option<PathBuf>,

        /// Test vector file
        vectors: Option<PathBuf>,

        /// Report file (defaults to fault_stats.txt)
        output: Option<PathBuf>,

        /// Report file, alternative to the positional argument
        #[arg(short, long, conflicts_with = "output")]
        out: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Omit the detected/undetected fault listings
        #[arg(long)]
        no_fault_lists: bool,

        /// Configuration file (defaults to ./faultsim.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show circuit statistics and netlist diagnostics
    Info {
        /// Structural Verilog netlist
        netlist: PathBuf,
    },

    /// List the generated stuck-at faults
    Faults {
        /// Structural Verilog netlist
        netlist: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            netlist,
            vectors,
            output,
            out,
            format,
            no_fault_lists,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(netlist) = netlist {
                config.run.netlist = Some(netlist);
            }
            if let Some(vectors) = vectors {
                config.run.vectors = Some(vectors);
            }
            if let Some(output) = output.or(out) {
                config.run.output = Some(output);
            }
            if let Some(format) = format {
                config.report.format = format.into();
            }
            if no_fault_lists {
                config.report.fault_lists = false;
            }
            run_simulation(&config)?;
        }

        Commands::Info { netlist } => {
            show_info(&netlist)?;
        }

        Commands::Faults { netlist } => {
            list_faults(&netlist)?;
        }
    }

    Ok(())
}

/// Load an explicit config, or ./faultsim.toml if it exists
fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    info!("Loading configuration from {:?}", path);
    let config = faultsim_config::from_path(&path)
        .with_context(|| format!("Failed to load configuration {:?}", path))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.relative_to(base))
}

/// Parse and build a circuit
fn load_circuit(netlist: &Path) -> Result<Circuit> {
    info!("Parsing Verilog file: {:?}", netlist);
    let desc = faultsim_netlist::from_path(netlist)
        .with_context(|| format!("Failed to parse Verilog file {:?}", netlist))?;
    let circuit = Circuit::from_netlist(&desc)
        .with_context(|| format!("Failed to build circuit from {:?}", netlist))?;
    info!(
        "Parsing complete. Found {} gates, {} inputs, {} outputs.",
        circuit.num_nodes(),
        circuit.primary_inputs().len(),
        circuit.primary_outputs().len()
    );
    Ok(circuit)
}

fn warn_forward_references(circuit: &Circuit) {
    for reference in circuit.forward_references() {
        warn!(
            "Gate '{}' reads '{}' before its driver '{}' is declared; it will evaluate as unknown",
            reference.node, reference.signal, reference.driver
        );
    }
}

fn run_simulation(config: &Config) -> Result<()> {
    let Some(netlist) = config.run.netlist.as_deref() else {
        anyhow::bail!("No netlist given. Pass it on the command line or set run.netlist in {CONFIG_FILE_NAME}.");
    };
    let Some(vectors_path) = config.run.vectors.as_deref() else {
        anyhow::bail!("No test vector file given. Pass it on the command line or set run.vectors in {CONFIG_FILE_NAME}.");
    };
    let output = config.output_path();

    let mut circuit = load_circuit(netlist)?;
    if config.simulation.check_declaration_order {
        warn_forward_references(&circuit);
    }

    info!("Creating collapsed fault list...");
    let fault_count = circuit.generate_faults();
    info!("Fault list created with {} faults.", fault_count);

    info!("Reading test vectors from: {:?}", vectors_path);
    let vectors = VectorSet::from_path(vectors_path)
        .with_context(|| format!("Failed to read test vectors {:?}", vectors_path))?;
    info!(
        "Read {} test vectors with {} inputs each.",
        vectors.len(),
        vectors.width
    );

    let report = FaultSimulator::new(&mut circuit)
        .run(&vectors)
        .context("Fault simulation aborted")?;

    info!(
        "Generating {} statistics file: {:?}",
        config.report.format, output
    );
    write_report_file(output, &report, &config.report_options())
        .with_context(|| format!("Failed to write report {:?}", output))?;

    println!(
        "Fault coverage: {}% ({}/{} faults detected, {} vectors) -> {}",
        report.coverage_display(),
        report.detected,
        report.total_faults,
        report.vectors_applied,
        output.display()
    );
    Ok(())
}

fn show_info(netlist: &Path) -> Result<()> {
    let mut circuit = load_circuit(netlist)?;
    let fault_count = circuit.generate_faults();

    println!("Module:          {}", circuit.name().unwrap_or("<unnamed>"));
    println!("Primary inputs:  {}", circuit.primary_inputs().len());
    println!("Primary outputs: {}", circuit.primary_outputs().len());
    println!("Nodes:           {}", circuit.num_nodes());
    println!("Faults:          {}", fault_count);

    let unresolved = circuit.unresolved_inputs();
    if !unresolved.is_empty() {
        println!();
        println!("Unresolved inputs (evaluate as unknown):");
        for input in &unresolved {
            println!("  - {} <- {}", input.node, input.signal);
        }
    }

    let forward = circuit.forward_references();
    if !forward.is_empty() {
        println!();
        println!("Forward references (driver declared after consumer):");
        for reference in &forward {
            println!(
                "  - {} <- {} (driven by {})",
                reference.node, reference.signal, reference.driver
            );
        }
    }
    Ok(())
}

fn list_faults(netlist: &Path) -> Result<()> {
    let mut circuit = load_circuit(netlist)?;
    circuit.generate_faults();
    for fault in circuit.faults() {
        println!("{}", fault.descriptor());
    }
    Ok(())
}
