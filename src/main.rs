use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::Level;

use tabula::{
    error::Result,
    io::{parser::parse_instance_file, writer::write_solutions},
    solver::{
        config::{SolverConfig, ValStrategy, VarStrategy},
        engine::CspSolver,
        stats::render_stats_table,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Finite-domain solver for binary extensional CSPs", long_about = None)]
struct Args {
    /// Instance file in the textual CSP format.
    instance: PathBuf,

    /// Maximum solving time in seconds.
    #[arg(short = 't', long, default_value_t = 300)]
    max_time: u64,

    /// Stop at the first solution found.
    #[arg(short = 'f', long)]
    first: bool,

    /// Variable selection strategy: mrv, degree, random.
    #[arg(long, default_value = "mrv")]
    var_strategy: String,

    /// Value ordering strategy: lcv, lexicographic, random.
    #[arg(long, default_value = "lcv")]
    val_strategy: String,

    /// Disable AC-3 preprocessing.
    #[arg(long)]
    no_ac3: bool,

    /// Disable forward checking.
    #[arg(long)]
    no_forward_checking: bool,

    /// Disable AC-3 at each search node.
    #[arg(long)]
    no_node_ac3: bool,

    /// Output file path; defaults to the instance path with a .sol
    /// extension.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Fixed seed for the random strategies.
    #[arg(long)]
    seed: Option<u64>,

    /// Show the detailed search trace.
    #[arg(short = 'V', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = SolverConfig {
        max_time: args.max_time,
        first_solution_only: args.first,
        var_strategy: VarStrategy::from_name(&args.var_strategy),
        val_strategy: ValStrategy::from_name(&args.val_strategy),
        use_ac3: !args.no_ac3,
        use_forward_checking: !args.no_forward_checking,
        ac3_at_each_node: !args.no_ac3 && !args.no_node_ac3,
        verbose: args.verbose,
        seed: args.seed,
    };

    let instance = parse_instance_file(&args.instance)?;
    println!(
        "Parsed {}: {} variables, {} constraints",
        args.instance.display(),
        instance.num_variables(),
        instance.constraints().len()
    );

    let report = CspSolver::new(instance.clone(), config.clone()).solve();

    println!("Resolution status: {}", report.status);
    println!("{}", render_stats_table(&report));

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.instance.with_extension("sol"));
    write_solutions(&output, &instance, &config, &report)?;
    println!("Solutions saved to: {}", output.display());

    Ok(())
}
