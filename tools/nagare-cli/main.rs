use clap::Parser;
use nagare::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A headless runner for node-graph automation flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file
    graph_path: Option<String>,
    /// Optional path to the seed data block JSON file
    data_path: Option<String>,

    /// Stop the whole run as soon as any node fails
    #[arg(short, long)]
    strict: bool,

    /// Give each branch its own copy of the data block instead of sharing one
    #[arg(long)]
    isolate: bool,

    /// Write the run report artifact to this path
    #[arg(short, long)]
    report: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive(&cli);
    } else {
        run_non_interactive(&cli);
    }
}

fn run_graph(
    graph_path: &str,
    data_path: Option<&str>,
    strict: bool,
    isolate: bool,
    report_path: Option<&str>,
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let block = if let Some(path) = data_path {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read data block file '{}': {}", path, e))
        });
        serde_json::from_str::<DataBlock>(&json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to parse data block '{}': {}", path, e))
        })
    } else {
        println!("No data block file provided. Starting from an empty block.");
        DataBlock::new()
    };

    let graph = loader::load_file(graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load graph '{}': {}", graph_path, e))
    });
    let load_duration = load_start.elapsed();

    println!(
        "Loaded graph with {} nodes ({} groups carried through).",
        graph.len(),
        graph.groups().len()
    );

    // --- 2. Run ---
    println!("\nRunning graph (strict: {}, propagate: {})...", strict, !isolate);
    let run_start = Instant::now();

    let session = RunSession::builder(CommandRegistry::with_defaults())
        .strict(strict)
        .propagate(!isolate)
        .build();

    let mut graph = graph;
    let report = session.run_graph(&mut graph, block);
    let run_duration = run_start.elapsed();

    // --- 3. Results ---
    println!("\nRun Finished! {} nodes processed.", report.len());
    for node in &report.nodes {
        let state = if node.error {
            "ERROR"
        } else if node.skip {
            "skipped"
        } else {
            "ok"
        };
        println!("  -> {:<24} {}", node.name, state);
        if node.error {
            for message in &node.messages {
                println!("     {}", message);
            }
        }
    }

    if let Some(path) = report_path {
        report
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save report: {}", e)));
        println!("\nWrote run report artifact to '{}'", path);
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Graph Run:      {:?}", run_duration);
    println!("---------------------------");
    println!("Total:          {:?}", total_duration);
    println!();

    if report.failed().next().is_some() {
        std::process::exit(2);
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: &Cli) {
    let graph_path = cli
        .graph_path
        .as_deref()
        .unwrap_or_else(|| exit_with_error("Graph path is required in non-interactive mode."));

    run_graph(
        graph_path,
        cli.data_path.as_deref(),
        cli.strict,
        cli.isolate,
        cli.report.as_deref(),
    );
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: &Cli) {
    println!("--- Nagare Interactive Mode ---");

    let graph_path = prompt_for_input("Enter graph path", Some("graphs/example.json"));
    let data_path_str = prompt_for_input("Enter data block path (optional)", None);
    let data_path = if data_path_str.is_empty() {
        None
    } else {
        Some(data_path_str)
    };

    let strict = prompt_for_input("Stop the run on the first error? [y/N]", Some("n"))
        .trim()
        .eq_ignore_ascii_case("y");

    run_graph(
        &graph_path,
        data_path.as_deref(),
        strict,
        cli.isolate,
        cli.report.as_deref(),
    );
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
