use nagare::prelude::*;
use std::env;
use std::fs;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/graph.json> [path/to/datablock.json]");
        std::process::exit(1);
    }

    let graph_path = &args[1];
    let block_path = args.get(2);

    println!("Loading graph from: {}", graph_path);

    // Load the seed data block
    let block = if let Some(path) = block_path {
        println!("Loading data block from: {}", path);
        let json = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read data block file '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        match serde_json::from_str::<DataBlock>(&json) {
            Ok(block) => block,
            Err(e) => {
                eprintln!("Failed to parse data block '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No data block file provided. Using default demo block.");
        default_block()
    };

    // Run phase
    println!("\nStarting Nagare run...");

    let session = RunSession::new(CommandRegistry::with_defaults());
    let report = match session.run_file(graph_path, block) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Run failed: {}", e);
            std::process::exit(1);
        }
    };

    // Display results
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
    }

    for node in report.failed() {
        println!("\nReport for failed node '{}':", node.name);
        for message in &node.messages {
            println!("{}", message);
        }
        for record in &node.error_records {
            println!("  item: {} type: {} reason: {}", record.item, record.kind, record.reason);
        }
    }

    // Persist the artifact for a viewer
    const TMP_DIR: &str = "tmp";
    if let Err(e) = fs::create_dir_all(TMP_DIR) {
        eprintln!("Failed to create tmp directory: {}", e);
        std::process::exit(1);
    }
    let artifact_path = format!("{}/run_report.bin", TMP_DIR);
    match report.save(&artifact_path) {
        Ok(()) => println!("\n  -> Wrote run report artifact to '{}'", artifact_path),
        Err(e) => {
            eprintln!("Failed to write run report: {}", e);
            std::process::exit(1);
        }
    }

    let failed = report.failed().count();
    let skipped = report.skipped().count();
    println!(
        "\nSummary: {} ok, {} failed, {} skipped",
        report.len() - failed - skipped,
        failed,
        skipped
    );
}

/// Demo data block used when no file is provided, matching the keys the
/// built-in `custom.*` commands read.
fn default_block() -> DataBlock {
    let mut block = DataBlock::new();
    block.insert("who".to_string(), serde_json::json!("a headless run"));
    block.insert("what".to_string(), serde_json::json!("This is Nagare"));
    block.insert("where".to_string(), serde_json::json!("somewhere quiet"));
    block.insert("when".to_string(), serde_json::json!("right now"));
    block
}
