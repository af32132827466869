use clap::Parser;
use nagare::prelude::*;
use rand::Rng;

/// A CLI tool to generate random demo graphs wired to the built-in commands
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated graph JSON to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// How many levels of nodes to generate below the start node
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// The maximum number of children per node
    #[arg(long, default_value_t = 3)]
    breadth: usize,

    /// Chance (0-100) that a node binds a skip/error debug command
    #[arg(long, default_value_t = 10)]
    debug_chance: u32,
}

// Pool of benign commands the generator picks from.
const COMMANDS: &[&str] = &[
    "basic.echo",
    "basic.printDatablock",
    "debug.debugDatablock",
    "debug.changeWhy",
];

const DEBUG_COMMANDS: &[&str] = &["debug.invokeSkip", "debug.invokeError"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.breadth == 0 {
        eprintln!("Error: --breadth must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating demo graph (depth {}, breadth up to {})...",
        cli.depth, cli.breadth
    );

    let mut graph = GraphTree::with_root(NodeRecord::new("start", None));
    let mut frontier = vec![graph.root()];
    let mut counter = 0usize;

    for level in 0..cli.depth {
        let mut next_frontier = Vec::new();
        for &parent in &frontier {
            let children = rng.random_range(1..=cli.breadth);
            for _ in 0..children {
                counter += 1;
                let command = if rng.random_range(0..100u32) < cli.debug_chance {
                    DEBUG_COMMANDS[rng.random_range(0..DEBUG_COMMANDS.len())]
                } else {
                    COMMANDS[rng.random_range(0..COMMANDS.len())]
                };
                let mut record = NodeRecord::new(format!("node_{:04}", counter), Some(command));
                record.x = (level as f64 + 1.0) * 180.0;
                record.y = next_frontier.len() as f64 * 120.0;
                record.description = format!("Generated node bound to {}", command);
                let id = graph.add_child(parent, record);
                next_frontier.push(id);
            }
        }
        frontier = next_frontier;
    }

    loader::save_file(&graph, &cli.output)?;

    println!(
        "Successfully generated and saved a {}-node graph to '{}'",
        graph.len(),
        cli.output
    );

    Ok(())
}
