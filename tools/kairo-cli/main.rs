use ahash::AHashMap;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use kairo::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the editor's export format and are only used here
// for conversion.

#[derive(Deserialize)]
struct RawSheet {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    nodes: Vec<RawSheetNode>,
    #[serde(default)]
    edges: Vec<RawSheetEdge>,
}

#[derive(Deserialize)]
struct RawSheetNode {
    id: String,
    #[serde(alias = "type")]
    kind: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "circuitId", alias = "circuitID")]
    circuit: Option<String>,
}

#[derive(Deserialize)]
struct RawSheetEdge {
    #[serde(default)]
    id: Option<String>,
    source: String,
    target: String,
}

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    /// The editor export format (kind/source/target fields)
    Editor,
    /// The serialized canonical circuit model
    Canonical,
}

// --- Converter Implementation ---
// This implements the conversion from the raw editor model to kairo's
// canonical Circuit.

impl IntoCircuit for RawSheet {
    fn into_circuit(self) -> Result<Circuit, ConversionError> {
        let mut circuit = Circuit::new(
            self.id.unwrap_or_else(|| "imported".to_string()),
            self.title.unwrap_or_else(|| "Imported circuit".to_string()),
        );

        for node in self.nodes {
            let title = node.title.unwrap_or_default();
            let converted = match node.kind.to_ascii_lowercase().as_str() {
                "input" => Node::input(node.id, title),
                "output" => Node::output(node.id, title),
                "and" => Node::and(node.id),
                "or" => Node::or(node.id),
                "not" => Node::not(node.id),
                "circuit" => match node.circuit {
                    Some(referenced) => Node::circuit(node.id, referenced),
                    None => {
                        return Err(ConversionError::Invalid(format!(
                            "circuit node '{}' is missing its referenced circuit ID",
                            node.id
                        )));
                    }
                },
                other => {
                    return Err(ConversionError::Invalid(format!(
                        "node '{}' has unknown kind '{}'",
                        node.id, other
                    )));
                }
            };
            circuit.nodes.push(converted);
        }

        for (index, edge) in self.edges.into_iter().enumerate() {
            let id = edge.id.unwrap_or_else(|| format!("edge-{index}"));
            circuit.edges.push(Edge::new(id, edge.source, edge.target));
        }

        Ok(circuit)
    }
}

/// A boolean logic circuit validation and evaluation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the circuit JSON file
    circuit_path: Option<String>,
    /// Optional path to the input values JSON file (an object mapping
    /// input node IDs to booleans)
    inputs_path: Option<String>,

    /// The format of the circuit file
    #[arg(short, long, value_enum)]
    format: Option<FormatCli>,

    /// Validate the circuit and exit without evaluating
    #[arg(long)]
    validate: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_circuit(
    circuit_path: String,
    inputs_path: Option<String>,
    format: FormatCli,
    validate_only: bool,
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let circuit_json = fs::read_to_string(&circuit_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read circuit file '{}': {}",
            &circuit_path, e
        ))
    });
    let inputs_json = inputs_path.as_ref().map(|path| {
        fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read input values file '{}': {}",
                path, e
            ))
        })
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let parse_start = Instant::now();
    let circuit = match format {
        FormatCli::Editor => {
            let raw: RawSheet = serde_json::from_str(&circuit_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse circuit JSON: {}", e))
            });
            raw.into_circuit()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert circuit: {}", e)))
        }
        FormatCli::Canonical => serde_json::from_str::<Circuit>(&circuit_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse circuit JSON: {}", e))),
    };
    let parse_duration = parse_start.elapsed();

    println!(
        "\nLoaded circuit '{}' ({} nodes, {} edges)",
        circuit.title,
        circuit.node_count(),
        circuit.edge_count()
    );

    // --- 3. Validation ---
    let validate_start = Instant::now();
    match circuit.validate() {
        Ok(()) => println!("Validation passed."),
        Err(e) => exit_with_error(&format!("Validation failed: {}", e)),
    }
    let validate_duration = validate_start.elapsed();

    if validate_only {
        println!("\n--- Performance Summary ---");
        println!("File Loading:    {:?}", load_duration);
        println!("Parsing:         {:?}", parse_duration);
        println!("Validation:      {:?}", validate_duration);
        println!("---------------------------");
        println!("Total Execution: {:?}", total_start.elapsed());
        return;
    }

    // --- 4. Input Values ---
    let input_values: Vec<InputNodeValue> = match inputs_json {
        Some(json) => {
            let bindings: AHashMap<String, bool> = serde_json::from_str(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse input values JSON: {}", e))
            });
            bindings
                .into_iter()
                .map(|(node_id, value)| InputNodeValue::new(node_id, value))
                .collect()
        }
        None => {
            println!("No input values file provided. Driving every input with false.");
            circuit
                .nodes
                .iter()
                .filter(|n| n.is_input())
                .map(|n| InputNodeValue::new(n.id(), false))
                .collect()
        }
    };

    // --- 5. Evaluation ---
    println!("\nRunning Evaluation...");
    let eval_start = Instant::now();
    let evaluator = Evaluator::new(&circuit);
    let outputs = evaluator
        .try_eval(&input_values)
        .unwrap_or_else(|e| exit_with_error(&format!("Evaluation failed: {}", e)));
    let eval_duration = eval_start.elapsed();

    // --- 6. Results and Summary ---
    println!("\nEvaluation Finished!");
    if outputs.is_empty() {
        println!("  -> Circuit has no output nodes");
    }
    for output in &outputs {
        let title = circuit
            .node(&output.node_id)
            .and_then(|n| n.title())
            .unwrap_or(output.node_id.as_str());
        println!("  -> {} = {}", title, output.value);
    }

    let kind_counts = circuit
        .nodes
        .iter()
        .map(|n| n.kind_name())
        .counts()
        .into_iter()
        .sorted()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .join(", ");

    println!("\n--- Circuit Summary ---");
    println!("Nodes:  {} ({})", circuit.node_count(), kind_counts);
    println!("Edges:  {}", circuit.edge_count());
    println!("Inputs: {}", input_values.len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Parsing:         {:?}", parse_duration);
    println!("Validation:      {:?}", validate_duration);
    println!("Evaluation:      {:?}", eval_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_start.elapsed());
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let circuit_path = cli.circuit_path.unwrap_or_else(|| {
        exit_with_error("Circuit path is required in non-interactive mode.");
    });
    let format = cli.format.unwrap_or(FormatCli::Editor);

    run_circuit(circuit_path, cli.inputs_path, format, cli.validate);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Kairo Interactive Mode ---");

    let circuit_path = prompt_for_input("Enter circuit path", Some("data/circuit.json"));
    let inputs_path_str = prompt_for_input("Enter input values path (optional)", None);
    let inputs_path = if inputs_path_str.is_empty() {
        None
    } else {
        Some(inputs_path_str)
    };

    let format = loop {
        println!("\nPlease select the circuit file format:");
        println!("  1: Editor export (kind/source/target fields)");
        println!("  2: Canonical (the serialized circuit model)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break FormatCli::Editor,
            "2" => break FormatCli::Canonical,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    let validate_only = loop {
        let choice_str = prompt_for_input("Validate only, without evaluating? (y/n)", Some("n"));
        match choice_str.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => break true,
            "n" | "no" => break false,
            _ => println!("Invalid choice. Please enter y or n."),
        }
    };

    run_circuit(circuit_path, inputs_path, format, validate_only);
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
