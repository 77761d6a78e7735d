use std::{env, process};

use gridgraph::{Graph, GraphError, bfs, cli::CommandLineConfig, grid, storage};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let graph = match load_graph(&config) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&graph, &config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn load_graph(config: &CommandLineConfig) -> Result<Graph, GraphError> {
    let matrix = grid::load_matrix(&config.matrix)?;
    grid::build_graph(&matrix)
}

fn run_command(graph: &Graph, config: &CommandLineConfig) -> Result<(), GraphError> {
    match config.command.as_str() {
        "dump" => {
            print!("{}", graph.dump());
            Ok(())
        }
        "path" => {
            match bfs::shortest_path(graph, config.start, config.goal)? {
                Some(path) => {
                    let rendered: Vec<String> =
                        path.iter().map(|index| index.to_string()).collect();
                    println!(
                        "shortest path between {} and {}: {}",
                        config.start,
                        config.goal,
                        rendered.join(" ")
                    );
                }
                None => println!("no path between {} and {}", config.start, config.goal),
            }
            Ok(())
        }
        "sum" => {
            match bfs::path_value_sum(graph, config.start, config.goal)? {
                Some(sum) => println!(
                    "path value sum between {} and {}: {sum}",
                    config.start, config.goal
                ),
                None => println!("no path between {} and {}", config.start, config.goal),
            }
            Ok(())
        }
        "save" => {
            storage::save_binary(graph, &config.output)?;
            println!("graph saved to {}", config.output);
            Ok(())
        }
        "export" => {
            let text = serde_json::to_string_pretty(graph)
                .map_err(|e| GraphError::invalid_input(e.to_string()))?;
            println!("{text}");
            Ok(())
        }
        other => {
            println!("unknown command {other}, defaulting to dump");
            print!("{}", graph.dump());
            Ok(())
        }
    }
}
