use std::io::Read;

use clap::Parser;

#[derive(Parser)]
#[command(name = "csv2uml", about = "Render a CSV edge list as a PlantUML component diagram")]
struct Cli {
    /// Input CSV file with `source,target` rows (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Render only the subgraph reachable from this node
    #[arg(long, short = 's')]
    start: Option<String>,

    /// Write the diagram text to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<std::path::PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let input = match cli.file {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    match csv2uml::render(&input, cli.start.as_deref()) {
        Ok(text) => match cli.output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, &text) {
                    eprintln!("ERROR: failed to write {}: {e}", path.display());
                    std::process::exit(1);
                }
            }
            None => print!("{text}"),
        },
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
