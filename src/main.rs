use clap::Parser;
use flatten_tools::obj::{Conversion, convert_obj_file};
use std::path::PathBuf;
use std::process;

/// Export the UV layer of a flattened OBJ file as an SVG cut pattern
#[derive(Parser, Debug)]
#[command(name = "flatten-tools", version)]
struct Cli {
    /// Flattened OBJ file produced by the flattening tool
    input: PathBuf,

    /// Output SVG path (defaults to the input path with an .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match convert_obj_file(&cli.input, cli.output.as_deref()) {
        Ok(Conversion::Written(path)) => {
            println!("SVG exported: {}", path.display());
        }
        Ok(Conversion::Skipped) => {
            println!("No texture coordinates found, nothing to export");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
