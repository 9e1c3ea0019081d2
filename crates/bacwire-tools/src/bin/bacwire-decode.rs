use bacwire_tools::{describe, parse_hex, walk};
use clap::Parser;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "bacwire-decode")]
struct Args {
    /// Print the walked items as JSON.
    #[arg(long)]
    json: bool,
    /// Decode at most this many bytes.
    #[arg(long)]
    max_len: Option<usize>,
    /// Hex bytes; read from stdin when omitted.
    hex: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let text = if args.hex.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input
    } else {
        args.hex.join(" ")
    };
    let bytes = parse_hex(&text)?;
    let items = walk(&bytes, args.max_len.unwrap_or(bytes.len()))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}", describe(item));
        }
    }
    Ok(())
}
