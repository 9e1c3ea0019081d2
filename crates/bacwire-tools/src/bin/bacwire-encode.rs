use bacwire_tools::{encode_value, to_hex, EncodeValue};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bacwire-encode")]
struct Args {
    /// Wrap the value in this context tag instead of its application tag.
    #[arg(long, global = true)]
    context: Option<u8>,
    #[command(subcommand)]
    value: EncodeValue,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let bytes = encode_value(&args.value, args.context)?;
    log::debug!("encoded {} byte(s)", bytes.len());
    println!("{}", to_hex(&bytes));
    Ok(())
}
