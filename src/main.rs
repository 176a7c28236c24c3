use std::path::PathBuf;

use clap::Parser;
use eyre::Context;
use rvdec::Xlen;
use rvdis::image::{self, InputFormat};
use rvdis::listing;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble RISC-V code from Intel HEX or ELF files")]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Register width (rv32, rv64 or rv128). Defaults to the ELF class
    #[arg(long)]
    isa: Option<Xlen>,

    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Start at the entry point instead of the lowest address
    #[arg(long)]
    from_entry: bool,

    /// Also list words that are not valid instructions
    #[arg(long)]
    show_illegal: bool,

    /// Colorize the output
    #[arg(long)]
    color: bool,

    /// Number of decoding threads
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .wrap_err("failed to start decoding threads")?;
    }

    let image = image::load(&cli.input, cli.format)
        .wrap_err_with(|| format!("loading {}", cli.input.display()))?;

    let lines = rvdis::disassemble(
        &image,
        cli.isa,
        cli.from_entry,
        listing::Options {
            show_illegal: cli.show_illegal,
            color: cli.color,
        },
    )?;

    listing::write_listing(&mut std::io::stdout().lock(), &lines)?;

    Ok(())
}
