use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};

use st_mapper::{io, map};

#[derive(Parser, Debug)]
#[command(name = "st-mapper", author, version, about = "Exact read mapping with a naive suffix tree", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report exact occurrences of every read in every reference record
    Map {
        /// Reference FASTA file
        reference: String,
        /// Reads FASTQ file
        reads: String,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Uppercase sequences and treat U as T before matching
        #[arg(long)]
        normalize: bool,
    },
    /// Build a suffix tree per reference record and print its size
    Stats {
        /// Reference FASTA file
        reference: String,
        #[arg(long)]
        normalize: bool,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG 优先
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Map { reference, reads, out, threads, normalize } => {
            let opt = map::MapOpt { threads, normalize };
            run_map(&reference, &reads, out.as_deref(), opt)
        }
        Commands::Stats { reference, normalize } => run_stats(&reference, normalize),
    }
}

fn run_map(reference: &str, reads: &str, out: Option<&str>, opt: map::MapOpt) -> Result<()> {
    info!("reference: {}", reference);
    info!("reads: {}", reads);
    map::map_fastq_with_opt(reference, reads, out, opt)?;
    Ok(())
}

fn run_stats(reference: &str, normalize: bool) -> Result<()> {
    let records = io::read_fasta(reference)?;
    if records.is_empty() {
        anyhow::bail!("FASTA file '{}' contains no sequences", reference);
    }

    println!("name\tlength\tnodes\tleaves\tbranches");
    for (name, stats) in map::pipeline::reference_stats(&records, normalize)? {
        match stats {
            Some(s) => println!("{}\t{}\t{}\t{}\t{}", name, s.reference_len, s.nodes, s.leaves, s.branches),
            None => println!("{}\t0\t0\t0\t0", name),
        }
    }
    Ok(())
}
