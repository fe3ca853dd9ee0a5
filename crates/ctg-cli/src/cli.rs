use std::path::PathBuf;

use clap::Parser;

use ctg_types::ContigId;

#[derive(Parser, Debug)]
#[command(
    name = "contigtree",
    about = "Generate a tree of contigs from a Minia contig file",
    long_about = "Generate a tree of contigs from a Minia contig file.\n\
                  Supply a search depth and one or more contig IDs. The sequences of the \
                  targets and their linked contigs are printed to stdout in FASTA format; \
                  the trees are printed to stderr.",
    version
)]
pub struct Cli {
    /// A contigs.fa file generated by Minia
    pub file: PathBuf,

    /// Search depth / tree size. A value of 4 is suitable
    pub depth: usize,

    /// Target contig IDs, separated by spaces
    #[arg(required = true)]
    pub targets: Vec<ContigId>,

    /// TOML file with locator tuning and display names
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log lookups and traversal at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
