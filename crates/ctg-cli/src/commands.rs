use std::io::{self, BufWriter, Write};

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info};

use ctg_graph::{TreeBuilder, VisitSet};
use ctg_store::ContigFile;
use ctg_types::Orientation;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    execute(&cli, &config, &mut out, &mut diag)?;
    out.flush()?;
    Ok(())
}

/// Build forward and reverse trees for every target, render them to `diag`,
/// then write the unique contigs to `out` as FASTA.
///
/// The first failure aborts the whole run. Returns the number of unique
/// contigs written.
pub fn execute<O: Write, E: Write>(
    cli: &Cli,
    config: &CliConfig,
    out: &mut O,
    diag: &mut E,
) -> anyhow::Result<usize> {
    let source = ContigFile::new(&cli.file, config.locator.clone());
    let builder = TreeBuilder::new(&source);
    let mut visits = VisitSet::new();
    debug!(file = %cli.file.display(), names = config.names.len(), "starting run");

    for &target in &cli.targets {
        for orientation in Orientation::BOTH {
            let direction = match orientation {
                Orientation::Forward => "forwards",
                Orientation::Reverse => "reverse",
            };
            let title = format!("Tree {direction} from {target} to depth {}", cli.depth);
            writeln!(diag, "{}", render::banner(&title).bold())?;

            let tree = builder
                .build(target, cli.depth, orientation)
                .with_context(|| {
                    format!("building {orientation} tree from contig {target} in {}", cli.file.display())
                })?;
            render::write_tree(diag, &tree, &config.names)?;
            visits.extend(tree.into_segments());
        }
    }

    let title = format!("Unique contigs: {}", visits.len());
    writeln!(diag, "{}", render::banner(&title).bold())?;
    render::write_fasta(out, &visits, &config.names)?;

    info!(targets = cli.targets.len(), unique = visits.len(), "run complete");
    Ok(visits.len())
}
