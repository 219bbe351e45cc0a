//! Command-line front end: disassemble an object file, print its symbol
//! reference graph as DOT, and optionally write a dominator tree.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use symgraph::prelude::*;
use symgraph::tools;

#[derive(Parser)]
#[command(
    name = "symgraph",
    about = "Symbol reference graphs and dominator trees from object files",
    version
)]
struct Cli {
    /// Object file to analyze
    #[arg(value_name = "OBJFILE")]
    object: PathBuf,

    /// Target toolchain platform prefix (e.g. `aarch64-linux-gnu-`)
    #[arg(long, value_name = "TRIPLE", default_value = "")]
    triple: String,

    /// Compute the dominator tree rooted at this symbol (decoded name)
    #[arg(long, value_name = "SYMBOL")]
    dom_tree: Option<String>,

    /// Where to write the dominator tree DOT output
    #[arg(long, value_name = "PATH", default_value = "dom-tree.dot")]
    dom_tree_out: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("symgraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let asm = tools::disassembly(&cli.object, &cli.triple)
        .with_context(|| format!("disassembling {}", cli.object.display()))?;
    let table = tools::symbol_table(&cli.object, &cli.triple)
        .with_context(|| format!("reading symbol table of {}", cli.object.display()))?;

    let sizes = symbol_sizes(&table);
    let graph = RefGraph::build(ref_edges(&asm), &sizes)
        .with_context(|| format!("building reference graph for {}", cli.object.display()))?;
    log::debug!(
        "built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    print!("{}", graph.to_dot());

    if let Some(root) = &cli.dom_tree {
        let tree = dominator_tree(&graph, root)
            .with_context(|| format!("computing dominator tree from '{root}'"))?;
        log::debug!("dominator tree: {} nodes under '{root}'", tree.len());

        let file = File::create(&cli.dom_tree_out)
            .with_context(|| format!("creating {}", cli.dom_tree_out.display()))?;
        let mut sink = DotSink::new(file)?;
        emit_dominator_tree(&graph, &tree, &mut sink)?;
        sink.finish()?;
        log::info!("wrote dominator tree to {}", cli.dom_tree_out.display());
    }

    Ok(())
}
