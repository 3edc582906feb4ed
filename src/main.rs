use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use hubtags::{cli, logging, TagCatalog};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet))
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;
    args.validate().context("Invalid arguments")?;

    let catalog = TagCatalog::load(&args.file)
        .with_context(|| format!("Failed to load tag catalog: {}", args.file.display()))?;
    let tags = args.build_tags(&catalog);
    tracing::info!(
        kind = args.kind.as_str(),
        categories = tags.len(),
        "tag index ready"
    );

    let output = cli::render(&tags, args.show.as_deref(), args.format)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
