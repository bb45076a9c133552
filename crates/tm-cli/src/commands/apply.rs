//! Implementation of the apply command

use anyhow::{Context, Result};
use tm_runner::{RunOptions, Runner};

use crate::cli::{ApplyArgs, GlobalArgs};
use crate::commands::common::{create_database_connection, load_config};

pub async fn execute(args: &ApplyArgs, global: &GlobalArgs) -> Result<()> {
    let (config, root) = load_config(global)?;
    let db = create_database_connection(&config, &root)?;

    let runner = Runner::new(
        db,
        config.ledger.schema.clone(),
        config.ledger.table.clone(),
    );
    let options = RunOptions {
        preview: args.preview,
        force: args.force,
        emit_output: !args.quiet,
    };

    let migrations_dir = config.migrations_dir(&root);
    let outcomes = runner
        .run(&migrations_dir, &options)
        .await
        .context("Migration run failed")?;

    if !args.quiet {
        let applied = outcomes.iter().filter(|o| !o.skipped).count();
        let verb = if args.preview { "previewed" } else { "applied" };
        println!("\u{2713} {} migration(s) {}", applied, verb);
    }
    Ok(())
}
