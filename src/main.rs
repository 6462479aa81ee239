use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use infusiondx::benchmarks::BenchmarkTable;
use infusiondx::cli::{BenchmarksCommand, Cli, Commands};
use infusiondx::ctx::Ctx;
use infusiondx::engine::resolve;
use infusiondx::io;
use infusiondx::pipeline::stage0_scaffold::Stage0Scaffold;
use infusiondx::pipeline::stage1_input::Stage1Input;
use infusiondx::pipeline::stage2_diagnostic::Stage2Diagnostic;
use infusiondx::pipeline::stage3_output::Stage3Output;
use infusiondx::pipeline::stage4_store::Stage4Store;
use infusiondx::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(args.inputs, args.out);
            ctx.lead_path = args.lead;
            ctx.store_path = args.store;
            ctx.write_json = args.json;
            ctx.write_html = args.html;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Diagnostic::new()),
                Box::new(Stage3Output::new()),
                Box::new(Stage4Store::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(args.inputs, PathBuf::from("."));
            let pipeline = Pipeline::new(vec![Box::new(Stage1Input::new())]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx)?;
        }
        Commands::Benchmarks(args) => match args.command {
            BenchmarksCommand::Show => {
                print_benchmarks(&BenchmarkTable::default_v1());
            }
        },
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if let Some(id) = &ctx.submission_id {
        println!("submission: {}", id);
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let inputs = ctx.inputs.as_ref().context("inputs missing")?;
    println!("infusiondx validate ok");
    println!(
        "infusions/nurse/week: {:.2}",
        resolve::infusions_per_nurse(inputs)
    );
    println!(
        "margin/episode: {:.2}",
        resolve::margin_per_episode(inputs)
    );
    println!(
        "revenue/infusion: {:.2}",
        resolve::revenue_per_infusion(inputs)
    );
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_benchmarks(benchmarks: &BenchmarkTable) {
    println!("benchmark assumptions (v1):");
    for (key, label) in benchmarks.benchmarks_used() {
        println!("{}\t{}", key, label);
    }
}
