use clap::Parser;
use infusiondx::cli::{Cli, Commands};

#[test]
fn run_outputs_default_off() {
    let cli = Cli::parse_from([
        "infusiondx",
        "run",
        "--inputs",
        "inputs.json",
        "--out",
        "out",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert!(!args.json);
            assert!(!args.html);
            assert!(args.lead.is_none());
            assert!(args.store.is_none());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_accepts_lead_and_store() {
    let cli = Cli::parse_from([
        "infusiondx",
        "run",
        "--inputs",
        "inputs.json",
        "--lead",
        "lead.json",
        "--out",
        "out",
        "--json",
        "--html",
        "--store",
        "submissions.json",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.json);
            assert!(args.html);
            assert!(args.lead.is_some());
            assert!(args.store.is_some());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn validate_requires_inputs() {
    let parsed = Cli::try_parse_from(["infusiondx", "validate"]);
    assert!(parsed.is_err());
}
