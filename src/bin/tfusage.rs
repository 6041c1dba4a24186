//! Command-line interface for tfusage
//! This binary is the I/O glue around the analysis core: it reads declaration
//! files, runs the scan/classify pipeline, and prints structured facts or
//! rendered usage blocks.
//!
//! Usage:
//!   tfusage summary `<path>`                          - Print the structural summary as JSON
//!   tfusage classify `<path>`                         - Print declaration names per category
//!   tfusage usage `<path>` [--groups `<groups.json>`] - Print usage example blocks

use clap::{Arg, Command};

use tfusage::classify::Category;
use tfusage::model::ModuleMeta;
use tfusage::pipeline::analyze_module;
use tfusage::render::render_usage;
use tfusage::summary::{summarize, usage_groups_from_json};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("tfusage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyze Terraform module declarations and synthesize usage examples")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("summary")
                .about("Print the structural summary as JSON")
                .arg(path_arg())
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("classify")
                .about("Print declaration names per category")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("usage")
                .about("Print usage example blocks")
                .arg(path_arg())
                .arg(name_arg())
                .arg(
                    Arg::new("source")
                        .long("source")
                        .help("Module source locator shown in examples")
                        .default_value(""),
                )
                .arg(
                    Arg::new("module-version")
                        .long("module-version")
                        .help("Module version tag shown in examples")
                        .default_value(""),
                )
                .arg(
                    Arg::new("groups")
                        .long("groups")
                        .short('g')
                        .help("Path to a JSON file of usage groups"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("summary", sub)) => handle_summary(sub),
        Some(("classify", sub)) => handle_classify(sub),
        Some(("usage", sub)) => handle_usage(sub),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the declaration file")
        .required(true)
        .index(1)
}

fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .help("Module display name")
        .default_value("")
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

fn analyze(source: &str, meta: ModuleMeta) -> tfusage::pipeline::ModuleContext {
    analyze_module(source, meta).unwrap_or_else(|e| {
        eprintln!("Analysis error: {}", e);
        std::process::exit(1);
    })
}

fn handle_summary(matches: &clap::ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let name = matches.get_one::<String>("name").unwrap();
    let source = read_source(path);
    let ctx = analyze(&source, ModuleMeta::new(name, "", ""));
    let summary = summarize(&ctx);
    let json = serde_json::to_string_pretty(&summary).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

fn handle_classify(matches: &clap::ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let source = read_source(path);
    let ctx = analyze(&source, ModuleMeta::default());
    let classified = &ctx.classified;

    for (category, list) in [
        (Category::Required, &classified.required),
        (Category::Trigger, &classified.trigger),
        (Category::Conditional, &classified.conditional),
        (Category::Optional, &classified.optional),
    ] {
        println!("{}:", category);
        for decl in list {
            println!("  {}", decl.name);
        }
    }
}

fn handle_usage(matches: &clap::ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let name = matches.get_one::<String>("name").unwrap();
    let module_source = matches.get_one::<String>("source").unwrap();
    let module_version = matches.get_one::<String>("module-version").unwrap();

    let source = read_source(path);
    let meta = ModuleMeta::new(name, module_source, module_version);
    let ctx = analyze(&source, meta);

    let groups = match matches.get_one::<String>("groups") {
        Some(groups_path) => {
            let json = read_source(groups_path);
            usage_groups_from_json(&json).unwrap_or_else(|e| {
                eprintln!("Error parsing usage groups: {}", e);
                std::process::exit(1);
            })
        }
        None => Vec::new(),
    };

    for (i, block) in render_usage(&ctx, &groups).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", block.label);
        print!("{}", block.text);
    }
}
