// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{Context, Result};
use harmonica::config::SearchFile;
use harmonica::music::{Note, PitchClassSet, ScaleType};
use std::env;
use tracing::{info, Level};

fn print_usage() {
    println!("Harmonica - Pitch-Class Algebra and Pitch Set Search");
    println!();
    println!("Usage: harmonica [--verbose] [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --find <FILE>              Run the search described in a YAML or TOML file");
    println!("  --analyze <PCS> [MODULUS]  Analyze a pitch class set, e.g. 0,2,4,5,7,9,11 (default modulus 12)");
    println!("  --scale <ROOT> <SCALE>     Show a named scale, e.g. D dorian");
    println!("  --verbose                  Log search details");
    println!("  --help                     Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(path: &str) -> Result<()> {
    let file = SearchFile::load(path)?;
    let find = file.search.to_finder()?;
    info!(strategy = %find.strategy(), "running search from {}", path);

    let mut found: Vec<_> = find.collect().context("Search failed")?.into_iter().collect();
    found.sort();

    for pitch_set in &found {
        println!("{}", pitch_set);
    }
    println!();
    println!("{} pitch sets", found.len());
    Ok(())
}

fn parse_pitch_classes(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(|pc| {
            pc.trim()
                .parse()
                .with_context(|| format!("Invalid pitch class: {}", pc))
        })
        .collect()
}

fn analyze(pitch_classes: Vec<i64>, modulus: i64) -> Result<()> {
    let pcset = PitchClassSet::new(pitch_classes, modulus).context("Invalid pitch class set")?;
    let structure = pcset.structure();

    println!("Pitch class set:  {}", pcset);
    println!("Structure:        {}", structure);
    println!("Prime:            {}", pcset.prime());
    println!("Interval vector:  {:?}", pcset.interval_vector());
    println!("Modes:            {}", structure.count_modes());
    println!("Transpositions:   {}", structure.count_transpositions());

    println!();
    println!("Interval spectrum:");
    for (jump, intervals) in pcset.interval_spectrum().iter().enumerate() {
        println!("  {}: {:?}", jump + 1, intervals);
    }

    let named: Vec<String> = pcset
        .pitch_classes()
        .iter()
        .filter_map(|&pc| {
            let rooted = pcset.rooted(pc).ok()?;
            let scale_type = ScaleType::identify(&rooted)?;
            Some(format!("  {} {}", Note::from_pitch_class(pc), scale_type))
        })
        .collect();
    if !named.is_empty() {
        println!();
        println!("Named modes:");
        for line in named {
            println!("{}", line);
        }
    }
    Ok(())
}

fn show_scale(root: &str, scale: &str) -> Result<()> {
    let note: Note = root.parse()?;
    let scale_type: ScaleType = scale.parse()?;
    let pcset = scale_type.pcset(note);
    let func = scale_type.scale_func(note);

    let notes: Vec<String> = func
        .eval_many(0..func.size() as i64)
        .into_iter()
        .map(|pitch| Note::from_pitch_class(pitch).to_string())
        .collect();

    println!("{} {}", note, scale_type);
    println!("Notes:            {}", notes.join(" "));
    println!("Pitch class set:  {}", pcset);
    println!("Structure:        {}", pcset.structure());
    println!("Scale function:   {}", func);
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    args.retain(|arg| arg != "--verbose" && arg != "-v");
    init_logging(verbose);

    if args.len() < 2 {
        println!("Harmonica - Pitch-Class Algebra and Pitch Set Search");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--find" => {
            if args.len() < 3 {
                eprintln!("Error: --find requires a search file");
                std::process::exit(1);
            }
            run_search(&args[2])?;
        }
        "--analyze" => {
            if args.len() < 3 {
                eprintln!("Error: --analyze requires a comma-separated list of pitch classes");
                std::process::exit(1);
            }
            let pitch_classes = parse_pitch_classes(&args[2])?;
            let modulus: i64 = if args.len() >= 4 {
                args[3]
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid modulus: {}", args[3]))?
            } else {
                12
            };
            analyze(pitch_classes, modulus)?;
        }
        "--scale" => {
            if args.len() < 4 {
                eprintln!("Error: --scale requires a root note and a scale name");
                std::process::exit(1);
            }
            show_scale(&args[2], &args[3])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
