// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! ClassCluster CLI entrypoint.
//!
//! By default this places the roster and opens the interactive TUI. Use
//! `--plan` to run headless: place the roster, print the grid and score, exit.

use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use classcluster::model::fixtures;
use classcluster::plan::greedy_place;
use classcluster::render::render_seating_text;
use classcluster::score::score_seating;

const DEFAULT_CSV_PATH: &str = "seating.csv";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--classroom <path>] [--csv <path>] [--seed <n>] [--plan]\n  {program} --demo [--seed <n>] [--plan]\n\nTUI mode (default) opens the seating editor after an initial greedy placement.\n--plan runs headless: place the roster, print the grid and score, exit.\n\n--classroom loads a JSON classroom file (grid shape, teacher desks, roster).\n--demo uses the built-in demo classroom and cannot be combined with --classroom;\nwithout either, the demo classroom is used.\n\n--csv selects the seating CSV used by save/load in the TUI (default {DEFAULT_CSV_PATH}).\n--seed fixes the placement shuffle (same seed, same seating); if omitted, a\ntime-derived seed is used."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    classroom: Option<String>,
    csv: Option<String>,
    seed: Option<u64>,
    plan: bool,
    demo: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--plan" => {
                if options.plan {
                    return Err(());
                }
                options.plan = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--classroom" => {
                if options.classroom.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.classroom = Some(path);
            }
            "--csv" => {
                if options.csv.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.csv = Some(path);
            }
            "--seed" => {
                if options.seed.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let seed: u64 = raw.parse().map_err(|_| ())?;
                options.seed = Some(seed);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.classroom.is_some() {
        return Err(());
    }

    Ok(options)
}

fn time_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos() as u64
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "classcluster".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (classroom, roster) = match &options.classroom {
            Some(path) => classcluster::store::load_classroom(path)?,
            None => (fixtures::demo_classroom(), fixtures::demo_roster()),
        };

        let seed = options.seed.unwrap_or_else(time_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seating = classroom.empty_seating();
        greedy_place(&classroom, &mut seating, &roster, &mut rng);

        if options.plan {
            print!("{}", render_seating_text(&classroom, &seating));
            println!("Score: {:.2}", score_seating(&classroom, &seating));
            return Ok(());
        }

        let csv_path = PathBuf::from(options.csv.as_deref().unwrap_or(DEFAULT_CSV_PATH));
        classcluster::tui::run_with_seating(classroom, seating, roster, seed, csv_path)
    })();

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
