// Egg hunt demo - Singleton, Factory Method, Decorator and Strategy.
//
// Usage: egg_hunt [PLAN.toml]
// Without a plan the built-in hunt runs.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use pattern_demos::easter::{EasterBunny, HuntPlan};
use pattern_demos::{telemetry, Result};

fn run(plan_path: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let plan = match plan_path {
        Some(path) => HuntPlan::load(path)?,
        None => HuntPlan::default(),
    };

    let bunny = EasterBunny::instance();
    bunny.hide_all(&plan, out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    telemetry::init();

    let plan_path = env::args().nth(1);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(plan_path.as_deref().map(Path::new), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}
