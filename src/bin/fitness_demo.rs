// Fitness demo - Command and Observer patterns.

use std::io::{self, Write};
use std::process::ExitCode;
use std::rc::Rc;

use colored::Colorize;
use pattern_demos::fitness::{
    FitnessInstructor, FitnessSession, LieDownCommand, Observer, OnlineViewer, StandUpCommand,
    Trainee,
};
use pattern_demos::{telemetry, Result};

fn command_example(out: &mut dyn Write) -> Result<()> {
    let trainee = Trainee::new();
    let lie_down = Box::new(LieDownCommand::new(&trainee));
    let stand_up = Box::new(StandUpCommand::new(&trainee));

    let mut instructor = FitnessInstructor::new();
    instructor.set_command(lie_down);
    instructor.issue_command(out)?;

    instructor.set_command(stand_up);
    instructor.issue_command(out)
}

fn observer_example(out: &mut dyn Write) -> Result<()> {
    let mut session = FitnessSession::new();

    for name in ["Viewer 1", "Viewer 2", "Viewer 3"] {
        let viewer: Rc<dyn Observer> = Rc::new(OnlineViewer::new(name));
        session.add_observer(viewer);
    }

    session.set_action("lying down", out)?;
    session.set_action("standing up", out)
}

fn run(out: &mut dyn Write) -> Result<()> {
    command_example(out)?;
    observer_example(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}
