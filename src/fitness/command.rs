// Command Pattern - the instructor triggers trainee actions without knowing
// which action a command is bound to.

use std::io::Write;

use tracing::debug;

use crate::{Error, Result};

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
pub struct Trainee;

impl Trainee {
    pub fn new() -> Self {
        Self
    }

    pub fn lie_down(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Trainee is lying down.")?;
        Ok(())
    }

    pub fn stand_up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Trainee is standing up.")?;
        Ok(())
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
    fn name(&self) -> &str;
}

pub struct LieDownCommand<'a> {
    trainee: &'a Trainee,
}

impl<'a> LieDownCommand<'a> {
    pub fn new(trainee: &'a Trainee) -> Self {
        Self { trainee }
    }
}

impl Command for LieDownCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.trainee.lie_down(out)
    }

    fn name(&self) -> &str {
        "lie down"
    }
}

pub struct StandUpCommand<'a> {
    trainee: &'a Trainee,
}

impl<'a> StandUpCommand<'a> {
    pub fn new(trainee: &'a Trainee) -> Self {
        Self { trainee }
    }
}

impl Command for StandUpCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.trainee.stand_up(out)
    }

    fn name(&self) -> &str {
        "stand up"
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct FitnessInstructor<'a> {
    command: Option<Box<dyn Command + 'a>>,
}

impl<'a> FitnessInstructor<'a> {
    pub fn new() -> Self {
        Self { command: None }
    }

    pub fn set_command(&mut self, command: Box<dyn Command + 'a>) {
        debug!(command = command.name(), "instructor assigned command");
        self.command = Some(command);
    }

    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// Execute the current command.
    ///
    /// Fails with [`Error::PreconditionViolation`] if no command was set.
    pub fn issue_command(&self, out: &mut dyn Write) -> Result<()> {
        let command = self.command.as_ref().ok_or_else(|| {
            Error::PreconditionViolation("no command assigned to the instructor".to_string())
        })?;

        debug!(command = command.name(), "issuing command");
        command.execute(out)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_lie_down_command() {
        let trainee = Trainee::new();
        let command = LieDownCommand::new(&trainee);
        let mut buf = Vec::new();

        command.execute(&mut buf).unwrap();
        assert_eq!(output(buf), "Trainee is lying down.\n");
    }

    #[test]
    fn test_stand_up_command() {
        let trainee = Trainee::new();
        let command = StandUpCommand::new(&trainee);
        let mut buf = Vec::new();

        command.execute(&mut buf).unwrap();
        assert_eq!(output(buf), "Trainee is standing up.\n");
    }

    #[test]
    fn test_command_names() {
        let trainee = Trainee::new();
        assert_eq!(LieDownCommand::new(&trainee).name(), "lie down");
        assert_eq!(StandUpCommand::new(&trainee).name(), "stand up");
    }

    #[test]
    fn test_issue_without_command() {
        let instructor = FitnessInstructor::new();
        let mut buf = Vec::new();

        let result = instructor.issue_command(&mut buf);
        assert!(matches!(result, Err(Error::PreconditionViolation(_))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_set_command_replaces_previous() {
        let trainee = Trainee::new();
        let mut instructor = FitnessInstructor::new();
        assert!(!instructor.has_command());

        instructor.set_command(Box::new(LieDownCommand::new(&trainee)));
        instructor.set_command(Box::new(StandUpCommand::new(&trainee)));
        assert!(instructor.has_command());

        let mut buf = Vec::new();
        instructor.issue_command(&mut buf).unwrap();
        assert_eq!(output(buf), "Trainee is standing up.\n");
    }

    #[test]
    fn test_issue_same_command_twice() {
        let trainee = Trainee::new();
        let mut instructor = FitnessInstructor::new();
        instructor.set_command(Box::new(LieDownCommand::new(&trainee)));

        let mut buf = Vec::new();
        instructor.issue_command(&mut buf).unwrap();
        instructor.issue_command(&mut buf).unwrap();
        assert_eq!(output(buf).lines().count(), 2);
    }
}
