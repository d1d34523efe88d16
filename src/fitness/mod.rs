//! Fitness class demo: an instructor issues commands to a trainee, and a
//! session broadcasts the current exercise to online viewers.

pub mod command;
pub mod observer;

pub use command::{Command, FitnessInstructor, LieDownCommand, StandUpCommand, Trainee};
pub use observer::{FitnessSession, Observer, OnlineViewer};
