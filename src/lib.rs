// Design pattern demos: a fitness class and an Easter egg hunt.
// Every operation that prints writes to a caller-supplied sink, so the
// binaries pass stdout and the tests pass a Vec<u8>.

pub mod easter;
pub mod error;
pub mod fitness;
pub mod telemetry;

pub use error::{Error, Result};

pub mod examples {
    //! # Pattern demos
    //!
    //! ## Fitness demo
    //! - Command Pattern (instructor, trainee, lie down / stand up)
    //! - Observer Pattern (fitness session, online viewers)
    //!
    //! ## Egg hunt demo
    //! - Singleton Pattern (Easter Bunny, OnceLock)
    //! - Factory Method (eggs keyed by tag)
    //! - Decorator Pattern (colored and sticker eggs)
    //! - Strategy Pattern (basket, forest, bush hiding)
    //!
    //! Run the demos with:
    //! ```bash
    //! cargo run --bin fitness_demo
    //! cargo run --bin egg_hunt
    //! cargo run --bin egg_hunt -- hunt.toml
    //! ```
}
