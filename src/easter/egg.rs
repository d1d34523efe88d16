// Factory Method - eggs are only built through EggFactory, keyed by a tag.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{Error, Result};

pub const INVALID_EGG_MESSAGE: &str = "Невалиден тип яйце";

pub trait Egg {
    /// Human-readable egg label.
    fn kind(&self) -> &str;

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.kind())?;
        Ok(())
    }
}

pub struct ChickenEgg {
    kind: String,
}

impl ChickenEgg {
    fn new() -> Self {
        Self {
            kind: "Кокоше яйце".to_string(),
        }
    }
}

impl Egg for ChickenEgg {
    fn kind(&self) -> &str {
        &self.kind
    }
}

pub struct OstrichEgg {
    kind: String,
}

impl OstrichEgg {
    fn new() -> Self {
        Self {
            kind: "Щраусово яйце".to_string(),
        }
    }
}

impl Egg for OstrichEgg {
    fn kind(&self) -> &str {
        &self.kind
    }
}

pub struct DinosaurEgg {
    kind: String,
}

impl DinosaurEgg {
    fn new() -> Self {
        Self {
            kind: "Динозавърско яйце".to_string(),
        }
    }
}

impl Egg for DinosaurEgg {
    fn kind(&self) -> &str {
        &self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggKind {
    Chicken,
    Ostrich,
    Dinosaur,
}

impl EggKind {
    pub const ALL: [EggKind; 3] = [EggKind::Chicken, EggKind::Ostrich, EggKind::Dinosaur];

    pub fn tag(self) -> &'static str {
        match self {
            EggKind::Chicken => "chicken",
            EggKind::Ostrich => "ostrich",
            EggKind::Dinosaur => "dinosaur",
        }
    }
}

impl fmt::Display for EggKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EggKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "chicken" => Ok(EggKind::Chicken),
            "ostrich" => Ok(EggKind::Ostrich),
            "dinosaur" => Ok(EggKind::Dinosaur),
            other => Err(Error::invalid_argument(INVALID_EGG_MESSAGE, other)),
        }
    }
}

pub struct EggFactory;

impl EggFactory {
    /// Build an egg from its tag: `"chicken"`, `"ostrich"` or `"dinosaur"`.
    pub fn create_egg(tag: &str) -> Result<Box<dyn Egg>> {
        let kind: EggKind = tag.parse()?;
        Ok(Self::create(kind))
    }

    pub fn create(kind: EggKind) -> Box<dyn Egg> {
        match kind {
            EggKind::Chicken => Box::new(ChickenEgg::new()),
            EggKind::Ostrich => Box::new(OstrichEgg::new()),
            EggKind::Dinosaur => Box::new(DinosaurEgg::new()),
        }
    }
}
