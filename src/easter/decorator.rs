// Decorator Pattern - a decorated egg shows the wrapped egg first, then its
// own annotation, so nested decorators print innermost-first.

use std::io::Write;

use serde::Deserialize;

use super::egg::Egg;
use crate::Result;

pub struct ColoredEgg {
    wrapped: Box<dyn Egg>,
}

impl ColoredEgg {
    pub fn new(wrapped: Box<dyn Egg>) -> Self {
        Self { wrapped }
    }
}

impl Egg for ColoredEgg {
    fn kind(&self) -> &str {
        self.wrapped.kind()
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        self.wrapped.display(out)?;
        writeln!(out, " -> Оцветено")?;
        Ok(())
    }
}

pub struct StickerEgg {
    wrapped: Box<dyn Egg>,
}

impl StickerEgg {
    pub fn new(wrapped: Box<dyn Egg>) -> Self {
        Self { wrapped }
    }
}

impl Egg for StickerEgg {
    fn kind(&self) -> &str {
        self.wrapped.kind()
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        self.wrapped.display(out)?;
        writeln!(out, " -> Облепено със стикери")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    Colored,
    Sticker,
}

impl Decoration {
    pub fn apply(self, egg: Box<dyn Egg>) -> Box<dyn Egg> {
        match self {
            Decoration::Colored => Box::new(ColoredEgg::new(egg)),
            Decoration::Sticker => Box::new(StickerEgg::new(egg)),
        }
    }
}
