// Strategy Pattern - where an egg ends up is chosen per call.

use std::io::Write;

use serde::Deserialize;

use super::egg::Egg;
use crate::Result;

pub trait HidingStrategy {
    fn hide(&self, egg: &dyn Egg, out: &mut dyn Write) -> Result<()>;
    fn name(&self) -> &str;
}

pub struct BasketHiding;

impl HidingStrategy for BasketHiding {
    fn hide(&self, egg: &dyn Egg, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} е скрито в кошница.", egg.kind())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "basket"
    }
}

pub struct ForestHiding;

impl HidingStrategy for ForestHiding {
    fn hide(&self, egg: &dyn Egg, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} е скрито в гората.", egg.kind())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "forest"
    }
}

pub struct BushHiding;

impl HidingStrategy for BushHiding {
    fn hide(&self, egg: &dyn Egg, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} е скрито под храст.", egg.kind())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "bush"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HidingSpot {
    Basket,
    Forest,
    Bush,
}

impl HidingSpot {
    pub fn strategy(self) -> Box<dyn HidingStrategy> {
        match self {
            HidingSpot::Basket => Box::new(BasketHiding),
            HidingSpot::Forest => Box::new(ForestHiding),
            HidingSpot::Bush => Box::new(BushHiding),
        }
    }
}
