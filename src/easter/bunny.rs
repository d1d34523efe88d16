// Singleton Pattern - one Easter Bunny per process, created on first use.

use std::io::Write;
use std::sync::OnceLock;

use tracing::debug;

use super::egg::{Egg, EggFactory};
use super::hiding::HidingStrategy;
use super::plan::HuntPlan;
use crate::Result;

#[derive(Debug)]
pub struct EasterBunny {
    _private: (),
}

impl EasterBunny {
    /// The process-wide bunny. `OnceLock` makes concurrent first calls
    /// agree on a single instance.
    pub fn instance() -> &'static EasterBunny {
        static INSTANCE: OnceLock<EasterBunny> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("creating the Easter Bunny");
            EasterBunny { _private: () }
        })
    }

    pub fn hide_egg(
        &self,
        egg: &dyn Egg,
        strategy: &dyn HidingStrategy,
        out: &mut dyn Write,
    ) -> Result<()> {
        debug!(egg = egg.kind(), strategy = strategy.name(), "hiding egg");
        strategy.hide(egg, out)
    }

    /// Build, decorate, show and hide every egg of `plan`, in order.
    /// Stops at the first egg whose tag the factory rejects.
    pub fn hide_all(&self, plan: &HuntPlan, out: &mut dyn Write) -> Result<()> {
        for planned in &plan.eggs {
            let mut egg = EggFactory::create_egg(&planned.kind)?;
            for decoration in &planned.decorations {
                egg = decoration.apply(egg);
            }

            egg.display(out)?;
            self.hide_egg(&*egg, &*planned.spot.strategy(), out)?;
        }
        Ok(())
    }
}
