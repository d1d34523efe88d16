//! Hunt plans: which eggs to make, how to decorate them and where to hide
//! them. Plans are read from TOML:
//!
//! ```toml
//! [[eggs]]
//! kind = "dinosaur"
//! decorations = ["sticker", "colored"]
//! spot = "bush"
//! ```
//!
//! Decorations are applied in the listed order, so the last one is the
//! outermost. `kind` is kept as the raw tag and validated by the factory.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::decorator::Decoration;
use super::hiding::HidingSpot;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlannedEgg {
    pub kind: String,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
    pub spot: HidingSpot,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HuntPlan {
    #[serde(default)]
    pub eggs: Vec<PlannedEgg>,
}

impl Default for HuntPlan {
    fn default() -> Self {
        Self {
            eggs: vec![
                PlannedEgg {
                    kind: "chicken".to_string(),
                    decorations: vec![Decoration::Colored],
                    spot: HidingSpot::Basket,
                },
                PlannedEgg {
                    kind: "ostrich".to_string(),
                    decorations: vec![Decoration::Sticker],
                    spot: HidingSpot::Forest,
                },
                PlannedEgg {
                    kind: "dinosaur".to_string(),
                    decorations: vec![Decoration::Sticker, Decoration::Colored],
                    spot: HidingSpot::Bush,
                },
            ],
        }
    }
}

impl HuntPlan {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::plan(format!("failed to read {}: {err}", path.display())))?;
        Self::from_toml_str(&content)
    }
}
