//! Easter egg hunt demo: the bunny singleton hides factory-made eggs,
//! decorated on the way, using interchangeable hiding strategies.

pub mod bunny;
pub mod decorator;
pub mod egg;
pub mod hiding;
pub mod plan;

pub use bunny::EasterBunny;
pub use decorator::{ColoredEgg, Decoration, StickerEgg};
pub use egg::{ChickenEgg, DinosaurEgg, Egg, EggFactory, EggKind, OstrichEgg};
pub use hiding::{BasketHiding, BushHiding, ForestHiding, HidingSpot, HidingStrategy};
pub use plan::{HuntPlan, PlannedEgg};
