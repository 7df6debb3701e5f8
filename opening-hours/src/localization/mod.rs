pub(crate) mod coordinates;
pub(crate) mod localize;

pub use crate::localization::coordinates::Coordinates;
pub use crate::localization::localize::{Localize, NoLocation, TzLocation};
