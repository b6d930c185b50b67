pub use crate::action::iterate::{IterateAction, measure};
pub use crate::ds::{ArenaList, BoundedList};
pub use crate::error::{CapacityError, ConfigError};
pub use crate::traits::{OrderedSequence, TimedListAction};
