//! Record types for each resource.

mod calendar_event;
mod category;
mod rpm_block;

pub use calendar_event::CalendarEvent;
pub use category::{Category, CategoryType, Role};
pub use rpm_block::{ActionKey, ActionStatus, BlockType, DurationUnit, MassiveAction, RpmBlock};
