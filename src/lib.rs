//! Storage and calendar geometry for a personal schedule and to-do list.
//!
//! Events and tasks live in two flat text files (see [`record`] for the line
//! format). A [`Session`] loads both into memory, callers mutate the
//! [`ScheduleIndex`] and [`TaskList`] directly, and the session writes both
//! files back when closed. [`grid`], [`layout`], [`contrast`] and [`theme`]
//! compute what a front end needs to draw month and week views.

pub mod config;
pub mod contrast;
pub mod grid;
pub mod layout;
pub mod model;
pub mod record;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod tasks;
pub mod theme;

pub use config::Config;
pub use contrast::TextColors;
pub use grid::{MonthGrid, Week, YearMonth};
pub use layout::position_of;
pub use model::{EngineError, ErrorKind, Event, RecordError, Rgb, Task};
pub use schedule::ScheduleIndex;
pub use session::Session;
pub use storage::{load_schedule, load_tasks, save_schedule, save_tasks, DataLocation};
pub use tasks::TaskList;
pub use theme::Palette;
