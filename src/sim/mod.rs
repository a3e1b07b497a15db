pub mod context;
pub mod flareup;
pub mod helpers;
pub(crate) mod mission;
pub mod participation;
pub mod presentation;
pub mod registry;
pub mod signal;
pub mod tags;

pub use context::DayContext;
pub use flareup::{ConflictKind, Flareup, WorkOrder};
pub use presentation::{MissionDecision, MissionPrompt, Presentation};
pub use registry::FlareupRegistry;
pub use signal::{Side, Signal};
