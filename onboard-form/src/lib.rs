//! UI-state containers for the onboarding wizard.
//!
//! These are the two pieces of state the page layer owns directly: the
//! [`Stepper`] cursor over the fixed wizard sequence, and the [`FormState`]
//! record the lookup flow prefills. Neither talks to the network.
pub mod state;
pub mod stepper;

pub use state::{FormData, FormState, ProfileData, ProfileUpdate, WorkspaceData, WorkspaceUpdate};
pub use stepper::Stepper;
