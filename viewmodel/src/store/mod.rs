//! Page state container.
//!
//! `ReviewsState` is the single source of truth of the page and is only
//! changed by [`update`]. Side effects the reducer needs (posting a review,
//! notifying the user, reloading) come back as [`Effect`]s for the host to run;
//! their outcome is fed back in as another [`Msg`].

mod messages;
mod state;
mod update;

pub use messages::{Effect, Msg};
pub use state::{connection_error_message, LoadStatus, ReviewsState};
pub use update::update;
