//! Scheduling on a logical clock.
//!
//! Delayed transitions (settle delays, countdown ticks) are entries on a
//! [`Timeline`] instead of wall-clock timers. Callers advance the clock
//! explicitly, so tests can step through time deterministically.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::schedule::Timeline;
//!
//! let mut timeline = Timeline::new();
//! let settle = timeline.schedule(1_000, "settle");
//! timeline.schedule(1_000, "tick");
//!
//! // Cancelled entries never fire
//! assert!(timeline.cancel(settle));
//!
//! let fired = timeline.pop_due(1_000).unwrap();
//! assert_eq!(fired.event, "tick");
//! assert_eq!(timeline.now(), 1_000);
//! ```

mod timeline;

pub use timeline::{Fired, ScheduleToken, Timeline};
