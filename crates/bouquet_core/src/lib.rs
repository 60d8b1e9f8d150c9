//! Bouquet-building session core: group storage, quantity allocation under
//! the global cap, affordance projection, the clamp notice and the summary.

pub mod allocator;
pub mod notice;
pub mod projector;
pub mod session;
pub mod store;
pub mod summary;

pub use allocator::{allocate, parse_quantity, recompute, Allocation};
pub use notice::NoticeTimer;
pub use projector::project;
pub use session::BouquetSession;
pub use store::GroupStore;
pub use summary::summarize;
