//! Service marketplace.
//!
//! Static service catalogs per tab, narrowed on every request by
//! conjunctive filters and sliced into fixed-size pages.
//!
//! - [`Listing`] — Display record for one service
//! - [`Tab`] — Marketplace tab and its static dataset
//! - [`Filter`] / [`Sort`] — Search, selectors, and ordering
//! - [`Browse`] — Per-tab browsing state with page reset on change
mod catalog;
mod filter;
mod listing;
mod page;

pub use filter::*;
pub use listing::*;
pub use page::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
