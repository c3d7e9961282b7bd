//! Rust client library for the Slotify vendor-booking API.
//!
//! This crate provides a typed client for the Slotify marketplace
//! backend: browsing categories and vendors, one-time-passcode login,
//! booking with an optional payment step, notifications, and the admin
//! CRUD surface.
//!
//! The layers, bottom up:
//!
//! - [`client`] — one method per backend endpoint, async and blocking
//!   variants, bearer-token auth.
//! - [`state`] — five pure state slices (auth, category, vendor,
//!   booking, notification) composed into an [`state::AppState`].
//! - [`storage`] — the durable profile blob restored at startup.
//! - [`store`] — the imperative shell tying the three together.
//! - [`flow`] — the login and checkout step machines.

pub mod error;
pub mod flow;
pub mod models;
pub mod state;
pub mod storage;

#[cfg(any(feature = "async", feature = "blocking"))]
pub mod client;
#[cfg(any(feature = "async", feature = "blocking"))]
pub mod store;
