//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic inventory library** for collectible card games.
//! This is not a CLI application that happens to have some library code —
//! it's a library that happens to ship a CLI client.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per collaborator operation       │
//! │  - Generic over the CatalogSource seam                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory, cache, importer, remote, sync)            │
//! │  - Codecs and orchestration, no I/O assumptions beyond the  │
//! │    files/endpoints they are handed                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two stores, one record type
//!
//! The user's **inventory** (owned cards, mutated incrementally, flat CSV
//! file) and the **reference cache** (read-only catalog snapshot, JSON,
//! rebuilt wholesale by sync or bulk import) share the [`model::Card`]
//! type. Quantity encodes the difference: 0 reference-only, positive means
//! owned.
//!
//! ## Error policy
//!
//! Parse-level damage is absorbed at the lowest layer: a malformed
//! inventory line, cache entry, or bulk set file is dropped at that
//! granularity and never aborts the operation. I/O and network failures
//! surface to the caller as typed [`error::CardzError`] variants — never as
//! silently empty data. The one deliberate exception: a *missing* file on a
//! load path is the empty state, not a failure.
//!
//! ## Module overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`model`]: The [`model::Card`] record
//! - [`inventory`]: Flat-file codec for the owned-card list
//! - [`cache`]: Lenient JSON codec for the reference cache
//! - [`importer`]: Bulk dataset → cache rebuild
//! - [`remote`]: Catalog HTTP client behind the [`remote::CatalogSource`] seam
//! - [`sync`]: Remote refresh cycle and the offline sample fallback
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod importer;
pub mod inventory;
pub mod model;
pub mod remote;
pub mod sync;
