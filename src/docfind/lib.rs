//! # Docfind Architecture
//!
//! Docfind is a **UI-agnostic doctor directory library**. The `docfind`
//! binary is one client of it; a web or desktop front end would drive the
//! very same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, runs the browse session │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: records, filters, search box           │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (query.rs, autocomplete.rs, manager.rs,            │
//! │           url_sync.rs)                                      │
//! │  - Pure filtering, sorting, suggestion and URL mapping      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (source/, records.rs)                           │
//! │  - DataSource trait: HttpSource, FileSource, InMemorySource │
//! │  - RecordStore: the read-only list and its load status      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! fetch → record store → {query engine, autocomplete} → client → user
//! event → filter manager → {location rewrite, query engine re-run}
//!
//! Derived views are recomputed in full on every change. Nothing is cached
//! between calls; the record list is small.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`model`]: The `Doctor` record and numeric field extraction
//! - [`filter`]: `FilterState`, `ConsultationType`, `SortBy`
//! - [`query`]: Filtering and sorting
//! - [`autocomplete`]: Name suggestions and the search box popover
//! - [`manager`]: Owner of the filter state, mirrors it into the location
//! - [`url_sync`]: Query string mapping and the `Location` abstraction
//! - [`records`]: The record store and its load status
//! - [`source`]: Where records come from
//! - [`avatar`]: Card image fallback
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod autocomplete;
pub mod avatar;
pub mod config;
pub mod error;
pub mod filter;
pub mod manager;
pub mod model;
pub mod query;
pub mod records;
pub mod source;
pub mod url_sync;
