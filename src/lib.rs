//! # Slang Lexicon
//!
//! An in-memory catalog of slang terms with tiered search, alphabetical
//! pagination, and term lookup, served over a small JSON API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────┐
//! │  terms.md   │──▶│   Ingest     │──▶│ Catalog  │
//! │  (markdown) │   │ + Validate  │   │ (Arc, RO)│
//! └─────────────┘   └─────────────┘   └────┬─────┘
//!                                          │
//!                      ┌───────────────────┤
//!                      ▼                   ▼
//!                 ┌──────────┐       ┌──────────┐
//!                 │   CLI    │       │   HTTP   │
//!                 │ (slang)  │       │  (axum)  │
//!                 └──────────┘       └──────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. The **ingestor** ([`ingest`]) parses the markdown source into candidate
//!    [`models::SlangRecord`]s, assigning ids `term-1`, `term-2`, … per heading.
//! 2. Each candidate is checked by the **validator** ([`validate`]); rejects
//!    are reported and dropped.
//! 3. Accepted records form an immutable [`catalog::Catalog`], built once.
//! 4. The **query engine** ([`search`]) and **pagination engine** ([`browse`])
//!    run as pure functions over the catalog's records.
//! 5. Results are exposed via the **CLI** (`slang`) and the **HTTP server**
//!    ([`server`]).
//!
//! ## Quick Start
//!
//! ```bash
//! slang check                       # validate the data file
//! slang search "lit"
//! slang browse --page 2 --limit 5
//! slang get term-3
//! slang serve                       # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`validate`] | Record and response schema validation |
//! | [`ingest`] | Markdown ingestion |
//! | [`catalog`] | Immutable in-memory record set |
//! | [`search`] | Exact/partial tiered search |
//! | [`browse`] | Alphabetical sorting and pagination |
//! | [`get`] | Term lookup for the CLI |
//! | [`server`] | HTTP API |

pub mod browse;
pub mod catalog;
pub mod config;
pub mod get;
pub mod ingest;
pub mod models;
pub mod search;
pub mod server;
pub mod validate;
