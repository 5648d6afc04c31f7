//! Version resolution layer for the package index
//!
//! This module turns a package name and a requested constraint into one
//! stored artifact, or lists every stored version of a package.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Store    │────▶│   Catalog   │────▶│  Resolver   │
//! │ (enumerate) │     │ (versions)  │     │ (constraint)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                   │                   │
//!        │                   ▼                   ▼
//!        │            ┌─────────────┐     ┌─────────────┐
//!        └────────────│   Lister    │     │   Fetcher   │
//!          (recheck)  │  (natural)  │     │   (read)    │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Stored versions of one package, rebuilt per request
//! - [`constraint`]: `latest`, exact, `^`, `~` and `_` constraints
//! - [`error`]: Error types for storage and index operations
//! - [`fetcher`]: Resolve-then-read of a stored artifact
//! - [`lister`]: Naturally sorted version listings
//! - [`natural`]: Natural string ordering
//! - [`padding`]: Fixed-width normalization used for version comparison
//! - [`resolver`]: Constraint resolution over a padded catalog
//! - [`store`]: Storage trait for artifacts
//! - [`stores`]: Concrete store implementations (filesystem)

pub mod catalog;
pub mod constraint;
pub mod error;
pub mod fetcher;
pub mod lister;
pub mod natural;
pub mod padding;
pub mod resolver;
pub mod store;
pub mod stores;
