//! Hydration Module
//!
//! Read-only view population at the collaborator boundary. Hydrators
//! consume session and credential state; rendering itself stays
//! external, reachable only through the fetch and view contracts.

pub mod partials;
pub mod profile;

pub use partials::{load_partial, PartialContent, PartialFetcher};
pub use profile::{hydrate_profile, session_summary, ProfileFields, SessionSummary};
