//! Static tier and role catalogs
//!
//! Both catalogs are deploy-time constants: the tier table may be patched
//! by configuration at engine construction, the role matrix is fixed.
//! Neither mutates at runtime, so shared references are safe across any
//! number of concurrent callers.

mod roles;
mod tiers;

pub use roles::RoleCatalog;
pub use tiers::TierCatalog;
