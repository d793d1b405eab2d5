mod certification;
mod organization;
mod project;

pub use certification::Certification;
pub use organization::{Organization, OrganizationKind};
pub use project::{DesignProject, PortfolioProject, RegularProject};

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// Entry of a content collection persisted by a repository
pub trait ContentItem:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Collection name, also the file stem on disk
    const COLLECTION: &'static str;

    /// Singular name used in client messages, e.g. "Project"
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Prefix for generated ids, e.g. "cert" in "cert-1719000000000"
    fn id_prefix(&self) -> &'static str;
}
