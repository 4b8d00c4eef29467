mod info;
#[allow(clippy::module_inception)]
mod optimizer;
mod templates;
mod usage;

pub use optimizer::{OptimizedResource, OptimizerOutput};
pub use templates::{ResourceLink, ResourceTemplate};
pub use usage::{Range, UsagePoint, UsagePointSet};

pub(crate) use optimizer::optimize_resources;
pub(crate) use templates::resource_templates;
