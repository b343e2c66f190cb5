//! The knowledge server tools.

mod get_context;
mod knowledge;
mod list_topics;
mod sprints;

pub use get_context::{GetContext, GetContextInput};
pub use knowledge::ListKnowledge;
pub use list_topics::ListTopics;
pub use sprints::{AddFeature, AddFeatureInput, GetSprint, GetSprintInput, ListSprints};

use serde::Deserialize;

/// Arguments of tools that take none. Extra keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NoInput {}
