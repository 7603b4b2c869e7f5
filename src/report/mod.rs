//! Output assembly: the outline and analysis JSON shapes.

mod analysis;
mod json;

pub use analysis::{Analysis, AnalysisMetadata, RankedSection, SubsectionEntry};
pub use json::{to_json, JsonFormat};
