//! Analysis domain
//!
//! Types describing one analysis run, from per-slot extraction outcomes to
//! the validated request handed to the prompt assembler and the final
//! markdown result.
//!
//! ```text
//! ExtractionReport ──(gate)──▶ AnalysisRequest ──(generate)──▶ AnalysisResult
//! ```

mod phase;
mod report;
mod request;
mod result;
mod task_type;

pub use phase::{GenerationTask, Phase};
pub use report::{ExtractionReport, Slot, SlotOutcome, SlotStatus};
pub use request::{AnalysisRequest, MAX_COMPETITORS};
pub use result::AnalysisResult;
pub use task_type::TaskType;
