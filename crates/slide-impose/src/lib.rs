pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod plan;
pub mod render;
pub mod selection;
pub mod source;
mod stats;
pub mod text;
mod types;

pub use impose::{ImposedDocument, impose_source, process, process_blocking, save_pdf};
pub use options::*;
pub use plan::{ImpositionPlan, Sheet, plan_sheets};
pub use selection::{PageRange, select_pages};
pub use source::{PageSource, PdfiumSource, resolve_title};
pub use stats::calculate_statistics;
pub use types::*;
