// ──────────────────────────────────────────────────────────────────────────────
// ZwoForge core: stegtekst fra økt-sider → .zwo-dokumenter
// ──────────────────────────────────────────────────────────────────────────────

pub mod api;
pub mod assemble;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod grammar;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod page;
pub mod pipeline;
pub mod segment;
pub mod storage;
pub mod zwo;

#[cfg(feature = "python")]
mod py;

pub use api::{compile_html_json, compile_page_json};
pub use assemble::{assemble, assemble_with};
pub use config::{load_config, parse_config, save_config, CompileConfig};
pub use error::{CompileError, ParseError};
pub use fetch::{load_page, HttpPageSource, PageSource, StaticPageSource};
pub use grammar::{classify, classify_with, ClassifyOptions, IntervalOffHours};
pub use metrics::Metrics;
pub use models::{ParsedStep, RampLabel, RawStep, StepPosition, WorkoutDocument, WorkoutMeta};
pub use normalize::{normalize_duration, normalize_power};
pub use page::{extract_page, ScrapedPage};
pub use pipeline::{compile_page, CompiledPage, CompiledWorkout, GroupFailure};
pub use segment::{segment, DEFAULT_GAP_THRESHOLD};
pub use storage::write_workouts;
pub use zwo::{file_name, numbered_file_name, serialize, Numbering};
