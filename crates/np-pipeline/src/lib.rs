//! np-pipeline - Profile pipeline for nhood-profiles
//!
//! Stages, in run order:
//! 1. [`ProfileEnv::load`] checks the project and loads templates, layers,
//!    neighborhood names and reference spreadsheets.
//! 2. [`Collector::collect`] queries one neighborhood into a `ProfileRecord`.
//! 3. [`write_profile`] renders a record to `<name>.html`.
//! 4. [`export_all`] converts the profiles directory to PDF.
//!
//! [`publish_urls`] is a separate entry point run against published files.

pub mod collect;
pub mod env;
pub mod error;
pub mod export;
pub mod publish;
pub mod render;
pub mod reporter;

pub use collect::Collector;
pub use env::ProfileEnv;
pub use error::{PipelineError, PipelineResult};
pub use export::{export_all, CommandConverter, PdfConverter};
pub use publish::{publish_urls, write_short_urls, ShortUrl, TinyUrl, UrlShortener};
pub use render::{build_profiles, write_profile};
pub use reporter::{run_step, Reporter, SilentReporter};
