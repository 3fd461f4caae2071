//! np-jinja - Jinja templating layer for nhood-profiles
//!
//! This crate turns a typed [`np_core::ProfileRecord`] into the flat
//! [`ProfileContext`] the HTML template sees, and renders it through a
//! minijinja environment rooted at the project's templates directory.
//!
//! The context carries the fixed keys `neighborhood_name`, `loc_desc`,
//! `date_est`, `area`, `council_reps`, `parks`, `park_acres`, `trail_mi`,
//! `pub_fac`, `schools`, `groceries`, `hist_res`, `current_year`, `pop10`,
//! `pop_current`, `house10`, `house_current`, `new_dev` and `guide_docs`.

pub mod context;
pub mod environment;
pub mod error;

pub use context::{ProfileContext, LIST_SEPARATOR, NONE, PENDING};
pub use environment::ProfileTemplate;
pub use error::{JinjaError, JinjaResult};
