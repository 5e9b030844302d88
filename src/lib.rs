// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Float-heavy animation math
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D bookshelf animation and interaction state machine.
//!
//! Folio keeps a shelf of animated books consistent while three drivers
//! compete for their transforms: scroll-driven orbital placement,
//! click-driven open/close timelines, and hover-driven page-turn previews.
//! Rendering is left to the host; the crate produces one transform per
//! book per frame.
//!
//! # Key entry points
//!
//! - [`scene::ShelfScene`] - the state machine, fed with
//!   [`input::ShelfEvent`]s and ticked once per frame
//! - [`scene::place`] - pure orbit placement
//! - [`options::Options`] - runtime configuration (orbit paths, timeline
//!   durations, clip fractions, scroll recovery, camera)
//! - [`assets`] - asynchronous book loading against a TOML manifest
//! - [`scroll::ScrollDriver`] - the host's scroll seam
//!
//! # Frame model
//!
//! Everything runs on one thread. Events are handled as they arrive;
//! [`scene::ShelfScene::tick`] advances clips and timelines, resolves
//! per-book settle signals, polls the shared close-all handle, and finally
//! composes every displayed transform. The tick doubles as the executor
//! for the crate's futures, which are only ever polled with
//! `now_or_never`.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod scroll;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::FolioError;
pub use input::ShelfEvent;
pub use options::Options;
pub use scene::ShelfScene;
