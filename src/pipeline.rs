//! The 15-stage cleaning pipeline.
//!
//! A [`cleaning::CleaningPipeline`] is built once from a
//! [`resources::PipelineResources`] snapshot and is then shared read-only
//! across threads. [`flags::StageFlags`] choose the optional stages for each
//! run, [`trace`] records intermediate texts, and [`batch`] cleans whole
//! collections in parallel.

pub mod batch;
pub mod cleaning;
pub mod flags;
pub mod resources;
pub mod trace;
