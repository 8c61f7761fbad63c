//! Awards, certificates and other dated milestones, each with an optional image.
pub mod adapter;
pub mod application;
pub mod domain;
