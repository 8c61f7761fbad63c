//! Lightweight project cards shown on the portfolio landing page.
pub mod adapter;
pub mod application;
pub mod domain;
