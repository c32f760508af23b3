//! Errtax Core Types and Definitions
//!
//! This crate provides the foundational types shared by the errtax loader and
//! compiler. It includes:
//!
//! - **Fragments**: Raw, unvalidated declarations and the [`fragment::FragmentSource`] trait
//! - **Levels**: Error severities ([`level::Level`])
//! - **Types**: Abstract metadata types and their resolution ([`types`] module)
//! - **Definitions**: Compiled error definitions ([`definition`] module)

pub mod definition;
pub mod fragment;
pub mod level;
pub mod types;
