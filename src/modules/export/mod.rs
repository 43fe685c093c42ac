//! Export unit bezier curves to textual formats
//!
//! # Available Export Formats
//!
//! - [CSS](css/index.html) - the canonical `cubic-bezier(p1x, p1y, p2x, p2y)`
//!   functional notation

pub mod css;
