//! Core data types and transformations for pan-genome class extraction.
//!
//! - [`GeneClass`](types::GeneClass): the four frequency classes and their thresholds
//! - [`Classification`](classify::Classification): partition of Rtab genes into classes
//! - [`GeneToLocus`](locus::GeneToLocus): join from gene identifier to the
//!   species-representative locus tag
//!
//! ## Thresholds
//!
//! | Class     | Presence fraction   |
//! |-----------|---------------------|
//! | core      | = 1.0               |
//! | soft_core | 0.95 ≤ f < 1.0      |
//! | shell     | 0.15 ≤ f < 0.95     |
//! | cloud     | f < 0.15            |

pub mod classify;
pub mod locus;
pub mod types;
