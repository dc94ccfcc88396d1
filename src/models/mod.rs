//! Data models for the portfolio site.
//!
//! Field names serialize in camelCase to match what the front end renders.

mod achievement;
mod certificate;
mod contact;
mod education;
mod experience;
mod portfolio;
mod profile;
mod project;
mod skill;

pub use achievement::*;
pub use certificate::*;
pub use contact::*;
pub use education::*;
pub use experience::*;
pub use portfolio::*;
pub use profile::*;
pub use project::*;
pub use skill::*;
