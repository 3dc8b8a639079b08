//! Data-driven content definitions and loaders.
//!
//! This crate houses the static Fantasy Quest content and provides loaders for
//! RON/TOML data files:
//! - The campaign: story text and the ordered scenarios (data-driven via RON)
//! - Game configuration: starting stats and battle rules (data-driven via TOML)
//!
//! Both files are embedded in the crate and can be overridden from disk.
//! Loaders validate everything up front, so a loaded campaign is always
//! playable.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CampaignContent, CampaignLoader, CampaignSpec, ConfigLoader, LoadResult, ScenarioSpec,
};
