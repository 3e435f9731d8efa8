//! Shared domain types for the brawlgate workspace.
//!
//! Currently a single concern: player/club tag normalization and
//! validation ([`tag::Tag`]), used by both the upstream client and the
//! HTTP layer.

pub mod tag;
