//! REST client library for the Brawl Stars API.
//!
//! Wraps the upstream statistics endpoints (player profile, club profile,
//! brawler catalog) using [`reqwest`], attaching bearer authentication on
//! every call and translating HTTP results into structured errors.

pub mod api;
