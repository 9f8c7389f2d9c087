//! Plan Tracker - progress reporting for multi-year development plans
//!
//! A plan is organised as lines, components, bets and initiatives, with
//! measurable goals at the leaves. This crate aggregates quarterly progress
//! up to a cutoff and produces band distributions, a rolled-up progress
//! tree and weighted rankings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
