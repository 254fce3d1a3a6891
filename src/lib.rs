//! Bracketed root finding for scalar functions of one real variable.
//!
//! ┌ [`root_finding`] : bisection, Müller's method and regula falsi, each 
//! │                    returning a [`root_finding::report::RootFindingReport`] 
//! │                    that carries the per-iteration [`root_finding::report::Trace`]
//! ├ [`export`]       : CSV export/import and console tables for traces 
//! └ [`functions`]    : sample equations used by the command line demo 

pub mod root_finding;
pub mod export;
pub mod functions;
