//! Webcalc - a four-function calculator delivered as a local web page.
//!
//! The server side is plain static delivery: one embedded HTML page served
//! over a local HTTP port. All calculation happens client-side in the page;
//! [`calculator`] is the testable reference model of the page's state
//! machine, one instance per session.

pub mod browser;
pub mod calculator;
pub mod config;
pub mod server;

pub use calculator::{CalcKey, Calculator, Operator};
pub use server::CalcServer;
