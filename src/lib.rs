//! Consistency check between a zebedee publishing master and its publish log.
//!
//! Every collection published within the configured window must still have
//! all of its directories in `master`, unless that collection or a newer one
//! deleted them.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
