//! Command line front end for calendar feed ingestion.

pub mod error;
pub mod feed;
