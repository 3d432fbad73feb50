//! Parsing and reporting for the CNCF LFX Mentorship program README.
//!
//! `readme_parser` reconstructs structured project records from the loosely
//! formatted roster document, `table_renderer` turns them into the markdown
//! table tracked in the archive, `archive_parser` reads that archive back,
//! and `stats` summarizes it.

pub mod archive_parser;
pub mod readme_parser;
pub mod report;
pub mod stats;
pub mod table_renderer;
