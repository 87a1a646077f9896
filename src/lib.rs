//! slfconv library
//!
//! This library converts canonical JSON keyboard layouts into the formats
//! used by layout analyzers: genkey, oxeylyzer and keymeow.
//!
//! ```no_run
//! use slfconv::convert::{self, Format, RenderOptions};
//! use slfconv::services::LayoutService;
//! use std::path::Path;
//!
//! let layout = LayoutService::load(Path::new("qwerty.json"))?;
//! let genkey = convert::render(&layout, Format::Genkey, &RenderOptions::default())?;
//! print!("{genkey}");
//! # Ok::<(), anyhow::Error>(())
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod models;
pub mod parser;
pub mod services;
