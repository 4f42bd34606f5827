//! # Drills - console practice tools
//!
//! Two independent interactive tools sharing one input abstraction:
//!
//! - **Temperature logger**: reads readings until `q`, rejects malformed or
//!   out-of-range entries, and reports the count and average.
//! - **Multiplication table**: prints an N×N grid and optionally asks one
//!   random practice question.
//!
//! ## Modules
//!
//! - [`input`] - `LineSource` trait with console, file and scripted sources
//! - [`temperature`] - validation, running statistics and the logging loop
//! - [`table`] - size selection, grid rendering and the practice quiz
//! - [`config`] - YAML configuration with defaults and validation
//!
//! ## Example
//!
//! ```
//! use drills::input::ScriptedSource;
//! use drills::temperature::TemperatureLogger;
//!
//! let mut logger = TemperatureLogger::default();
//! let mut source = ScriptedSource::new(["50", "200", "abc", "q"]);
//! let mut out = Vec::new();
//!
//! let stats = logger.run(&mut source, &mut out).unwrap();
//! assert_eq!(stats.count(), 1);
//! assert_eq!(stats.average(), 50.0);
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod table;
pub mod temperature;
pub mod ui;
