//! FirstRay single-sphere ray caster
//!
//! Casts one ray per pixel through a pinhole camera into a scene containing
//! exactly one sphere. Hitting rays shade red, missing rays shade a vertical
//! sky gradient. Output is an interleaved RGB byte buffer written as JPEG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod error;
pub mod output;
pub mod ray;
pub mod shade;
pub mod sphere;
