//! Repository implementations on `KomplexService`.
//!
//! Each module adds `impl KomplexService` methods for one concern.

pub mod assignment;
pub mod completion;
pub mod course;
pub mod dashboard;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod seed;
