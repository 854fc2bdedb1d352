pub mod kpi;

pub use kpi::*;
