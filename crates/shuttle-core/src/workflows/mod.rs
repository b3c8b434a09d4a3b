//! The public API layer: complete QM/MM procedures built from the `core`
//! and `engine` layers. Currently one workflow exists, the single-step
//! translation the driver invokes once per simulation step.

pub mod step;
