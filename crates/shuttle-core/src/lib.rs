//! # QM Shuttle Core Library
//!
//! A format-translation bridge between a molecular-dynamics driver and an
//! external quantum-chemistry engine, used to perform QM/MM energy and force
//! evaluations once per simulation step.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless, step-scoped data models
//!   (`QmAtom`, `PointCharge`, `StepResult`), the line-oriented text formats
//!   exchanged with the driver and the engine, and unit conversion between the
//!   driver's conventions and the engine's atomic units.
//!
//! - **[`engine`]: The Logic Core.** Owns everything about the external
//!   quantum-chemistry engine: the injected runtime configuration, the scratch
//!   file layout derived from the driver's step file, the blocking subprocess
//!   invocation, and the guard that removes transient engine files on every
//!   exit path.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties `engine` and `core` together to execute one complete QM/MM step:
//!   read the driver input, emit the engine input, run the engine, translate
//!   its output, and write the driver result file.

pub mod core;
pub mod engine;
pub mod workflows;
