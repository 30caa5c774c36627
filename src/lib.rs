//! `mpi-glossary` — Sphinx glossary markup generation for MPI lesson material
//!
//! This library turns a registry of MPI function names, grouped by topical
//! lesson and optionally paired with MPI standard node identifiers, into the
//! reStructuredText substitution definitions and cross-reference fragments
//! that the lesson site loads as its global `rst_epilog`.

pub mod cli;
pub mod emit;
pub mod error;
pub mod observability;
pub mod registry;
