//! # cspops-base
//!
//! Core library for checking and translating constraint satisfaction
//! problem (CSP) models.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ops        → Operation surface (check, consistency, translate, execute)
//!   ↓
//! check      → Consistency checking, reasoner error remapping
//!   ↓
//! reasoner   → Reasoner trait, process-backed reasoner, configuration
//!   ↓
//! syntax     → YAML / JSON / intermediate adapters, SyntaxError
//!   ↓
//! dummy      → Intermediate syntax lexer, statement parser, writer
//!   ↓
//! model      → CspModel, Statement
//!   ↓
//! annotation → Annotation, ResponseEnvelope
//!   ↓
//! base       → Primitives (Mark, line splitting)
//! ```

// ============================================================================
// MODULES (dependency order: base → annotation → model → dummy → syntax →
// reasoner → check → ops)
// ============================================================================

/// Foundation types: Mark, line splitting
pub mod base;

/// Annotations and response envelopes
pub mod annotation;

/// Structured CSP model and statements
pub mod model;

/// Intermediate ("dummy") syntax: lexer, parser, writer
pub mod dummy;

/// Surface syntax adapters
pub mod syntax;

/// External reasoner seam
pub mod reasoner;

/// Consistency checking
pub mod check;

/// Operation surface
pub mod ops;

mod error;

pub use annotation::{Annotation, ResponseEnvelope, Severity, Status};
pub use base::Mark;
pub use check::{ConsistencyChecker, Document};
pub use error::OpsError;
pub use model::{CspModel, Statement, StatementKind};
pub use ops::{ExecuteFormat, ExecuteResponse, Operations, ReasonerReport};
pub use reasoner::{LocalReasoner, Reasoner, ReasonerConfig, ReasonerOutcome};
pub use syntax::{SyntaxAdapter, SyntaxError, SyntaxTag};
