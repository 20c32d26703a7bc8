//! Transpiler tests.

mod errors;
