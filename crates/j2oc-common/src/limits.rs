//! Centralized limits and thresholds for the translator.
//!
//! These constants bound recursive walks over resolver output. A
//! well-formed type graph never comes close to them; hitting one means the
//! upstream resolver produced a malformed graph, and the walk reports an
//! invariant violation instead of overflowing the stack.

/// Maximum nesting depth the import collector will traverse.
///
/// Every wrapper, array dimension, foreign reference, and type argument
/// adds one level. Real declarations nest a handful of levels; a graph
/// deeper than this contains a cycle through wrapper/array/foreign nesting.
pub const MAX_TYPE_NESTING_DEPTH: usize = 512;

/// Maximum length of an enclosing-declaration chain.
///
/// Walking from a nested declaration to its top-level compilation unit
/// must terminate within this many steps; a longer chain means the
/// declaration table links enclosing declarations in a cycle.
pub const MAX_ENCLOSING_DEPTH: usize = 64;
