//! Property-based tests for the Kruskal minimum spanning forest.
//!
//! Verifies the forest against an independent Prim oracle, validates
//! structural invariants (acyclicity, edge count, reachability), and checks
//! that repeated runs agree on the same input.

mod oracle;
mod structural;
