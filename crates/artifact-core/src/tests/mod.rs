/*! Test coverage for artifact generation.
 *
 * Artifacts are consumed by tooling that expects stable ordering, stripped ABIs and debug data
 * that follows its function. These tests pin down each transformation rule and every
 * construction failure.
 */

mod abi_tests;
mod function_tests;
