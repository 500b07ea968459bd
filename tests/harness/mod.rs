//! Shared testing harness for `closure-build` integration tests.

mod fake_tool;

pub use fake_tool::FakeTool;
pub use test_context::TestContext;
