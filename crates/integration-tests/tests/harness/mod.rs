#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod server;

/// Completion text with both sections correctly delimited
pub const DELIMITED_REPLY: &str = "
===PRD START===
# Mock PRD
This is a test PRD
===PRD END===
===TODO START===
- [ ] Task 1
- [ ] Task 2
===TODO END===
    ";
