//! Prompt construction for the completion API
//!
//! The system prompt is fixed; the user prompt wraps the caller's free text
//! and repeats the delimiter reminder on every call.

use indoc::formatdoc;

/// Opening marker of the PRD section
pub const PRD_START: &str = "===PRD START===";
/// Closing marker of the PRD section
pub const PRD_END: &str = "===PRD END===";
/// Opening marker of the Todo section
pub const TODO_START: &str = "===TODO START===";
/// Closing marker of the Todo section
pub const TODO_END: &str = "===TODO END===";

/// Build the fixed system instruction
pub fn build_system_prompt() -> String {
    formatdoc! {"
        You are a professional product manager and technical writer. Your task is to:
        1. Generate a detailed Product Requirements Document (PRD) based on the user's prompt.
        2. Generate a Todo list based ONLY on the requirements in the PRD you just generated.
        3. Format BOTH outputs as valid Markdown.
        4. Structure your response using these exact delimiters:
           {PRD_START}
           [PRD content in Markdown]
           {PRD_END}
           {TODO_START}
           [Todo list content in Markdown]
           {TODO_END}

        For the PRD:
        - Include a clear title and overview
        - List functional requirements
        - List technical requirements
        - Use proper Markdown formatting

        For the Todo list:
        - Break down the requirements into actionable tasks
        - Use Markdown checkbox format: \"- [ ] Task description\"
        - Organize tasks logically (e.g., frontend, backend, testing)
        - Include all necessary implementation details"
    }
}

/// Wrap the caller's project description in the per-request instruction frame
///
/// `user_input` is embedded verbatim. Empty input is accepted here; rejecting
/// it is the caller's job.
pub fn build_user_prompt(user_input: &str) -> String {
    formatdoc! {"
        Please create a PRD and Todo list for the following application idea:

        {user_input}

        Remember to use the specified delimiters ({PRD_START} ... {PRD_END} and {TODO_START} ... {TODO_END}) to separate the PRD and Todo list in your response."
    }
}
