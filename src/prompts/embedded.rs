//! Embedded default prompt templates
//!
//! Compiled into the binary and used when no override file is found.
//! The example checklist lines are load-bearing: extraction matches
//! their exact prefix, so edits here must keep `- [ ] Idea:` and
//! `- [ ]` byte-for-byte.

/// Brainstorm prompt: asks for 3-5 ideas as `- [ ] Idea:` lines
pub const BRAINSTORM: &str = r#"Let's brainstorm some ideas about: {{{goal}}}

Here's the context:
1. Previous ideas from our session:
{{#if existing_items}}{{{existing_items}}}{{else}}No previous ideas yet.{{/if}}
2. Relevant files in chat:
{{#if file_context}}{{{file_context}}}{{else}}No files currently in chat{{/if}}

Please suggest 3-5 specific, actionable ideas that:
- Directly address the prompt: {{{goal}}}
- Are relevant to the files and context
- Are technically feasible given the current codebase
- Include clear explanations of how they would work

Format requirements:
- Each idea must start with "- [ ] Idea: "
- Include a brief explanation after each idea
- Keep each idea concise (1-2 sentences)
- Reference specific files or code when relevant

Example format:
- [ ] Idea: Implement feature X using approach Y
  This would solve problem Z by doing A, B, and C
  Relevant files: file1.py, file2.js

Please only respond with properly formatted ideas, no extra commentary.
"#;

/// Plan prompt: asks for 3-5 tasks or milestones as `- [ ]` bullets
pub const PLAN: &str = r#"Let's create a project plan for: {{{goal}}}

Current project files:
{{#if file_context}}{{{file_context}}}{{else}}No files currently in chat{{/if}}

Here are the existing plan items:
{{#if existing_items}}{{{existing_items}}}{{else}}No existing plan items yet.{{/if}}

Please suggest 3-5 new tasks or milestones, formatted as markdown bullet points:
- [ ] Task:
"#;

/// Look up an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "brainstorm" => Some(BRAINSTORM),
        "plan" => Some(PLAN),
        _ => None,
    }
}
