// Text assist: the three wording operations plus whole-record analysis, all
// backed by the Gemini client. All calls go through llm_client — no direct
// API traffic here.

pub mod handlers;
pub mod ops;
pub mod prompts;
