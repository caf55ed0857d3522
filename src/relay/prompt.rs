// System prompt for the portfolio assistant

use serde_json::{json, Value};

use crate::content::resume::PROJECTS;

pub fn system_prompt() -> String {
    let mut prompt = String::from(
        "You are the assistant on Dayyan Hamid's portfolio site. \
         Answer questions about these projects briefly and accurately:\n",
    );
    for project in PROJECTS.iter() {
        prompt.push_str(&format!("- {}: {}\n", project.name, project.description));
    }
    prompt
}

/// Chat-completion message list: system prompt, then the user's message
pub fn build_messages(message: &str) -> Value {
    json!([
        { "role": "system", "content": system_prompt() },
        { "role": "user", "content": message },
    ])
}
