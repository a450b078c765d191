//! Numbered process steps: `1. **Title** description`

use serde::{Deserialize, Serialize};

use super::lines::{classify, LineKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: u32,
    pub title: String,
    pub description: String,
}

/// Parse steps; a description runs until the next numbered bold item or the end
pub fn parse_process_steps(content: &str) -> Vec<ProcessStep> {
    let mut steps: Vec<ProcessStep> = Vec::new();
    let mut description: Vec<&str> = Vec::new();

    for line in content.lines() {
        match classify(line) {
            LineKind::NumberedBold {
                number,
                title,
                rest,
            } => {
                finish_step(&mut steps, &mut description);
                steps.push(ProcessStep {
                    number,
                    title: title.to_string(),
                    description: String::new(),
                });
                description.push(rest);
            }
            _ if !steps.is_empty() => description.push(line),
            _ => {}
        }
    }
    finish_step(&mut steps, &mut description);

    steps.retain(|step| !step.title.is_empty());
    steps
}

fn finish_step(steps: &mut [ProcessStep], description: &mut Vec<&str>) {
    if let Some(last) = steps.last_mut() {
        last.description = description.join("\n").trim().to_string();
    }
    description.clear();
}
