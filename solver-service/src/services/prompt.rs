//! Prompt template for step-by-step math solutions.
//!
//! The `STEPS:` / `FINAL:` / `VERIFY:` labels are an agreement with the model.
//! Nothing in the service parses them; the model output is returned as-is.

/// Worked example embedded in every prompt.
pub const EXAMPLE_PROBLEM: &str = "Solve 2x + 5 = 13";

/// Expected answer shape for [`EXAMPLE_PROBLEM`].
pub const EXAMPLE_SOLUTION: &str = "STEPS:
2x + 5 = 13
2x = 13 - 5
2x = 8
x = 8/2
x = 4

FINAL:
x = 4

VERIFY:
2(4) + 5 = 13
8 + 5 = 13
13 = 13";

/// Substitute `problem` into the solving template.
///
/// The problem text is inserted verbatim, including when it is empty.
pub fn render_prompt(problem: &str) -> String {
    format!(
        "Solve this math problem step by step:
{problem}

Provide your solution in this structured format:
1. First, write \"STEPS:\" followed by each step of solving the equation on a new line
2. Then, write \"FINAL:\" followed by the final answer
3. Finally, write \"VERIFY:\" followed by the verification steps

Example for \"{EXAMPLE_PROBLEM}\":

{EXAMPLE_SOLUTION}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_is_substituted() {
        let prompt = render_prompt("Integrate x^2 dx");
        assert!(prompt.starts_with("Solve this math problem step by step:\nIntegrate x^2 dx\n"));
    }

    #[test]
    fn test_template_names_all_sections() {
        let prompt = render_prompt("1 + 1");
        for label in ["\"STEPS:\"", "\"FINAL:\"", "\"VERIFY:\""] {
            assert!(prompt.contains(label), "missing {label}");
        }
        assert!(prompt.contains(EXAMPLE_SOLUTION));
    }

    #[test]
    fn test_braces_in_problem_are_not_interpreted() {
        let prompt = render_prompt("f(x) = {x | x > 0}");
        assert!(prompt.contains("f(x) = {x | x > 0}"));
    }

    #[test]
    fn test_empty_problem_still_renders() {
        let prompt = render_prompt("");
        assert!(prompt.starts_with("Solve this math problem step by step:\n\n"));
    }
}
