use serde::{Deserialize, Serialize};

/// Body of `POST /api/py/solve-math`.
///
/// `problem` is required but may be empty; it is forwarded unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MathProblem {
    pub problem: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub problem: String,
    pub solution: String,
    pub status: SolveStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_response_shape() {
        let body = serde_json::to_value(SolveResponse {
            problem: "1 + 1".to_string(),
            solution: "FINAL:\n2".to_string(),
            status: SolveStatus::Success,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "problem": "1 + 1",
                "solution": "FINAL:\n2",
                "status": "success"
            })
        );
    }

    #[test]
    fn test_problem_field_is_required() {
        assert!(serde_json::from_str::<MathProblem>("{}").is_err());
        let empty: MathProblem = serde_json::from_str(r#"{"problem": ""}"#).unwrap();
        assert_eq!(empty.problem, "");
    }
}
