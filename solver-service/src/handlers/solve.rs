use crate::dtos::{MathProblem, SolveResponse, SolveStatus};
use crate::services::prompt::render_prompt;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Characters of the solution echoed into the log.
const LOG_PREVIEW_CHARS: usize = 100;

/// Render the prompt, delegate generation under the deadline, and wrap the text.
pub async fn solve_math(
    State(state): State<AppState>,
    payload: Result<Json<MathProblem>, JsonRejection>,
) -> Result<Json<SolveResponse>, AppError> {
    let Json(math_problem) =
        payload.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;

    tracing::info!(problem = %math_problem.problem, "Received math problem");

    let prompt = render_prompt(&math_problem.problem);

    tracing::info!(
        timeout_secs = state.delegate.timeout().as_secs_f64(),
        "Generating solution"
    );
    let solution = state
        .delegate
        .generate(prompt, state.generation_params.clone())
        .await
        .into_solution()?;

    let preview: String = solution.chars().take(LOG_PREVIEW_CHARS).collect();
    tracing::info!(solution = %preview, "Solution generated");

    Ok(Json(SolveResponse {
        problem: math_problem.problem,
        solution,
        status: SolveStatus::Success,
    }))
}
