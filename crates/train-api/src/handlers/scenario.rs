//! Scenario and follow-up action handlers.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use train_models::{
    continuation_prompt, scenario_prompt, ClipRole, ScenarioSelection, DEFAULT_PREVIOUS_SCENARIO,
};
use train_storage::SessionStore;

use crate::config::ScenarioSource;
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::session::{existing_session, session_or_new};
use crate::state::AppState;
use crate::templates;

/// Shown when an action arrives before any scenario clip exists.
pub const MISSING_SCENARIO_MESSAGE: &str = "Stage 1 video not found. Generate scenario first.";

/// Scenario form fields.
#[derive(Debug, Deserialize)]
pub struct ScenarioForm {
    pub task_setting: String,
    pub task_complexity: String,
    pub cognitive_load: String,
}

/// Follow-up action form.
#[derive(Debug, Deserialize, Validate)]
pub struct ActionForm {
    #[validate(length(min = 1, max = 2000, message = "describe an action"))]
    pub action: String,
}

/// Build and store the scenario prompt, generate the scenario clip, and
/// render it with the action form.
///
/// The session cookie goes out with error responses too: once the prompt is
/// stored the session exists, and the next submit reuses it.
pub async fn generate_scenario(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ScenarioForm>,
) -> Result<(CookieJar, Html<String>), (CookieJar, ApiError)> {
    let selection = match ScenarioSelection::parse(
        &form.task_setting,
        &form.task_complexity,
        &form.cognitive_load,
    ) {
        Ok(selection) => selection,
        Err(e) => return Err((jar, ApiError::bad_request(e.to_string()))),
    };

    let (session, jar) = session_or_new(&state.store, jar);
    let _guard = state.locks.lock(session.id()).await;

    match render_scenario(&state, &session, &selection).await {
        Ok(page) => Ok((jar, page)),
        Err(e) => Err((jar, e)),
    }
}

async fn render_scenario(
    state: &AppState,
    session: &SessionStore,
    selection: &ScenarioSelection,
) -> ApiResult<Html<String>> {
    let prompt = scenario_prompt(selection);
    session.write_prompt(prompt.as_str()).await?;

    let source = state.config.scenario_source;
    info!(session = %session.id(), source = %source, "Generating scenario");

    let clip = match source {
        ScenarioSource::Prompted => {
            state
                .generator
                .generate(prompt.as_str(), state.config.scenario_frames)
                .await?
        }
        ScenarioSource::Hosted => state.generator.generate_default().await?,
    };
    session.write_clip(ClipRole::Scenario, &clip).await?;
    metrics::record_scenario_generated(source.as_str());

    Ok(Html(templates::scenario_page(prompt.as_str())))
}

/// Generate a continuation from the stored prompt and the user's action,
/// then stitch the scenario's anchor onto it.
pub async fn generate_user_action(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ActionForm>,
) -> ApiResult<Html<String>> {
    let session = existing_session(&state.store, &jar)
        .ok_or_else(|| ApiError::missing_precondition(MISSING_SCENARIO_MESSAGE))?;
    let _guard = state.locks.lock(session.id()).await;

    let scenario = session
        .require_clip(ClipRole::Scenario)
        .await
        .map_err(|_| ApiError::missing_precondition(MISSING_SCENARIO_MESSAGE))?;

    let form = ActionForm {
        action: form.action.trim().to_string(),
    };
    form.validate()?;

    let previous = session.read_prompt().await?;
    let prompt = continuation_prompt(previous.as_deref(), &form.action);

    info!(session = %session.id(), "Generating continuation");
    let clip = state
        .generator
        .generate(prompt.as_str(), state.config.continuation_frames)
        .await?;
    let continuation = session.write_clip(ClipRole::Continuation, &clip).await?;

    let stitcher = state
        .stitcher
        .clone()
        .with_scratch_dir(session.scratch_dir().await?);
    stitcher
        .stitch(&scenario, &continuation, &session.clip_path(ClipRole::Final))
        .await?;
    metrics::record_action_stitched();

    let previous = previous.as_deref().unwrap_or(DEFAULT_PREVIOUS_SCENARIO);
    Ok(Html(templates::action_page(previous, &form.action)))
}
