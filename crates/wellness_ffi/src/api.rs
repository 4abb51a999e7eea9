//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose every façade operation as a sync, string-typed bridge function.
//! - Decode records from JSON using the UI field names and encode results
//!   the same way.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Failures carry a stable `error_code` from the façade taxonomy; payloads
//!   that do not decode report `invalid_input`.
//! - Meeting ids are passed to the façade verbatim.
//! - The store is opened per call from the resolved configuration; the
//!   bridge holds no store of its own.

use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::OnceLock;
use wellness_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Activity, CoreConfig, FocusBlock, Meeting, ServiceError, ServiceResult, UserProfile,
    WellnessFacade, WellnessStore,
};

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

// Same code the façade uses for records that fail validation.
const INVALID_INPUT_CODE: &str = "invalid_input";
const STORAGE_UNAVAILABLE_CODE: &str = "storage_unavailable";

/// Response envelope shared by all store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellnessResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Stable failure code (`not_authenticated`, `not_found`, ...).
    pub error_code: Option<String>,
    /// Human-readable diagnostics.
    pub message: String,
    /// JSON-encoded result, when the operation returns one.
    pub payload_json: Option<String>,
}

impl WellnessResponse {
    fn success(message: impl Into<String>, payload_json: Option<String>) -> Self {
        Self {
            ok: true,
            error_code: None,
            message: message.into(),
            payload_json,
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_code: Some(code.to_string()),
            message: message.into(),
            payload_json: None,
        }
    }
}

/// Health check. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Same `level + log_dir` is idempotent; reconfiguration is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_create_or_update_user_profile(profile_json: String) -> WellnessResponse {
    with_facade(|facade| save_profile_on(facade, &profile_json))
}

/// Payload is the profile JSON, or `null` before onboarding.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_get_user_profile(caller: String) -> WellnessResponse {
    with_facade(|facade| respond(facade.get_user_profile(&caller), "Profile loaded."))
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_add_activity(caller: String, activity_json: String) -> WellnessResponse {
    with_facade(|facade| add_activity_on(facade, &caller, &activity_json))
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_get_activities(caller: String) -> WellnessResponse {
    with_facade(|facade| respond(facade.get_activities(&caller), "Activities loaded."))
}

/// Records a stress check-in; payload is the stored activity.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_add_stress_check_in(caller: String, level: i64) -> WellnessResponse {
    with_facade(|facade| {
        respond(
            facade.add_stress_check_in(&caller, level),
            "Stress check-in recorded.",
        )
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_add_focus_block(caller: String, focus_block_json: String) -> WellnessResponse {
    with_facade(|facade| add_focus_block_on(facade, &caller, &focus_block_json))
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_get_focus_blocks(caller: String) -> WellnessResponse {
    with_facade(|facade| respond(facade.get_focus_blocks(&caller), "Focus blocks loaded."))
}

/// Appends a meeting; payload is the meeting id as a JSON string.
#[flutter_rust_bridge::frb(sync)]
pub fn wellness_add_meeting(caller: String, meeting_json: String) -> WellnessResponse {
    with_facade(|facade| add_meeting_on(facade, &caller, &meeting_json))
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_get_meetings(caller: String) -> WellnessResponse {
    with_facade(|facade| respond(facade.get_meetings(&caller), "Meetings loaded."))
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_remove_meeting(caller: String, meeting_id: String) -> WellnessResponse {
    with_facade(|facade| {
        respond_unit(
            facade.remove_meeting(&caller, &meeting_id),
            "Meeting removed.",
        )
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn wellness_mark_complete(caller: String, meeting_id: String) -> WellnessResponse {
    with_facade(|facade| {
        respond_unit(
            facade.mark_complete(&caller, &meeting_id),
            "Meeting completed.",
        )
    })
}

fn save_profile_on<C: wellness_core::Clock>(
    facade: &WellnessFacade<C>,
    profile_json: &str,
) -> WellnessResponse {
    match decode::<UserProfile>(profile_json, "profile") {
        Ok(profile) => respond_unit(
            facade.create_or_update_user_profile(&profile),
            "Profile saved.",
        ),
        Err(response) => response,
    }
}

fn add_activity_on<C: wellness_core::Clock>(
    facade: &WellnessFacade<C>,
    caller: &str,
    activity_json: &str,
) -> WellnessResponse {
    match decode::<Activity>(activity_json, "activity") {
        Ok(activity) => respond_unit(facade.add_activity(caller, &activity), "Activity added."),
        Err(response) => response,
    }
}

fn add_focus_block_on<C: wellness_core::Clock>(
    facade: &WellnessFacade<C>,
    caller: &str,
    focus_block_json: &str,
) -> WellnessResponse {
    match decode::<FocusBlock>(focus_block_json, "focus block") {
        Ok(block) => respond_unit(
            facade.add_focus_block(caller, &block),
            "Focus block scheduled.",
        ),
        Err(response) => response,
    }
}

fn add_meeting_on<C: wellness_core::Clock>(
    facade: &WellnessFacade<C>,
    caller: &str,
    meeting_json: &str,
) -> WellnessResponse {
    match decode::<Meeting>(meeting_json, "meeting") {
        Ok(meeting) => respond(facade.add_meeting(caller, &meeting), "Meeting added."),
        Err(response) => response,
    }
}

fn decode<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, WellnessResponse> {
    serde_json::from_str(json).map_err(|err| {
        WellnessResponse::failure(INVALID_INPUT_CODE, format!("invalid {what} payload: {err}"))
    })
}

fn respond<T: Serialize>(result: ServiceResult<T>, message: &str) -> WellnessResponse {
    match result {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(json) => WellnessResponse::success(message, Some(json)),
            Err(err) => WellnessResponse::failure(
                STORAGE_UNAVAILABLE_CODE,
                format!("failed to encode result: {err}"),
            ),
        },
        Err(err) => failure_from(err),
    }
}

fn respond_unit(result: ServiceResult<()>, message: &str) -> WellnessResponse {
    match result {
        Ok(()) => WellnessResponse::success(message, None),
        Err(err) => failure_from(err),
    }
}

fn failure_from(err: ServiceError) -> WellnessResponse {
    WellnessResponse::failure(err.code(), err.to_string())
}

fn with_facade(f: impl FnOnce(&WellnessFacade) -> WellnessResponse) -> WellnessResponse {
    let config = CONFIG.get_or_init(CoreConfig::from_env);
    match WellnessStore::open(&config.db_path) {
        Ok(store) => f(&WellnessFacade::new(store)),
        Err(err) => {
            error!(
                "event=bridge_open module=ffi status=error error_code={} error={}",
                STORAGE_UNAVAILABLE_CODE, err
            );
            WellnessResponse::failure(
                STORAGE_UNAVAILABLE_CODE,
                format!("wellness store open failed: {err}"),
            )
        }
    }
}
