use actix_web::http::{StatusCode, header};
use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use maud::Markup;
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info, warn};

use crate::controller::backend::GolfBackend;
use crate::controller::coaching::{find_course, unique_courses};
use crate::controller::insights::Insights;
use crate::controller::scan::extract_scores;
use crate::model::{Course, FREE_UPLOAD_LIMIT, Profile, ScanExtractionResult, ScoreForm};
use crate::view::coaching::{COURSE_FIELD, render_coaching_page};
use crate::view::insights::render_insights_page;
use crate::view::layout::Notice;
use crate::view::score_form::{IMAGE_URL_FIELD, render_score_form_page};
use crate::view::settings::render_settings_page;

pub const SETTINGS_PATH: &str = "settings";

pub struct AppState {
    pub backend: Box<dyn GolfBackend>,
    pub user_id: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Box<dyn GolfBackend>, user_id: Option<String>) -> Self {
        Self { backend, user_id }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(score_form))
        .route("/scan", web::post().to(scan_scorecard))
        .route("/scores", web::post().to(submit_scores))
        .route("/insights", web::get().to(insights))
        .route("/coaching", web::get().to(coaching))
        .route("/coaching", web::post().to(analyze_course))
        .route("/settings", web::get().to(settings))
        .route("/settings", web::post().to(save_settings))
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html")
        .body(markup.into_string())
}

/// Sends users without a profile to the settings page. A failed lookup
/// counts as no profile.
async fn require_profile(backend: &dyn GolfBackend) -> Option<HttpResponse> {
    match backend.fetch_profile().await {
        Ok(Some(_)) => return None,
        Ok(None) => info!("no profile yet, redirecting to settings"),
        Err(e) => warn!(error = %e, "profile lookup failed, treating as a new user"),
    }
    Some(
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, SETTINGS_PATH))
            .finish(),
    )
}

pub async fn score_form(state: Data<AppState>) -> HttpResponse {
    if let Some(redirect) = require_profile(state.backend.as_ref()).await {
        return redirect;
    }
    html_response(
        StatusCode::OK,
        render_score_form_page(&ScoreForm::new(), None),
    )
}

/// Runs a scorecard scan and merges whatever it finds into `form`. Free
/// accounts that used up their uploads are stopped before the scan.
pub async fn scan_into_form(
    backend: &dyn GolfBackend,
    image_url: &str,
    form: &mut ScoreForm,
) -> Notice {
    match backend.fetch_tier().await {
        Ok(tier) if tier.is_upload_limit_reached() => {
            info!(uploads = tier.upload_count, "free tier upload limit reached");
            return Notice::Error(format!(
                "Free accounts can scan {FREE_UPLOAD_LIMIT} scorecards. Enter your scores by hand or upgrade to keep scanning."
            ));
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "could not check upload tier, allowing scan"),
    }

    let response = match backend.request_scan(image_url).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "scan service request failed");
            return Notice::Error("Scorecard scan failed. Please try again.".to_string());
        }
    };
    if !response.is_success() {
        warn!(status = %response.status, message = %response.message, "scan service reported an error");
        return Notice::Error("Scorecard scan failed. Please try again.".to_string());
    }

    match extract_scores(&response.message) {
        ScanExtractionResult::Success { scores } => {
            let applied = form.merge_scan(&scores);
            info!(applied, keys = scores.len(), "merged scanned scores");
            Notice::Info(format!(
                "Filled {applied} holes from the scan. Check them before submitting."
            ))
        }
        ScanExtractionResult::Failure { reason } => {
            warn!(%reason, fragment = %response.message, "could not extract scores from scan");
            Notice::Error(reason.user_message().to_string())
        }
    }
}

pub async fn scan_scorecard(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    let fields = form.into_inner();
    let mut score_form = ScoreForm::from_fields(&fields);
    let image_url = fields
        .get(IMAGE_URL_FIELD)
        .map(String::as_str)
        .unwrap_or_default();

    let notice = scan_into_form(state.backend.as_ref(), image_url, &mut score_form).await;
    html_response(
        StatusCode::OK,
        render_score_form_page(&score_form, Some(&notice)),
    )
}

pub async fn submit_scores(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    let score_form = ScoreForm::from_fields(&form.into_inner());
    let user_id = state.user_id.as_deref().unwrap_or_default();

    let submission = match score_form.to_submission(user_id) {
        Ok(submission) => submission,
        Err(e) => {
            warn!(error = %e, "rejected score form");
            return html_response(
                StatusCode::BAD_REQUEST,
                render_score_form_page(&score_form, Some(&Notice::Error(e.to_string()))),
            );
        }
    };

    match state.backend.submit_score(&submission).await {
        Ok(()) => {
            info!(score_id = %submission.score_id, total = submission.total(), "submitted round");
            html_response(
                StatusCode::OK,
                render_score_form_page(
                    &ScoreForm::new(),
                    Some(&Notice::Info("Data submitted successfully!".to_string())),
                ),
            )
        }
        Err(e) => {
            error!(error = %e, "score submission failed");
            html_response(
                StatusCode::BAD_GATEWAY,
                render_score_form_page(
                    &score_form,
                    Some(&Notice::Error("Failed to submit data.".to_string())),
                ),
            )
        }
    }
}

pub async fn insights(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    let want_json = matches!(query.get("json").map(String::as_str), Some("1" | "true"));
    if let Some(redirect) = require_profile(state.backend.as_ref()).await {
        return redirect;
    }

    match state.backend.fetch_rounds().await {
        Ok(rounds) => {
            let insights = Insights::from_rounds(&rounds);
            if want_json {
                HttpResponse::Ok().json(&insights)
            } else {
                html_response(StatusCode::OK, render_insights_page(&insights, None))
            }
        }
        Err(e) => {
            error!(error = %e, "failed to fetch rounds");
            if want_json {
                HttpResponse::BadGateway().json(json!({ "error": e.to_string() }))
            } else {
                html_response(
                    StatusCode::BAD_GATEWAY,
                    render_insights_page(
                        &Insights::default(),
                        Some(&Notice::Error("Unable to load your rounds.".to_string())),
                    ),
                )
            }
        }
    }
}

async fn load_courses(backend: &dyn GolfBackend) -> Result<Vec<Course>, Notice> {
    match backend.fetch_courses().await {
        Ok(entries) => Ok(unique_courses(entries)),
        Err(e) => {
            error!(error = %e, "failed to load course list");
            Err(Notice::Error("Unable to load courses".to_string()))
        }
    }
}

pub async fn coaching(state: Data<AppState>) -> HttpResponse {
    if let Some(redirect) = require_profile(state.backend.as_ref()).await {
        return redirect;
    }
    match load_courses(state.backend.as_ref()).await {
        Ok(courses) => html_response(
            StatusCode::OK,
            render_coaching_page(&courses, None, None, None),
        ),
        Err(notice) => html_response(
            StatusCode::BAD_GATEWAY,
            render_coaching_page(&[], None, None, Some(&notice)),
        ),
    }
}

pub async fn analyze_course(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    let courses = match load_courses(state.backend.as_ref()).await {
        Ok(courses) => courses,
        Err(notice) => {
            return html_response(
                StatusCode::BAD_GATEWAY,
                render_coaching_page(&[], None, None, Some(&notice)),
            );
        }
    };

    let selected_id = form.get(COURSE_FIELD).map(String::as_str).unwrap_or_default();
    let Some(course) = find_course(&courses, selected_id) else {
        return html_response(
            StatusCode::BAD_REQUEST,
            render_coaching_page(
                &courses,
                None,
                None,
                Some(&Notice::Error("Select a course to analyze.".to_string())),
            ),
        );
    };

    match state.backend.analyze_course(course).await {
        Ok(analysis) => html_response(
            StatusCode::OK,
            render_coaching_page(&courses, Some(selected_id), Some(&analysis), None),
        ),
        Err(e) => {
            error!(error = %e, course_id = %course.course_id, "course analysis failed");
            html_response(
                StatusCode::BAD_GATEWAY,
                render_coaching_page(
                    &courses,
                    Some(selected_id),
                    None,
                    Some(&Notice::Error("Unable to analyze course".to_string())),
                ),
            )
        }
    }
}

pub async fn settings(state: Data<AppState>) -> HttpResponse {
    match state.backend.fetch_profile().await {
        Ok(Some(profile)) => html_response(StatusCode::OK, render_settings_page(&profile, None)),
        Ok(None) => html_response(
            StatusCode::OK,
            render_settings_page(
                &Profile::default(),
                Some(&Notice::Info(
                    "Complete your profile to start tracking rounds.".to_string(),
                )),
            ),
        ),
        Err(e) => {
            error!(error = %e, "failed to load profile");
            html_response(
                StatusCode::BAD_GATEWAY,
                render_settings_page(
                    &Profile::default(),
                    Some(&Notice::Error("Unable to load your profile.".to_string())),
                ),
            )
        }
    }
}

pub async fn save_settings(form: web::Form<Profile>, state: Data<AppState>) -> HttpResponse {
    let profile = form.into_inner().trimmed();
    if !profile.is_set_up() {
        return html_response(
            StatusCode::BAD_REQUEST,
            render_settings_page(
                &profile,
                Some(&Notice::Error("Enter your name to save your profile.".to_string())),
            ),
        );
    }

    match state.backend.save_profile(&profile).await {
        Ok(()) => {
            info!(home_course = %profile.home_course, "saved profile");
            html_response(
                StatusCode::OK,
                render_settings_page(
                    &profile,
                    Some(&Notice::Info("Profile updated successfully!".to_string())),
                ),
            )
        }
        Err(e) => {
            error!(error = %e, "profile save failed");
            html_response(
                StatusCode::BAD_GATEWAY,
                render_settings_page(
                    &profile,
                    Some(&Notice::Error("Unable to save your profile.".to_string())),
                ),
            )
        }
    }
}
