use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, LimitParams, SubmitQuizRequest},
    models::dto::response::QuizSummaryResponse,
};

#[post("/api/quiz/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/quiz/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quiz/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.scoring_service.submit(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz/leaderboard/top")]
async fn get_leaderboard(
    state: web::Data<AppState>,
    query: web::Query<LimitParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let entries = state.scoring_service.leaderboard(params.limit()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[get("/api/quiz/history/recent")]
async fn get_recent_quizzes(
    state: web::Data<AppState>,
    query: web::Query<LimitParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let quizzes = state.quiz_service.recent_quizzes(params.limit()).await?;
    let summaries: Vec<QuizSummaryResponse> =
        quizzes.into_iter().map(QuizSummaryResponse::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

#[actix_web::delete("/api/quiz/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
