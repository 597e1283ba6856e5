use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wiki_quiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_startup();

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::generate_quiz)
            .service(handlers::submit_quiz)
            .service(handlers::get_leaderboard)
            .service(handlers::get_recent_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::delete_quiz)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
    })
    .bind((host, port))?
    .run()
    .await
}
