use crate::batch;
use crate::cache::Cache;
use crate::dto::BatchRequest;
use crate::dto::BatchResponse;
use crate::dto::ErrorResponse;
use crate::dto::GameRequest;
use crate::dto::GameResponse;
use crate::errors::GameError;
use crate::handler;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let cache: Arc<dyn Cache> = crate::db().await;
        let state = web::Data::new(cache);
        log::info!("starting wordlife server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/cgol/game", web::post().to(play))
                .route("/cgol/batch", web::post().to(play_batch))
                .route("/cgol/health", web::get().to(health))
        })
        .workers(4)
        .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
        .run()
        .await
    }
}

async fn play(cache: web::Data<Arc<dyn Cache>>, body: web::Json<GameRequest>) -> impl Responder {
    match handler::handle(cache.as_ref().as_ref(), &body.word).await {
        Ok(result) => HttpResponse::Ok().json(GameResponse::from(result)),
        Err(err) => error_response(err),
    }
}

async fn play_batch(
    cache: web::Data<Arc<dyn Cache>>,
    body: web::Json<BatchRequest>,
) -> impl Responder {
    let mut rng = rand::rng();
    match batch::run_batch(cache.as_ref().as_ref(), &mut rng, body.n_words).await {
        Ok((word, result)) => HttpResponse::Ok().json(BatchResponse::new(word, result)),
        Err(err) => error_response(err),
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn error_response(err: GameError) -> HttpResponse {
    let body = ErrorResponse {
        detail: err.detail(),
    };
    match err {
        GameError::BadType
        | GameError::EmptyWord
        | GameError::NonAscii
        | GameError::SeedTooLarge
        | GameError::EmptyBatch => HttpResponse::BadRequest().json(body),
        GameError::CacheUnavailable(_) => HttpResponse::Ok().json(body),
        GameError::EngineInternal(_) => HttpResponse::InternalServerError().json(body),
    }
}
