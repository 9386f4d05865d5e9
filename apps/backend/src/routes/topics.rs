use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::auth::{authorize_owned_mutation, ensure_consistent_id, ensure_owner, OwnershipClaim};
use crate::entities::{NewTopic, Topic, TopicPatch};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CurrentProfessor;
use crate::state::app_state::AppState;

fn not_found(id: i64) -> AppError {
    AppError::not_found(ErrorCode::TopicNotFound, format!("Topic {id} not found"))
}

async fn load_topic(app_state: &AppState, id: i64) -> Result<Topic, AppError> {
    app_state
        .store
        .find_topic_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn get_topic(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let topic = load_topic(&app_state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(topic))
}

/// Create a topic; a professor may only publish topics under their own id.
async fn create_topic(
    current: CurrentProfessor,
    body: web::Json<NewTopic>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let new_topic = body.into_inner();
    let owner = new_topic.professor_id.unwrap_or(current.id);

    ensure_owner(OwnershipClaim {
        authenticated: current.id,
        owner,
    })?;
    new_topic.validate()?;

    let topic = app_state.store.create_topic(owner, new_topic).await?;
    Ok(HttpResponse::Ok().json(topic))
}

async fn update_topic(
    current: CurrentProfessor,
    path: web::Path<i64>,
    patch: web::Json<TopicPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = patch.into_inner();

    // Tampering is reported even for topics that do not exist.
    ensure_consistent_id(id, patch.id)?;

    let topic = load_topic(&app_state, id).await?;
    authorize_owned_mutation(current.id, id, patch.id, topic.professor_id, patch.professor_id)?;

    let updated = app_state
        .store
        .update_topic(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(updated))
}

async fn delete_topic(
    current: CurrentProfessor,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let topic = load_topic(&app_state, id).await?;

    ensure_owner(OwnershipClaim {
        authenticated: current.id,
        owner: topic.professor_id,
    })?;

    if !app_state.store.delete_topic(id).await? {
        return Err(not_found(id));
    }

    Ok(HttpResponse::Ok().json(json!({ "id": id, "deleted": true })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_topic)).service(
        web::resource("/{id}")
            .route(web::get().to(get_topic))
            .route(web::put().to(update_topic))
            .route(web::delete().to(delete_topic)),
    );
}
