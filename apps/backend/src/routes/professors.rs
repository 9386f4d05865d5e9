use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::auth::{authorize_mutation, ensure_owner, OwnershipClaim};
use crate::entities::ProfessorPatch;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CurrentProfessor;
use crate::state::app_state::AppState;

fn not_found(id: i64) -> AppError {
    AppError::not_found(ErrorCode::ProfessorNotFound, format!("Professor {id} not found"))
}

async fn get_professor(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let professor = app_state
        .store
        .find_professor_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(professor))
}

async fn update_professor(
    current: CurrentProfessor,
    path: web::Path<i64>,
    patch: web::Json<ProfessorPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = patch.into_inner();

    authorize_mutation(current.id, id, patch.id)?;

    let updated = app_state
        .store
        .update_professor(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(updated))
}

async fn delete_professor(
    current: CurrentProfessor,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    ensure_owner(OwnershipClaim {
        authenticated: current.id,
        owner: id,
    })?;

    if !app_state.store.delete_professor(id).await? {
        return Err(not_found(id));
    }

    Ok(HttpResponse::Ok().json(json!({ "id": id, "deleted": true })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_professor))
            .route(web::put().to(update_professor))
            .route(web::delete().to(delete_professor)),
    );
}
