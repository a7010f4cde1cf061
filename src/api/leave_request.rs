use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::leave_request::LeaveRequest;
use crate::store::LeaveRequestStore;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "Alice")]
    /// Employee requesting leave; free-form, may be omitted
    pub employee_name: Option<String>,
    #[schema(example = 3)]
    /// Number of days requested; values of 5 or fewer auto-approve
    pub days_requested: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LeaveResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    /// leave request id
    pub id: String,
    #[schema(example = "Alice")]
    /// employee the leave was requested for
    pub employee_name: Option<String>,
    #[schema(example = 3)]
    /// number of days requested
    pub days_requested: Option<i32>,
    #[schema(example = true)]
    /// approval decision; null only before any decision was recorded
    pub approved: Option<bool>,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    /// when the request was submitted
    pub request_date: DateTime<Utc>,
    #[schema(example = "2026-01-01T00:00:05Z", format = "date-time", value_type = String)]
    /// when the request was approved; null while not approved
    pub approval_date: Option<DateTime<Utc>>,
}

impl From<&LeaveRequest> for LeaveResponse {
    fn from(request: &LeaveRequest) -> Self {
        Self {
            id: request.id().to_owned(),
            employee_name: request.employee_name().map(str::to_owned),
            days_requested: request.days_requested(),
            approved: request.approved(),
            request_date: request.request_date(),
            approval_date: request.approval_date(),
        }
    }
}

/* =========================
Create leave request
========================= */
/// Swagger doc for create_leave endpoint
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request created",
         body = Object,
         example = json!({
            "message": "Leave request created",
            "id": "550e8400-e29b-41d4-a716-446655440000"
         })
        ),
        (status = 400, description = "Bad request")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<LeaveRequestStore>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    tracing::info!(
        employee_name = ?payload.employee_name,
        days_requested = payload.days_requested,
        "Received leave request"
    );

    let id = store.create(payload.employee_name, payload.days_requested);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request created",
        "id": id
    })))
}

/* =========================
Get one leave request
========================= */
/// Swagger doc for get_leave endpoint
#[utoipa::path(
    get,
    path = "/api/leave/{id}",
    params(
        ("id" = String, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveResponse),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    store: web::Data<LeaveRequestStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match store.get(&id) {
        Some(request) => Ok(HttpResponse::Ok().json(LeaveResponse::from(&request))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Leave request not found"
        }))),
    }
}

/* =========================
List leave requests
========================= */
/// Swagger doc for leave_list endpoint
#[utoipa::path(
    get,
    path = "/api/leave",
    responses(
        (status = 200, description = "All leave requests", body = [LeaveResponse])
    ),
    tag = "Leave"
)]
pub async fn leave_list(store: web::Data<LeaveRequestStore>) -> actix_web::Result<impl Responder> {
    let requests: Vec<LeaveResponse> = store.list().iter().map(LeaveResponse::from).collect();
    Ok(HttpResponse::Ok().json(requests))
}

/* =========================
Approve leave request
========================= */
/// Swagger doc for approve_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{id}/approve",
    params(
        ("id" = String, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave request approved", body = Object, example = json!({
            "message": "Leave request approved"
        })),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    store: web::Data<LeaveRequestStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    if !store.approve(&id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Leave request not found"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request approved"
    })))
}

/* =========================
Reject leave request
========================= */
/// Swagger doc for reject_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{id}/reject",
    params(
        ("id" = String, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave request rejected", body = Object, example = json!({
            "message": "Leave request rejected"
        })),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    store: web::Data<LeaveRequestStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    if !store.reject(&id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Leave request not found"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request rejected"
    })))
}
