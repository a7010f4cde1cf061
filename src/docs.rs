use crate::api::leave_request::{CreateLeave, LeaveResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Request Service API",
        version = "1.0.0",
        description = r#"
## Leave Request Tracking Service

A minimal service for submitting and deciding employee leave requests.

### 🔹 Key Features
- **Submit a leave request** — requests for 5 days or fewer are approved automatically
- **Manual decisions** — approve or reject any request by id
- **Lookup** — fetch a single request or list every request

### 📦 Response Format
- JSON-based RESTful responses
- Requests are held in memory for the lifetime of the process

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
    ),
    components(
        schemas(
            CreateLeave,
            LeaveResponse,
        )
    ),
    tags(
        (name = "Leave", description = "Leave request APIs"),
    )
)]
pub struct ApiDoc;
