use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Approval state of a leave request. `Pending` only exists for requests
/// built through [`LeaveRequest::empty`] before any decision; the normal
/// construction path decides immediately via the auto-approval rule.
/// `Rejected` covers both "not auto-approved, awaiting a manual decision"
/// and an explicit rejection — the wire format only distinguishes
/// true/false/null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Nullable-boolean view used at the serialization boundary.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ApprovalStatus::Pending => None,
            ApprovalStatus::Approved => Some(true),
            ApprovalStatus::Rejected => Some(false),
        }
    }
}

/// A single leave request and its approval outcome.
///
/// Requests for 5 days or fewer are approved automatically at construction;
/// anything longer waits for a manual decision through the store.
#[derive(Debug, Clone)]
pub struct LeaveRequest {
    id: String,
    employee_name: Option<String>,
    days_requested: Option<i32>,
    status: ApprovalStatus,
    request_date: DateTime<Utc>,
    approval_date: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Create a request and immediately apply the auto-approval rule:
    /// `days_requested <= 5` approves on the spot. Zero and negative day
    /// counts pass through unvalidated and auto-approve like any other
    /// small request.
    pub fn new(employee_name: Option<String>, days_requested: i32) -> Self {
        let mut request = Self::empty();
        request.employee_name = employee_name;
        request.days_requested = Some(days_requested);
        if days_requested <= 5 {
            request.status = ApprovalStatus::Approved;
            request.approval_date = Some(Utc::now());
        } else {
            request.status = ApprovalStatus::Rejected;
        }
        request
    }

    /// Bare request with only a fresh id and request date. Building block
    /// before field assignment; not used for externally-visible creation.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_name: None,
            days_requested: None,
            status: ApprovalStatus::Pending,
            request_date: Utc::now(),
            approval_date: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn employee_name(&self) -> Option<&str> {
        self.employee_name.as_deref()
    }

    pub fn days_requested(&self) -> Option<i32> {
        self.days_requested
    }

    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    pub fn approved(&self) -> Option<bool> {
        self.status.as_bool()
    }

    pub fn request_date(&self) -> DateTime<Utc> {
        self.request_date
    }

    pub fn approval_date(&self) -> Option<DateTime<Utc>> {
        self.approval_date
    }

    /// Record a decision. Approving stamps `approval_date` only if it is
    /// still absent; rejecting leaves the date untouched — callers that
    /// need "rejected means no approval date" clear it explicitly via
    /// [`set_approval_date`](Self::set_approval_date).
    pub fn set_approved(&mut self, approved: bool) {
        if approved {
            self.status = ApprovalStatus::Approved;
            if self.approval_date.is_none() {
                self.approval_date = Some(Utc::now());
            }
        } else {
            self.status = ApprovalStatus::Rejected;
        }
    }

    pub fn set_approval_date(&mut self, approval_date: Option<DateTime<Utc>>) {
        self.approval_date = approval_date;
    }
}
