use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Overdue,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Settlement state of a payment. Only `Completed` payments count as paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Work state of a modification. Independent of whether it is billable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ModificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModificationStatus::Pending => write!(f, "pending"),
            ModificationStatus::InProgress => write!(f, "in_progress"),
            ModificationStatus::Completed => write!(f, "completed"),
            ModificationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A payment received (or expected) from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,

    /// Amount in the project's currency
    pub amount: f64,

    /// Day the payment was made or is due
    pub date: NaiveDate,

    pub status: PaymentStatus,

    /// Free-form payment kind (e.g., "advance", "final")
    #[serde(default)]
    pub payment_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Payment {
    pub fn new(amount: f64, date: NaiveDate, status: PaymentStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            status,
            payment_type: None,
            description: None,
        }
    }

    /// Shorthand for a settled payment.
    pub fn completed(amount: f64, date: NaiveDate) -> Self {
        Self::new(amount, date, PaymentStatus::Completed)
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

/// Extra work requested on top of the original scope.
///
/// Charts place a modification on its `start_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub id: Uuid,

    pub description: String,

    pub cost: f64,

    pub start_date: NaiveDate,

    pub deadline: NaiveDate,

    #[serde(default)]
    pub status: ModificationStatus,

    /// Billable modifications add their cost to the project total.
    #[serde(default = "default_is_paid")]
    pub is_paid: bool,
}

fn default_is_paid() -> bool {
    true
}

impl Modification {
    /// Create a modification whose deadline equals its start date.
    pub fn new(
        description: impl Into<String>,
        cost: f64,
        start_date: NaiveDate,
        is_paid: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            cost,
            start_date,
            deadline: start_date,
            status: ModificationStatus::Pending,
            is_paid,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_status(mut self, status: ModificationStatus) -> Self {
        self.status = status;
        self
    }
}

/// A freelance project together with its payment and modification records.
///
/// Records arrive already validated from the storage layer; nothing here
/// re-checks them beyond finiteness where arithmetic depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,

    pub name: String,

    pub start_date: NaiveDate,

    pub deadline: NaiveDate,

    #[serde(default)]
    pub status: ProjectStatus,

    /// Agreed price before any modifications
    pub base_cost: f64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub modifications: Vec<Modification>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        deadline: NaiveDate,
        base_cost: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            deadline,
            status: ProjectStatus::Active,
            base_cost,
            description: None,
            payments: Vec::new(),
            modifications: Vec::new(),
        }
    }

    pub fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }

    pub fn with_modifications(mut self, modifications: Vec<Modification>) -> Self {
        self.modifications = modifications;
        self
    }
}
