use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::domain::{Candidate, CompanyName, Competency, EmploymentStatus};
use super::events::HiringEvent;
use super::notify::{Notifier, SubscriptionId};

/// Notifications scoped to a single employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeEvent {
    HiredBy { company: CompanyName },
    TerminatedBy { company: CompanyName },
}

impl HiringEvent for EmployeeEvent {
    fn kind(&self) -> &'static str {
        match self {
            EmployeeEvent::HiredBy { .. } => "hired-by",
            EmployeeEvent::TerminatedBy { .. } => "terminated-by",
        }
    }

    fn payload(&self) -> Value {
        match self {
            EmployeeEvent::HiredBy { company } | EmployeeEvent::TerminatedBy { company } => {
                json!({ "company": company })
            }
        }
    }
}

/// A roster entry. Only a [`Company`] can create one.
///
/// Handles stay valid after termination so observers can still read the name and position.
#[derive(Debug)]
pub struct Employee {
    name: String,
    position: String,
    status: Cell<EmploymentStatus>,
    events: Notifier<EmployeeEvent>,
}

impl Employee {
    fn new(name: String, position: String) -> Self {
        Self {
            name,
            position,
            status: Cell::new(EmploymentStatus::Hired),
            events: Notifier::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn status(&self) -> EmploymentStatus {
        self.status.get()
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&EmployeeEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn notifier(&self) -> &Notifier<EmployeeEvent> {
        &self.events
    }

    pub fn view(&self) -> EmployeeView {
        EmployeeView {
            name: self.name.clone(),
            position: self.position.clone(),
            status: self.status.get(),
        }
    }

    fn hired_by(&self, company: &CompanyName) {
        self.events.publish(&EmployeeEvent::HiredBy {
            company: company.clone(),
        });
    }

    fn terminated_by(&self, company: &CompanyName) {
        self.status.set(EmploymentStatus::Terminated);
        self.events.publish(&EmployeeEvent::TerminatedBy {
            company: company.clone(),
        });
    }
}

/// Serializable snapshot of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub name: String,
    pub position: String,
    pub status: EmploymentStatus,
}

/// Notifications published by a [`Company`].
#[derive(Debug, Clone)]
pub enum CompanyEvent {
    EmployeeHired { employee: Rc<Employee> },
    EmployeeTerminated { employee: Rc<Employee> },
}

impl CompanyEvent {
    pub fn employee(&self) -> &Rc<Employee> {
        match self {
            CompanyEvent::EmployeeHired { employee }
            | CompanyEvent::EmployeeTerminated { employee } => employee,
        }
    }
}

impl HiringEvent for CompanyEvent {
    fn kind(&self) -> &'static str {
        match self {
            CompanyEvent::EmployeeHired { .. } => "employee-hired",
            CompanyEvent::EmployeeTerminated { .. } => "employee-terminated",
        }
    }

    fn payload(&self) -> Value {
        json!({ "employee": self.employee().view() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompanyError {
    #[error("{employee} ({position}) is not on the roster of {company}")]
    NotOnRoster {
        company: CompanyName,
        employee: String,
        position: String,
    },
}

/// Employer owning a roster and announcing every hire and termination.
#[derive(Debug)]
pub struct Company {
    name: CompanyName,
    roster: Vec<Rc<Employee>>,
    events: Notifier<CompanyEvent>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: CompanyName(name.into()),
            roster: Vec::new(),
            events: Notifier::new(),
        }
    }

    /// Create a company whose founding staff is already on the roster.
    ///
    /// Founders are enrolled silently: no observer can be attached yet.
    pub fn founded<I, N, P>(name: impl Into<String>, founders: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        let mut company = Self::new(name);
        company.roster = founders
            .into_iter()
            .map(|(name, position)| Rc::new(Employee::new(name.into(), position.into())))
            .collect();
        company
    }

    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    pub fn roster(&self) -> &[Rc<Employee>] {
        &self.roster
    }

    /// Names of current employees in roster order.
    pub fn employees(&self) -> Vec<String> {
        self.roster
            .iter()
            .map(|employee| employee.name().to_string())
            .collect()
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&CompanyEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn notifier(&self) -> &Notifier<CompanyEvent> {
        &self.events
    }

    /// Independent coverage check, regardless of how the candidate was found.
    pub fn verify(&self, candidate: &Candidate, required: &[Competency]) -> bool {
        candidate.covers(required)
    }

    pub fn hire(&mut self, candidate: &Candidate, position: impl Into<String>) -> Rc<Employee> {
        let employee = Rc::new(Employee::new(
            candidate.name().to_string(),
            position.into(),
        ));
        self.roster.push(Rc::clone(&employee));

        info!(
            company = %self.name,
            employee = employee.name(),
            position = employee.position(),
            "employee hired"
        );

        self.events.publish(&CompanyEvent::EmployeeHired {
            employee: Rc::clone(&employee),
        });
        employee.hired_by(&self.name);

        employee
    }

    /// Remove exactly this employee (by identity, not by name) from the roster.
    pub fn terminate(&mut self, employee: &Rc<Employee>) -> Result<(), CompanyError> {
        let index = self
            .roster
            .iter()
            .position(|entry| Rc::ptr_eq(entry, employee))
            .ok_or_else(|| CompanyError::NotOnRoster {
                company: self.name.clone(),
                employee: employee.name().to_string(),
                position: employee.position().to_string(),
            })?;
        let employee = self.roster.remove(index);

        info!(
            company = %self.name,
            employee = employee.name(),
            position = employee.position(),
            "employee terminated"
        );

        self.events.publish(&CompanyEvent::EmployeeTerminated {
            employee: Rc::clone(&employee),
        });
        employee.terminated_by(&self.name);

        Ok(())
    }
}
