// Employee directory port and its in memory adapter.
//
// Builders resolve the display name for descriptions through this port. The in memory adapter
// is seeded once at startup from configuration.

use crate::modules::pay_runs::core::employee::Employee;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn find(&self, employee_id: &str) -> anyhow::Result<Option<Employee>>;
    async fn list(&self) -> anyhow::Result<Vec<Employee>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeDirectory {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn find(&self, employee_id: &str) -> anyhow::Result<Option<Employee>> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.id == employee_id.trim())
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}
