use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::pay_runs::core::employee::Employee;
use crate::shell::graphql::internal_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EmployeesQuery;

#[Object]
impl EmployeesQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<Employee>> {
        let state = context.data_unchecked::<AppState>();
        state
            .employees
            .list()
            .await
            .map_err(internal_error)
    }
}
