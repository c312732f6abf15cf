use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::pay_runs::core::pay_run::{PayRun, PayRunStatus, PayRunType};
use crate::modules::pay_runs::use_cases::view_pay_run_details::details_view::{
    PayRunDetailsView, SummaryColumn,
};
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunView;
use crate::modules::pay_runs::use_cases::view_pay_run_details::queries_port::PayRunFilter;
use crate::shell::graphql::internal_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPayRun {
    pub id: ID,
    pub month: String,
    pub year: i32,
    pub status: PayRunStatus,
    #[graphql(name = "type")]
    pub pay_run_type: PayRunType,
    pub total_amount: f64,
    pub employee_count: u32,
    pub created_at: i64,
    pub created_by: String,
    pub payment_date: String,
    pub description: String,
    pub remarks: Option<String>,
    pub reason_type: String,
    pub employee_ids: Vec<String>,
    pub is_taxable: Option<bool>,
    pub submitted_at: Option<i64>,
}

impl GqlPayRun {
    pub fn from_pay_run(pay_run: PayRun, created_by: &str) -> Self {
        Self {
            id: ID(pay_run.id),
            month: pay_run.month,
            year: pay_run.year,
            status: pay_run.status,
            pay_run_type: pay_run.pay_run_type,
            total_amount: pay_run.total_amount,
            employee_count: pay_run.employee_count,
            created_at: pay_run.created_at,
            created_by: created_by.to_string(),
            payment_date: pay_run.payment_date,
            description: pay_run.description,
            remarks: pay_run.remarks,
            reason_type: pay_run.reason_type,
            employee_ids: pay_run.employee_ids,
            is_taxable: pay_run.is_taxable,
            submitted_at: None,
        }
    }
}

impl From<PayRunView> for GqlPayRun {
    fn from(view: PayRunView) -> Self {
        Self {
            id: ID(view.pay_run_id),
            month: view.month,
            year: view.year,
            status: view.status,
            pay_run_type: view.pay_run_type,
            total_amount: view.total_amount,
            employee_count: view.employee_count,
            created_at: view.created_at,
            created_by: view.created_by,
            payment_date: view.payment_date,
            description: view.description,
            remarks: view.remarks,
            reason_type: view.reason_type,
            employee_ids: view.employee_ids,
            is_taxable: view.is_taxable,
            submitted_at: view.submitted_at,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlPayRunDetails {
    pub pay_run: GqlPayRun,
    pub columns: Vec<SummaryColumn>,
    pub gross_pay: f64,
    pub net_pay: f64,
}

impl From<PayRunDetailsView> for GqlPayRunDetails {
    fn from(details: PayRunDetailsView) -> Self {
        Self {
            pay_run: details.pay_run.into(),
            columns: details.columns,
            gross_pay: details.gross_pay,
            net_pay: details.net_pay,
        }
    }
}

#[derive(Default)]
pub struct PayRunQuery;

#[Object]
impl PayRunQuery {
    /// Details of one pay run. When `type` is given it must match the stored type.
    async fn pay_run(
        &self,
        context: &Context<'_>,
        id: ID,
        #[graphql(name = "type")] pay_run_type: Option<PayRunType>,
    ) -> GqlResult<Option<GqlPayRunDetails>> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .find_pay_run(id.as_str())
            .await
            .map_err(internal_error)?;
        let Some(view) = view else {
            return Ok(None);
        };
        if let Some(expected) = pay_run_type.filter(|t| *t != view.pay_run_type) {
            return Err(async_graphql::Error::new(format!(
                "pay run {} is {}, not {expected}",
                id.as_str(),
                view.pay_run_type
            )));
        }
        Ok(Some(PayRunDetailsView::new(view).into()))
    }

    async fn pay_runs(
        &self,
        context: &Context<'_>,
        status: Option<PayRunStatus>,
        #[graphql(name = "type")] pay_run_type: Option<PayRunType>,
        #[graphql(default = 0)] offset: u64,
        #[graphql(default = 20)] limit: u64,
    ) -> GqlResult<Vec<GqlPayRun>> {
        let state = context.data_unchecked::<AppState>();
        let filter = PayRunFilter {
            status,
            pay_run_type,
        };
        let views = state
            .queries
            .list(filter, offset, limit)
            .await
            .map_err(internal_error)?;
        Ok(views.into_iter().map(GqlPayRun::from).collect())
    }
}
