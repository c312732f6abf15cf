// Display state of the pay run details screen.
//
// Gross and net pay are seeded from the stored total and may be overridden through an edit
// dialog. Overrides live only in this view; the stored record is never written back, so the
// two can diverge until the pay run is re-read.

use crate::modules::pay_runs::core::pay_run::PayRunType;
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunView;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryColumn {
    Employee,
    PaymentDate,
    GrossPay,
    Deductions,
    Tax,
    NetPay,
}

const PAYROLL_COLUMNS: &[SummaryColumn] = &[
    SummaryColumn::Employee,
    SummaryColumn::PaymentDate,
    SummaryColumn::GrossPay,
    SummaryColumn::Deductions,
    SummaryColumn::Tax,
    SummaryColumn::NetPay,
];

// Gross pay, deductions and tax do not apply to a flat one-time payout.
const PAYOUT_COLUMNS: &[SummaryColumn] = &[
    SummaryColumn::Employee,
    SummaryColumn::PaymentDate,
    SummaryColumn::NetPay,
];

pub fn summary_columns(pay_run_type: PayRunType) -> &'static [SummaryColumn] {
    match pay_run_type {
        PayRunType::Regular | PayRunType::OffCycle => PAYROLL_COLUMNS,
        PayRunType::OneTime => PAYOUT_COLUMNS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DetailsViewError {
    #[error("no edit in progress")]
    NoEditInProgress,
    #[error("pay amount must be a finite number, got {0}")]
    InvalidPay(f64),
}

/// Temporary copies edited inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayEdit {
    pub gross_pay: f64,
    pub net_pay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayRunDetailsView {
    pub pay_run: PayRunView,
    pub columns: Vec<SummaryColumn>,
    pub gross_pay: f64,
    pub net_pay: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<PayEdit>,
}

impl PayRunDetailsView {
    pub fn new(pay_run: PayRunView) -> Self {
        let total = pay_run.total_amount;
        Self {
            columns: summary_columns(pay_run.pay_run_type).to_vec(),
            pay_run,
            gross_pay: total,
            net_pay: total,
            edit: None,
        }
    }

    pub fn pay_run_type(&self) -> PayRunType {
        self.pay_run.pay_run_type
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Open the dialog with copies of the displayed values. Reopening keeps pending edits.
    pub fn open_edit(&mut self) {
        if self.edit.is_none() {
            self.edit = Some(PayEdit {
                gross_pay: self.gross_pay,
                net_pay: self.net_pay,
            });
        }
    }

    pub fn set_gross_pay(&mut self, value: f64) -> Result<(), DetailsViewError> {
        let edit = self.pending_edit(value)?;
        edit.gross_pay = value;
        Ok(())
    }

    pub fn set_net_pay(&mut self, value: f64) -> Result<(), DetailsViewError> {
        let edit = self.pending_edit(value)?;
        edit.net_pay = value;
        Ok(())
    }

    pub fn confirm_edit(&mut self) -> Result<(), DetailsViewError> {
        let edit = self.edit.take().ok_or(DetailsViewError::NoEditInProgress)?;
        self.gross_pay = edit.gross_pay;
        self.net_pay = edit.net_pay;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    fn pending_edit(&mut self, value: f64) -> Result<&mut PayEdit, DetailsViewError> {
        if !value.is_finite() {
            return Err(DetailsViewError::InvalidPay(value));
        }
        self.edit.as_mut().ok_or(DetailsViewError::NoEditInProgress)
    }
}
