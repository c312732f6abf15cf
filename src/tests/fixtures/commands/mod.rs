pub mod draft_off_cycle_pay_run;
pub mod draft_one_time_payout;
