pub mod domain_event;
pub mod pay_run_drafted_v1;
