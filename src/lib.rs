pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod pay_runs {
        pub mod core {
            pub mod decision;
            pub mod employee;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod pay_run;
            pub mod projections;
            pub mod state;
        }
        pub mod application {
            pub mod errors;
            pub mod handler;
        }
        pub mod use_cases {
            pub mod draft_off_cycle_pay_run {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod draft_one_time_payout {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_pay_run {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_pay_run_details {
                pub mod details_view;
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_employees {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_directory;
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
