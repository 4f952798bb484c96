pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod leave {
        pub mod core {
            pub mod balance;
            pub mod calendar;
            pub mod coverage;
            pub mod decision;
            pub mod directory;
            pub mod events;
            pub mod evolve;
            pub mod policy;
            pub mod request;
            pub mod sick_pattern;
            pub mod state;
            pub mod validation;
        }
        pub mod engine;
        pub mod errors;
        pub mod use_cases {
            pub mod submit_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod approve_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reject_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod validate_leave_request {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_leave_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod team_calendar {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod leave_analytics {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_holidays {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
