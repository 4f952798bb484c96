// LeaveRequestState is the canonical domain state after folding events.
//
// Boundaries
// - This file must not perform input or output.

use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeaveRequestState {
    #[default]
    None,
    Requested(LeaveRequest),
}

impl LeaveRequestState {
    pub fn request(&self) -> Option<&LeaveRequest> {
        match self {
            LeaveRequestState::None => None,
            LeaveRequestState::Requested(request) => Some(request),
        }
    }

    pub fn into_request(self) -> Option<LeaveRequest> {
        match self {
            LeaveRequestState::None => None,
            LeaveRequestState::Requested(request) => Some(request),
        }
    }

    pub fn status(&self) -> Option<LeaveStatus> {
        self.request().map(|r| r.status)
    }
}

#[cfg(test)]
mod leave_request_state_tests {
    use super::*;
    use crate::tests::fixtures::requests::LeaveRequestBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_blank_state() {
        let state = LeaveRequestState::default();
        assert_eq!(state, LeaveRequestState::None);
        assert_eq!(state.status(), None);
        assert!(state.into_request().is_none());
    }

    #[rstest]
    fn it_should_expose_the_requested_state() {
        let request = LeaveRequestBuilder::new().build();
        let state = LeaveRequestState::Requested(request.clone());
        assert_eq!(state.status(), Some(LeaveStatus::Pending));
        assert_eq!(state.request(), Some(&request));
        assert_eq!(state.into_request(), Some(request));
    }
}
