use crate::{
    action::Action,
    model::{Address, IssPosition},
};

/// Store slice the request actions fold into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssState {
    /// Last successfully fetched position (`None` until the first success).
    pub position: Option<IssPosition>,

    /// Addresses resolved for the last geocoded position.
    pub addresses: Vec<Address>,

    /// A position request is in flight.
    pub is_loading: bool,

    /// Message from the last failed request.
    pub error: Option<String>,
}

/// Pure state transition; returns `true` when the state changed.
pub fn reduce(state: &mut IssState, action: Action) -> bool {
    tracing::trace!(action = %action.kind(), "applying action");

    match action {
        Action::IssRequestPending => {
            let changed = !state.is_loading || state.error.is_some();
            state.is_loading = true;
            state.error = None;
            changed
        }

        Action::IssRequestSuccess(position) => {
            state.position = Some(position);
            state.is_loading = false;
            state.error = None;
            true
        }

        Action::IssRequestError(message) => {
            state.is_loading = false;
            state.error = Some(message);
            true
        }

        Action::IssAddressRequestSuccess(addresses) => {
            state.addresses = addresses;
            true
        }

        Action::IssAddressRequestError(message) => {
            state.error = Some(message);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> IssPosition {
        IssPosition { longitude: 118.079, latitude: 50.114 }
    }

    #[test]
    fn pending_sets_loading_and_clears_the_error() {
        let mut state = IssState { error: Some("old failure".to_string()), ..Default::default() };

        let changed = reduce(&mut state, Action::IssRequestPending);

        assert!(changed);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn pending_while_already_loading_is_a_no_op() {
        let mut state = IssState { is_loading: true, ..Default::default() };

        let changed = reduce(&mut state, Action::IssRequestPending);

        assert!(!changed);
        assert!(state.is_loading);
    }

    #[test]
    fn success_stores_the_position_and_clears_loading() {
        let mut state = IssState { is_loading: true, ..Default::default() };

        let changed = reduce(&mut state, Action::IssRequestSuccess(position()));

        assert!(changed);
        assert!(!state.is_loading);
        assert_eq!(state.position, Some(position()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn error_keeps_the_last_known_position() {
        let mut state = IssState::default();
        reduce(&mut state, Action::IssRequestSuccess(position()));

        reduce(&mut state, Action::IssRequestError("satellite not found".to_string()));

        assert_eq!(state.position, Some(position()));
        assert_eq!(state.error, Some("satellite not found".to_string()));
        assert!(!state.is_loading);
    }

    #[test]
    fn addresses_replace_the_previous_list() {
        let first = Address {
            formatted_address: "Somewhere".to_string(),
            place_id: None,
            types: Vec::new(),
        };
        let mut state = IssState { addresses: vec![first], ..Default::default() };

        let changed = reduce(&mut state, Action::IssAddressRequestSuccess(Vec::new()));

        assert!(changed);
        assert!(state.addresses.is_empty());
    }

    #[test]
    fn address_error_sets_the_message() {
        let mut state = IssState::default();

        let changed = reduce(
            &mut state,
            Action::IssAddressRequestError("Can not get addresses from Google API.".to_string()),
        );

        assert!(changed);
        assert_eq!(state.error, Some("Can not get addresses from Google API.".to_string()));
    }
}
