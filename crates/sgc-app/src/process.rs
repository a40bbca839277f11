//! Message processing: the TEA loop between update and the action executor

use sgc_api::Backend;

use crate::actions::ActionContext;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are handed to the
/// executor, whose results arrive later on the message channel.
pub fn process_message<B>(state: &mut AppState, message: Message, actions: &mut ActionContext<B>)
where
    B: Backend + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions.handle_action(action);
        }

        msg = result.message;
    }
}
