//! Log stream handlers
//!
//! Events carry the generation of the connection that produced them; events
//! from a replaced or closed connection are dropped.

use tracing::debug;

use super::{UpdateAction, UpdateResult};
use crate::route::Route;
use crate::state::AppState;
use crate::views::LogStreamStatus;

pub fn handle_stream_opened(state: &mut AppState, generation: u64) -> UpdateResult {
    if generation == state.logs.generation {
        state.logs.status = LogStreamStatus::Streaming;
    }
    UpdateResult::none()
}

pub fn handle_line(state: &mut AppState, generation: u64, line: &str) -> UpdateResult {
    if generation == state.logs.generation {
        state.logs.push_line(line);
    }
    UpdateResult::none()
}

pub fn handle_stream_closed(
    state: &mut AppState,
    generation: u64,
    reason: Option<String>,
) -> UpdateResult {
    if generation != state.logs.generation {
        debug!("Ignoring close of stale log stream {}", generation);
        return UpdateResult::none();
    }
    state.logs.status = LogStreamStatus::Closed { reason };
    UpdateResult::none()
}

pub fn handle_reconnect(state: &mut AppState) -> UpdateResult {
    if state.route != Route::Logs {
        return UpdateResult::none();
    }
    let generation = state.logs.begin_connect();
    UpdateResult::action(UpdateAction::ConnectLogStream { generation })
}
