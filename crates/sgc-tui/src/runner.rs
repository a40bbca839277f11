//! Main TUI runner - entry point and event loop

use sgc_api::RestClient;
use sgc_app::actions::ActionContext;
use sgc_app::message::Message;
use sgc_app::process::process_message;
use sgc_app::signals;
use sgc_app::state::AppState;
use sgc_app::Settings;
use sgc_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the console against the backend named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    // An unusable backend URL is reported before the terminal is taken over
    let client = RestClient::new(&settings.root_path)?;
    info!("Backend: {}", client.root());

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::new(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut actions = ActionContext::new(client, state.settings.root_path.clone(), msg_tx);

    let landing = state.route;
    process_message(&mut state, Message::Mount(landing), &mut actions);

    let result = run_loop(&mut term, &mut state, msg_rx, &mut actions);

    signal_task.abort();
    drop(actions);
    ratatui::restore();
    info!("Surveillance Console stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    actions: &mut ActionContext<RestClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Results of background actions and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, actions);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, actions);
        }
    }

    Ok(())
}
