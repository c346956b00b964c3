//! Worker thread that plays the boot sequence and hands the session to the UI.

use std::{sync::Arc, thread};

use crossbeam_channel::Sender;
use shared::domain::BootScript;
use terminal_core::{
    CommandRegistry, ExternalActions, NullSink, Sequencer, SessionDispatcher, SessionState,
    TokioPacer,
};

use crate::{backend_bridge::sink::ChannelSink, controller::events::UiEvent};

pub struct BootRequest {
    pub script: BootScript,
    pub pace_scale: f64,
    pub seed: Option<u64>,
    pub actions: Arc<dyn ExternalActions>,
}

pub fn launch(request: BootRequest, ui_tx: Sender<UiEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::BackendFailed(format!(
                    "failed to build boot runtime: {err}"
                )));
                tracing::error!("failed to build boot runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let BootRequest {
                script,
                pace_scale,
                seed,
                actions,
            } = request;

            let sink = Arc::new(ChannelSink::new(ui_tx.clone()));
            let mut sequencer = Sequencer::new(script, TokioPacer).with_pace_scale(pace_scale);
            if let Some(seed) = seed {
                sequencer = sequencer.with_seed(seed);
            }
            let booted = sequencer.run(SessionState::new(sink)).await;

            let mut dispatcher = SessionDispatcher::new(booted, CommandRegistry::builtin(actions));
            // the UI reads the dispatcher's transcript directly from now on
            dispatcher.replace_sink(Arc::new(NullSink));
            if ui_tx
                .send(UiEvent::SessionReady(Box::new(dispatcher)))
                .is_err()
            {
                tracing::debug!("window closed before boot finished");
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossbeam_channel::bounded;
    use shared::domain::{ContentSection, Payload};
    use terminal_core::{LoggingLauncher, Transcript};

    use super::*;

    #[test]
    fn mirror_matches_handed_over_session() {
        let (ui_tx, ui_rx) = bounded(4);
        let request = BootRequest {
            script: BootScript {
                greeting: None,
                sections: vec![
                    ContentSection::Ascii { text: "##".into() },
                    ContentSection::Command {
                        command: "cat about.txt".into(),
                        payload: Payload::Lines(vec!["hello".into()]),
                    },
                ],
            },
            pace_scale: 0.0,
            seed: Some(3),
            actions: Arc::new(LoggingLauncher),
        };
        let worker = launch(request, ui_tx);

        let mut mirror = Transcript::new();
        let dispatcher = loop {
            match ui_rx.recv_timeout(Duration::from_secs(10)).expect("ui event") {
                UiEvent::Render(event) => mirror.apply(&event),
                UiEvent::SessionReady(dispatcher) => break dispatcher,
                UiEvent::BackendFailed(message) => panic!("backend failed: {message}"),
            }
        };
        worker.join().expect("worker");

        assert!(!dispatcher.is_animating());
        assert_eq!(mirror.entries(), dispatcher.transcript().entries());
        assert_eq!(mirror.blocks().count(), 2);
    }
}
