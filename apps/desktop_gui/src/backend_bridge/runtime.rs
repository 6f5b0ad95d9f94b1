//! Backend worker: owns the tokio runtime and performs one round trip per command.

use std::{sync::Arc, thread};

use anyhow::anyhow;
use client_core::EstimatorBackend;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    backend: Arc<dyn EstimatorBackend>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Info(
                    "Backend worker failed to start; requests will fail".to_string(),
                ));
                // Keep answering so the UI never stays busy.
                while let Ok(cmd) = cmd_rx.recv() {
                    let failure = anyhow!("backend runtime unavailable");
                    let event = match cmd {
                        BackendCommand::Estimate(_) => UiEvent::EstimateFinished(Err(failure)),
                        BackendCommand::Compare(_) => UiEvent::ComparisonFinished(Err(failure)),
                    };
                    if ui_tx.send(event).is_err() {
                        break;
                    }
                }
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                let cmd_name = cmd.name();
                let event = match cmd {
                    BackendCommand::Estimate(request) => {
                        UiEvent::EstimateFinished(backend.estimate(request).await)
                    }
                    BackendCommand::Compare(request) => {
                        UiEvent::ComparisonFinished(backend.compare(request).await)
                    }
                };
                if ui_tx.send(event).is_err() {
                    tracing::debug!(command = cmd_name, "ui closed; dropping backend result");
                    break;
                }
            }
        });
    })
}
