//! Command orchestration helpers from UI actions to backend command queue.

use anyhow::{anyhow, Result};
use client_core::Workflow;
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::ComparisonChoice;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<()> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(anyhow!("{cmd_name} command dropped: queue full"))
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the app".to_string();
            Err(anyhow!("{cmd_name} command dropped: backend worker disconnected"))
        }
    }
}

/// Starts an estimate for `text`. Ignored while another request is in flight.
pub fn request_estimate(
    workflow: &mut Workflow,
    cmd_tx: &Sender<BackendCommand>,
    text: &str,
    status: &mut String,
) {
    let Ok(request) = workflow.begin_estimate(text) else {
        return;
    };
    if let Err(err) = dispatch_backend_command(cmd_tx, BackendCommand::Estimate(request), status) {
        workflow.finish_estimate(Err(err));
    }
}

/// Starts a comparison against the held estimate. No-op without one.
pub fn request_comparison(
    workflow: &mut Workflow,
    cmd_tx: &Sender<BackendCommand>,
    choice: ComparisonChoice,
    status: &mut String,
) {
    let Some(request) = workflow.begin_comparison(choice) else {
        return;
    };
    if let Err(err) = dispatch_backend_command(cmd_tx, BackendCommand::Compare(request), status) {
        workflow.finish_comparison(Err(err));
    }
}
