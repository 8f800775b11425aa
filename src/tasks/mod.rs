// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Background application task processing.
//!
//! This module offloads work that may block, decoding photos, rendering and
//! writing the PNG and launching the system browser, from the main UI thread.
//! A dedicated worker loop translates [`AppTask`] requests into those
//! operations and reports the outcome back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Editing the card is always
//! done directly by event handlers.

mod handlers;
use handlers::*;

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{config::AppConfig, events::AppEvent, export::Compositor, model::WrappedCard};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadPhoto(PathBuf),

    /// Export a snapshot of the card, taken when the export was requested.
    ExportCard(WrappedCard),

    OpenLink(String),
}

/// Spawns a background thread to process application tasks.
///
/// The card compositor, and with it the fonts, is created on the worker the
/// first time a card is exported and then reused.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut compositor = None;

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                compositor: &mut compositor,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }

        tracing::debug!("Task channel closed, worker exiting");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    pub(crate) config: &'a AppConfig,
    pub(crate) event_tx: &'a Sender<AppEvent>,
    pub(crate) compositor: &'a mut Option<Compositor>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadPhoto(path) => load_photo(ctx, path),
        AppTask::ExportCard(card) => export_card(ctx, card),
        AppTask::OpenLink(url) => open_link(ctx, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::mpsc, time::Duration};

    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    const WAIT: Duration = Duration::from_secs(30);

    fn worker(config: AppConfig) -> (Sender<AppTask>, Receiver<AppEvent>) {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(&config, task_rx, event_tx);
        (task_tx, event_rx)
    }

    #[test]
    fn test_load_photo_task() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("me.png");
        RgbImage::from_pixel(6, 6, Rgb([1, 2, 3])).save(&path)?;

        let (task_tx, event_rx) = worker(AppConfig::default());
        task_tx.send(AppTask::LoadPhoto(path.clone()))?;

        match event_rx.recv_timeout(WAIT)? {
            AppEvent::PhotoLoaded(photo) => assert_eq!(photo.path(), path.as_path()),
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_load_photo_failure_is_reported() -> anyhow::Result<()> {
        let (task_tx, event_rx) = worker(AppConfig::default());
        task_tx.send(AppTask::LoadPhoto(PathBuf::from("/no/such/photo.png")))?;

        assert!(matches!(event_rx.recv_timeout(WAIT)?, AppEvent::PhotoFailed(..)));
        Ok(())
    }

    #[test]
    fn test_export_task_writes_configured_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = AppConfig {
            output_dir: Some(dir.path().to_path_buf()),
            export_scale: 1,
            ..AppConfig::default()
        };

        let (task_tx, event_rx) = worker(config);
        task_tx.send(AppTask::ExportCard(WrappedCard::new()))?;

        match event_rx.recv_timeout(WAIT)? {
            AppEvent::ExportFinished(report) => {
                assert_eq!(report.path, dir.path().join("wrapefy-card.png"));
                assert_eq!((report.width, report.height), (360, 640));
                assert!(report.path.is_file());
            }
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_export_failure_is_reported() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"")?;
        let config = AppConfig {
            output_dir: Some(blocker),
            export_scale: 1,
            ..AppConfig::default()
        };

        let (task_tx, event_rx) = worker(config);
        task_tx.send(AppTask::ExportCard(WrappedCard::new()))?;

        assert!(matches!(event_rx.recv_timeout(WAIT)?, AppEvent::ExportFailed(_)));
        Ok(())
    }
}
