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

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    App, StatusMessage,
    components::{CardForm, FormField},
    export::ExportReport,
    model::{Photo, WrappedCard, photo::expand_home},
    tasks::AppTask,
};

/// Starts an export of the current card.
///
/// Only one export runs at a time, a request made while one is in flight is
/// dropped.
pub(super) fn handle_export_requested(app: &mut App) -> Result<()> {
    if app.export_in_flight {
        tracing::debug!("Export already in progress, ignoring request");
        return Ok(());
    }

    app.task_tx.send(AppTask::ExportCard(app.card.clone()))?;
    app.export_in_flight = true;
    app.status = Some(StatusMessage::info("Exporting card..."));

    Ok(())
}

pub(super) fn handle_export_finished(app: &mut App, report: ExportReport) {
    app.export_in_flight = false;
    app.status = Some(StatusMessage::info(format!(
        "Saved {}x{} card to {}",
        report.width,
        report.height,
        report.path.display()
    )));
}

pub(super) fn handle_export_failed(app: &mut App, message: String) {
    app.export_in_flight = false;
    app.status = Some(StatusMessage::error(message));
}

pub(super) fn handle_photo_requested(app: &mut App, path: String) -> Result<()> {
    let path = path.trim();
    if path.is_empty() {
        // Submitting an empty photo field removes the photo
        handle_clear_photo(app);
        return Ok(());
    }

    let expanded = expand_home(path);
    app.task_tx.send(AppTask::LoadPhoto(expanded.clone()))?;
    app.pending_photo = Some(expanded);
    app.status = Some(StatusMessage::info(format!("Loading {path}...")));

    Ok(())
}

/// Claims the pending import for `path`.
///
/// Returns false when the result belongs to an import that was superseded by
/// a newer request, a clear or a reset.
fn take_pending_photo(app: &mut App, path: &Path) -> bool {
    if app.pending_photo.as_deref() != Some(path) {
        tracing::debug!("Dropping stale photo result for {}", path.display());
        return false;
    }

    app.pending_photo = None;
    true
}

/// The Photo input is only rewritten when the user is not typing in it.
fn set_photo_text(app: &mut App, text: impl Into<String>) {
    if !app.form.is_editing_field(FormField::Photo) {
        app.form.set_photo_text(text);
    }
}

pub(super) fn handle_photo_loaded(app: &mut App, photo: Photo) {
    if !take_pending_photo(app, photo.path()) {
        return;
    }

    let (width, height) = photo.dimensions();
    app.status = Some(StatusMessage::info(format!(
        "Loaded {} ({width}x{height})",
        photo.display_name()
    )));

    set_photo_text(app, photo.path().to_string_lossy());
    app.card.set_photo(photo);
}

/// A failed import leaves the previous photo, if any, on the card.
pub(super) fn handle_photo_failed(app: &mut App, path: PathBuf, message: String) {
    if !take_pending_photo(app, &path) {
        return;
    }

    let current = app
        .card
        .photo
        .as_ref()
        .map(|p| p.path().to_string_lossy().into_owned())
        .unwrap_or_default();
    set_photo_text(app, current);
    app.status = Some(StatusMessage::error(message));
}

pub(super) fn handle_clear_photo(app: &mut App) {
    app.pending_photo = None;
    app.card.clear_photo();
    app.form.set_photo_text("");
    app.status = Some(StatusMessage::info("Photo removed"));
}

pub(super) fn handle_open_share_link(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::OpenLink(app.config.share_url.clone()))?;

    Ok(())
}

pub(super) fn handle_link_opened(app: &mut App, url: String) {
    app.status = Some(StatusMessage::info(format!("Opened {url}")));
}

pub(super) fn handle_reset_card(app: &mut App) {
    app.pending_photo = None;
    app.card = WrappedCard::new();
    app.form = CardForm::from_card(&app.card);
    app.status = Some(StatusMessage::info("Card reset"));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::warn!("{message}");
    app.status = Some(StatusMessage::error(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        path::PathBuf,
        sync::mpsc::{self, Receiver},
    };

    use crossterm::event::{Event, KeyCode, KeyEvent};
    use image::{DynamicImage, RgbImage};

    use crate::config::AppConfig;

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn photo(path: &str) -> Photo {
        Photo::from_image(path, DynamicImage::ImageRgb8(RgbImage::new(4, 2)))
    }

    fn report() -> ExportReport {
        ExportReport {
            path: PathBuf::from("/tmp/wrapefy-card.png"),
            width: 720,
            height: 1280,
            bytes: 1024,
        }
    }

    #[test]
    fn test_export_while_in_flight_is_ignored() -> Result<()> {
        let (mut app, task_rx) = app();

        handle_export_requested(&mut app)?;
        handle_export_requested(&mut app)?;

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ExportCard(_))));
        assert!(task_rx.try_recv().is_err());

        handle_export_finished(&mut app, report());
        assert!(!app.export_in_flight);

        handle_export_requested(&mut app)?;
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ExportCard(_))));
        Ok(())
    }

    #[test]
    fn test_export_snapshots_card() -> Result<()> {
        let (mut app, task_rx) = app();
        app.card.set_artist(0, "Stereolab");

        handle_export_requested(&mut app)?;
        app.card.set_artist(0, "Broadcast");

        match task_rx.try_recv() {
            Ok(AppTask::ExportCard(card)) => assert_eq!(card.artists[0], "Stereolab"),
            other => panic!("unexpected task {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_export_failure_allows_retry() -> Result<()> {
        let (mut app, task_rx) = app();

        handle_export_requested(&mut app)?;
        handle_export_failed(&mut app, "disk full".to_string());

        assert!(!app.export_in_flight);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));

        handle_export_requested(&mut app)?;
        assert_eq!(task_rx.try_iter().count(), 2);
        Ok(())
    }

    #[test]
    fn test_finished_export_reports_path() {
        let (mut app, _task_rx) = app();

        handle_export_finished(&mut app, report());

        let status = app.status.expect("status");
        assert!(!status.is_error);
        assert_eq!(status.text, "Saved 720x1280 card to /tmp/wrapefy-card.png");
    }

    #[test]
    fn test_photo_loaded_and_cleared() -> Result<()> {
        let (mut app, _task_rx) = app();

        handle_photo_requested(&mut app, "/tmp/me.png".to_string())?;
        handle_photo_loaded(&mut app, photo("/tmp/me.png"));
        assert!(app.card.photo.is_some());
        assert!(app.pending_photo.is_none());
        assert_eq!(app.status.as_ref().map(|s| s.text.as_str()), Some("Loaded me.png (4x2)"));
        assert_eq!(app.form.value(FormField::Photo), "/tmp/me.png");

        handle_clear_photo(&mut app);
        assert!(app.card.photo.is_none());
        Ok(())
    }

    #[test]
    fn test_failed_photo_keeps_previous() -> Result<()> {
        let (mut app, _task_rx) = app();
        handle_photo_requested(&mut app, "/tmp/old.png".to_string())?;
        handle_photo_loaded(&mut app, photo("/tmp/old.png"));

        handle_photo_requested(&mut app, "/tmp/new.png".to_string())?;
        handle_photo_failed(
            &mut app,
            PathBuf::from("/tmp/new.png"),
            "failed to open photo /tmp/new.png".to_string(),
        );

        assert_eq!(
            app.card.photo.as_ref().map(|p| p.path().to_path_buf()),
            Some(PathBuf::from("/tmp/old.png"))
        );
        assert_eq!(app.form.value(FormField::Photo), "/tmp/old.png");
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        Ok(())
    }

    #[test]
    fn test_photo_loaded_after_reset_is_dropped() -> Result<()> {
        let (mut app, _task_rx) = app();

        handle_photo_requested(&mut app, "/tmp/me.png".to_string())?;
        handle_reset_card(&mut app);
        handle_photo_loaded(&mut app, photo("/tmp/me.png"));

        assert!(app.card.photo.is_none());
        assert_eq!(app.form.value(FormField::Photo), "");
        assert_eq!(app.status.as_ref().map(|s| s.text.as_str()), Some("Card reset"));
        Ok(())
    }

    #[test]
    fn test_photo_loaded_after_clear_is_dropped() -> Result<()> {
        let (mut app, _task_rx) = app();

        handle_photo_requested(&mut app, "/tmp/me.png".to_string())?;
        handle_clear_photo(&mut app);
        handle_photo_loaded(&mut app, photo("/tmp/me.png"));

        assert!(app.card.photo.is_none());
        Ok(())
    }

    #[test]
    fn test_only_latest_photo_request_is_applied() -> Result<()> {
        let (mut app, _task_rx) = app();

        handle_photo_requested(&mut app, "/tmp/first.png".to_string())?;
        handle_photo_requested(&mut app, "/tmp/second.png".to_string())?;

        handle_photo_failed(&mut app, PathBuf::from("/tmp/first.png"), "gone".to_string());
        assert!(app.status.as_ref().is_some_and(|s| !s.is_error));

        handle_photo_loaded(&mut app, photo("/tmp/first.png"));
        assert!(app.card.photo.is_none());

        handle_photo_loaded(&mut app, photo("/tmp/second.png"));
        assert_eq!(
            app.card.photo.as_ref().map(|p| p.path().to_path_buf()),
            Some(PathBuf::from("/tmp/second.png"))
        );
        Ok(())
    }

    #[test]
    fn test_photo_loaded_keeps_text_being_typed() -> Result<()> {
        let (mut app, _task_rx) = app();
        handle_photo_requested(&mut app, "/tmp/me.png".to_string())?;

        // Start typing a new path into the Photo field
        let enter = Event::Key(KeyEvent::from(KeyCode::Enter));
        app.form.process_event(&enter, &mut app.card);
        let key = Event::Key(KeyEvent::from(KeyCode::Char('z')));
        app.form.process_event(&key, &mut app.card);
        assert!(app.form.is_editing_field(FormField::Photo));

        handle_photo_loaded(&mut app, photo("/tmp/me.png"));

        assert!(app.card.photo.is_some());
        assert!(app.form.is_editing_field(FormField::Photo));
        assert!(app.form.value(FormField::Photo).ends_with('z'));
        Ok(())
    }

    #[test]
    fn test_empty_photo_request_clears() -> Result<()> {
        let (mut app, task_rx) = app();
        app.card.set_photo(photo("/tmp/me.png"));

        handle_photo_requested(&mut app, "   ".to_string())?;

        assert!(app.card.photo.is_none());
        assert!(task_rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (mut app, _task_rx) = app();
        app.card.set_genre("Polka");
        app.card.set_minutes_from_text("3");

        handle_reset_card(&mut app);

        assert_eq!(app.card, WrappedCard::new());
        assert!(!app.form.is_editing());
    }

    #[test]
    fn test_open_share_link_uses_config() -> Result<()> {
        let (mut app, task_rx) = app();

        handle_open_share_link(&mut app)?;

        match task_rx.try_recv() {
            Ok(AppTask::OpenLink(url)) => assert_eq!(url, "https://instagram.com"),
            other => panic!("unexpected task {other:?}"),
        }
        Ok(())
    }
}
