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

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    events::AppEvent,
    export::{self, Compositor, FontSet},
    model::{Photo, WrappedCard},
    tasks::TaskContext,
};

pub(super) fn load_photo(ctx: &mut TaskContext, path: PathBuf) -> Result<()> {
    match Photo::load(&path) {
        Ok(photo) => ctx.event_tx.send(AppEvent::PhotoLoaded(photo))?,
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::from(e));
            tracing::warn!("Photo import failed: {message}");
            ctx.event_tx.send(AppEvent::PhotoFailed(path, message))?;
        }
    }

    Ok(())
}

pub(super) fn export_card(ctx: &mut TaskContext, card: WrappedCard) -> Result<()> {
    let config = ctx.config;
    let compositor = ctx.compositor.get_or_insert_with(|| {
        let compositor = Compositor::new(FontSet::load(config), config.scale());
        if !compositor.has_text() {
            tracing::warn!("No usable font found, exported cards will have no text");
        }
        compositor
    });

    let path = config.export_path();

    match export::export_card(compositor, &card, &path) {
        Ok(report) => ctx.event_tx.send(AppEvent::ExportFinished(report))?,
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::from(e));
            tracing::error!("Export failed: {message}");
            ctx.event_tx.send(AppEvent::ExportFailed(message))?;
        }
    }

    Ok(())
}

pub(super) fn open_link(ctx: &mut TaskContext, url: String) -> Result<()> {
    match open::that(&url) {
        Ok(()) => {
            tracing::info!("Opened {url}");
            ctx.event_tx.send(AppEvent::LinkOpened(url))?;
        }
        Err(e) => {
            tracing::warn!("Failed to open {url}: {e}");
            ctx.event_tx.send(AppEvent::Error(format!("Could not open {url}: {e}")))?;
        }
    }

    Ok(())
}
