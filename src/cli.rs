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

//! Command line argument parsing.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::{
    config::{AppConfig, MAX_EXPORT_SCALE},
    model::{Photo, SLOT_COUNT, WrappedCard},
};

#[derive(Parser)]
#[command(name = "wrapefy")]
#[command(about = "Make your own Wrapped-style music card and export it as a PNG", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    #[command(flatten)]
    pub(crate) edit: EditArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive card editor (default)
    Edit(EditArgs),

    /// Render a card straight to a PNG file, without the editor
    Export(ExportArgs),
}

/// Editor options, accepted both with and without the `edit` subcommand.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub(crate) struct EditArgs {
    /// Photo to put on the card when the editor starts
    #[arg(long, value_name = "PATH")]
    pub(crate) photo: Option<PathBuf>,

    /// Directory exported cards are written to, overriding the configuration
    #[arg(long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,
}

impl Cli {
    /// The editor options, those given after `edit` taking precedence over
    /// those given before it.
    pub(crate) fn edit_args(&self) -> EditArgs {
        let inner = match &self.command {
            Some(Commands::Edit(args)) => args.clone(),
            _ => EditArgs::default(),
        };

        EditArgs {
            photo: inner.photo.or_else(|| self.edit.photo.clone()),
            output_dir: inner.output_dir.or_else(|| self.edit.output_dir.clone()),
        }
    }

    /// Applies command line overrides to the loaded configuration.
    pub(crate) fn apply_to(&self, config: &mut AppConfig) {
        if let Some(dir) = self.edit_args().output_dir {
            config.output_dir = Some(dir);
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    /// Top artist, repeat for each rank (up to 5)
    #[arg(short, long = "artist", value_name = "NAME")]
    pub(crate) artists: Vec<String>,

    /// Top song, repeat for each rank (up to 5)
    #[arg(short, long = "song", value_name = "TITLE")]
    pub(crate) songs: Vec<String>,

    /// Minutes listened, anything that is not a digit is ignored
    #[arg(short, long)]
    pub(crate) minutes: Option<String>,

    /// Top genre
    #[arg(short, long)]
    pub(crate) genre: Option<String>,

    /// Photo for the card
    #[arg(short, long, value_name = "PATH")]
    pub(crate) photo: Option<PathBuf>,

    /// File to write, defaults to the configured export path
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Pixel density multiplier for the 360x640 card
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_EXPORT_SCALE as i64))]
    pub(crate) scale: Option<u32>,
}

impl ExportArgs {
    /// Builds the card described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if more artists or songs are given than the card has
    /// room for, or the photo cannot be loaded.
    pub(crate) fn to_card(&self) -> Result<WrappedCard> {
        if self.artists.len() > SLOT_COUNT {
            bail!("at most {SLOT_COUNT} artists fit on a card, got {}", self.artists.len());
        }
        if self.songs.len() > SLOT_COUNT {
            bail!("at most {SLOT_COUNT} songs fit on a card, got {}", self.songs.len());
        }

        let mut card = WrappedCard::new();

        for (i, artist) in self.artists.iter().enumerate() {
            card.set_artist(i, artist.as_str());
        }
        for (i, song) in self.songs.iter().enumerate() {
            card.set_song(i, song.as_str());
        }

        if let Some(minutes) = &self.minutes {
            card.set_minutes_from_text(minutes);
        }
        if let Some(genre) = &self.genre {
            card.set_genre(genre.as_str());
        }
        if let Some(path) = &self.photo {
            card.set_photo(Photo::load(path)?);
        }

        Ok(card)
    }

    /// The file to write, `--output` winning over the configured export path.
    pub(crate) fn output_path(&self, config: &AppConfig) -> PathBuf {
        self.output.clone().unwrap_or_else(|| config.export_path())
    }
}
