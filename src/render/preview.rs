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

//! Render the live card preview.
//!
//! A character-cell approximation of the exported card: the year band and
//! photo panel on top, the ranked lists, stats and brand footer below. The
//! terminal cannot show the photo itself so its file name and size stand in
//! for it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    card::{
        BRAND_NAME, BRAND_URL, CardView, GENRE_LABEL, MINUTES_LABEL, PhotoSlot, TOP_ARTISTS_LABEL,
        TOP_SONGS_LABEL, YEAR_LABEL,
    },
    theme::Theme,
    util::format::truncate_chars,
};

const CARD_COLS: u16 = 40;
const CARD_ROWS: u16 = 26;

const BAND_COLS: u16 = 5;
const TOP_ROWS: u16 = 11;

pub(super) fn draw_preview(f: &mut Frame, area: Rect, view: &CardView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Preview ")
        .title_style(Style::default().fg(theme.muted_colour));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let card = centred(inner, CARD_COLS, CARD_ROWS);
    f.render_widget(Block::default().style(Style::default().bg(theme.card_bg)), card);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOP_ROWS), Constraint::Min(0)])
        .split(card);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BAND_COLS), Constraint::Min(0)])
        .split(sections[0]);

    draw_year_band(f, top[0], theme);
    draw_photo_panel(f, top[1], view, theme);
    draw_stats(f, sections[1], view, theme);
}

fn draw_year_band(f: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default().fg(theme.card_light_text).add_modifier(Modifier::BOLD);

    // The year reads top to bottom, one digit per row
    let digits = YEAR_LABEL.chars().count() as u16;
    let mut lines: Vec<Line> = vec![Line::default(); area.height.saturating_sub(digits) as usize / 2];
    lines.extend(YEAR_LABEL.chars().map(|ch| Line::from(Span::styled(ch.to_string(), style))));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.card_band)),
        area,
    );
}

fn draw_photo_panel(f: &mut Frame, area: Rect, view: &CardView, theme: &Theme) {
    f.render_widget(Block::default().style(Style::default().bg(theme.card_panel)), area);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Black).bg(theme.card_panel))
        .style(Style::default().bg(theme.card_bg).fg(theme.card_ink));

    let frame_area = area.inner(Margin::new(2, 1));
    let content = frame.inner(frame_area);
    f.render_widget(frame, frame_area);

    let lines = match &view.photo {
        PhotoSlot::Photo(photo) => {
            let (width, height) = photo.dimensions();
            vec![
                Line::from(Span::styled(
                    truncate_chars(&photo.display_name(), content.width as usize),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("{width}x{height}")),
            ]
        }
        PhotoSlot::Prompt(prompt) => vec![Line::from(*prompt)],
    };

    let padding = content.height.saturating_sub(lines.len() as u16) / 2;
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::top(padding.min(1)))),
        content,
    );
}

fn draw_stats(f: &mut Frame, area: Rect, view: &CardView, theme: &Theme) {
    let block = Block::default()
        .style(Style::default().bg(theme.card_ink))
        .padding(Padding::new(2, 2, 1, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let caption = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.card_light_text).add_modifier(Modifier::BOLD);

    let captions = halves(rows[0]);
    f.render_widget(Paragraph::new(Span::styled(TOP_ARTISTS_LABEL, caption)), captions[0]);
    f.render_widget(Paragraph::new(Span::styled(TOP_SONGS_LABEL, caption)), captions[1]);

    let lists = halves(rows[1]);
    f.render_widget(Paragraph::new(ranked_lines(view.ranked_artists(), lists[0].width, theme)), lists[0]);
    f.render_widget(Paragraph::new(ranked_lines(view.ranked_songs(), lists[1].width, theme)), lists[1]);

    let stat_captions = halves(rows[3]);
    f.render_widget(Paragraph::new(Span::styled(MINUTES_LABEL, caption)), stat_captions[0]);
    f.render_widget(Paragraph::new(Span::styled(GENRE_LABEL, caption)), stat_captions[1]);

    let stats = halves(rows[4]);
    f.render_widget(Paragraph::new(Span::styled(view.minutes.as_str(), value)), stats[0]);
    f.render_widget(
        Paragraph::new(Span::styled(truncate_chars(view.genre, stats[1].width as usize), value)),
        stats[1],
    );

    let footer = halves(rows[6]);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.card_brand)),
            Span::styled(BRAND_NAME, value),
        ])),
        footer[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(BRAND_URL, caption)).alignment(Alignment::Right),
        footer[1],
    );
}

fn ranked_lines<'a>(
    ranked: impl Iterator<Item = (usize, &'a str)>,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let rank_style = Style::default().fg(theme.card_light_text).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.card_light_text);

    ranked
        .map(|(rank, label)| {
            let rank = format!("{rank} ");
            let room = (width as usize).saturating_sub(rank.len() + 1);
            Line::from(vec![
                Span::styled(rank, rank_style),
                Span::styled(truncate_chars(label, room), label_style),
            ])
        })
        .collect()
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
