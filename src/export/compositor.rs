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

//! Raster rendering of the card.
//!
//! The [`Compositor`] draws a [`CardView`] onto an RGBA canvas. All layout is
//! expressed in logical pixels of a 360x640 card and multiplied by the export
//! scale when drawing, so a scale of 2 yields a 720x1280 image.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{
    DynamicImage, Rgba, RgbaImage,
    imageops::{self, FilterType},
};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut},
    rect::Rect,
};

use crate::{
    card::{
        BRAND_NAME, BRAND_URL, CardView, GENRE_LABEL, MINUTES_LABEL, PhotoSlot, TOP_ARTISTS_LABEL,
        TOP_SONGS_LABEL, YEAR_LABEL,
    },
    export::fonts::FontSet,
};

pub(crate) const CARD_WIDTH: u32 = 360;
pub(crate) const CARD_HEIGHT: u32 = 640;

pub(crate) const CARD_BG: Rgba<u8> = Rgba([0xf4, 0xf1, 0xea, 0xff]);
pub(crate) const INK: Rgba<u8> = Rgba([0x11, 0x11, 0x11, 0xff]);
const BORDER: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);
const MUTED: Rgba<u8> = Rgba([0xa3, 0xa3, 0xa3, 0xff]);
const LIGHT_TEXT: Rgba<u8> = Rgba([0xf8, 0xf8, 0xf8, 0xff]);
const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
const BRAND_GREEN: Rgba<u8> = Rgba([0x32, 0xe2, 0x6b, 0xff]);
const PURPLE_LIGHT: Rgba<u8> = Rgba([0x6b, 0x5b, 0xff, 0xff]);
const PURPLE_MID: Rgba<u8> = Rgba([0x7f, 0x63, 0xff, 0xff]);
const PURPLE_DARK: Rgba<u8> = Rgba([0x4b, 0x3f, 0xff, 0xff]);
// #2b1f80 at 45% over the middle of the band gradient
const SQUIGGLE: Rgba<u8> = Rgba([0x45, 0x38, 0xc6, 0xff]);

const CORNER_RADIUS: f32 = 32.0;
const BORDER_WIDTH: f32 = 1.0;

const TOP_HEIGHT: f32 = 371.0;
const CHECKER_STRIP: f32 = 32.0;
const CHECKER_COLUMNS: usize = 14;
const CHECKER_ROWS: usize = 12;
const RIGHT_STRIP_WIDTH: f32 = 40.0;

const BAND_WIDTH: f32 = 96.0;
const YEAR_SIZE: f32 = 80.0;
const YEAR_CENTRE_X: f32 = 50.0;

const PANEL_INSET: f32 = 16.0;
const FRAME_WIDTH_RATIO: f32 = 0.94;
const FRAME_HEIGHT_RATIO: f32 = 0.90;
const FRAME_BORDER: f32 = 3.0;

const PROMPT_SIZE: f32 = 12.0;
const PROMPT_LINE_HEIGHT: f32 = 16.0;
const PROMPT_PADDING: f32 = 16.0;

const BOTTOM_PAD_X: f32 = 24.0;
const BOTTOM_PAD_TOP: f32 = 20.0;
const COLUMN_GAP: f32 = 24.0;
const COLUMN_WIDTH: f32 = (CARD_WIDTH as f32 - 2.0 * BOTTOM_PAD_X - COLUMN_GAP) / 2.0;

const LABEL_SIZE: f32 = 11.0;
const LABEL_LINE_HEIGHT: f32 = 14.0;
const LABEL_TRACKING: f32 = 0.16;
const LABEL_GAP: f32 = 6.0;

const ITEM_SIZE: f32 = 14.0;
const ITEM_PITCH: f32 = 20.0;
const RANK_WIDTH: f32 = 16.0;
const RANK_GAP: f32 = 8.0;

const STATS_GAP: f32 = 12.0;
const VALUE_GAP: f32 = 2.0;
const MINUTES_SIZE: f32 = 24.0;
const GENRE_SIZE: f32 = 20.0;

const FOOTER_GAP: f32 = 18.0;
const LOGO_SIZE: f32 = 24.0;
const LOGO_BARS: [f32; 3] = [9.0, 7.0, 5.0];
const LOGO_BAR_WIDTH: f32 = 3.0;
const LOGO_BAR_GAP: f32 = 2.0;

/// An axis-aligned rectangle in logical card pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Area {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Area {
    const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    fn centred(&self, w: f32, h: f32) -> Self {
        Self::new(self.x + (self.w - w) / 2.0, self.y + (self.h - h) / 2.0, w, h)
    }

    fn inset(&self, by: f32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            (self.w - 2.0 * by).max(0.0),
            (self.h - 2.0 * by).max(0.0),
        )
    }
}

pub(crate) struct Compositor {
    fonts: FontSet,
    scale: f32,
}

impl Compositor {
    pub(crate) fn new(fonts: FontSet, scale: u32) -> Self {
        Self {
            fonts,
            scale: scale.max(1) as f32,
        }
    }

    /// Pixel dimensions of the images this compositor produces.
    pub(crate) fn canvas_size(&self) -> (u32, u32) {
        (
            self.px(CARD_WIDTH as f32) as u32,
            self.px(CARD_HEIGHT as f32) as u32,
        )
    }

    pub(crate) fn has_text(&self) -> bool {
        self.fonts.has_text()
    }

    /// Draws the whole card.
    pub(crate) fn render(&self, view: &CardView) -> RgbaImage {
        let (width, height) = self.canvas_size();
        let mut canvas = RgbaImage::from_pixel(width, height, CARD_BG);

        self.draw_checker(&mut canvas);
        self.draw_year_band(&mut canvas);
        self.draw_photo_panel(&mut canvas, &view.photo);
        let footer_y = self.draw_stats(&mut canvas, view);
        self.draw_footer(&mut canvas, footer_y);
        self.round_corners(&mut canvas);

        canvas
    }

    fn draw_checker(&self, canvas: &mut RgbaImage) {
        let column_width = CARD_WIDTH as f32 / CHECKER_COLUMNS as f32;
        for i in 0..CHECKER_COLUMNS {
            let cell = Area::new(i as f32 * column_width, 0.0, column_width, CHECKER_STRIP);
            self.fill(canvas, cell, checker_colour(i));
        }

        let row_height = (TOP_HEIGHT - CHECKER_STRIP) / CHECKER_ROWS as f32;
        let x = CARD_WIDTH as f32 - RIGHT_STRIP_WIDTH;
        for i in 0..CHECKER_ROWS {
            let cell = Area::new(
                x,
                CHECKER_STRIP + i as f32 * row_height,
                RIGHT_STRIP_WIDTH,
                row_height,
            );
            self.fill(canvas, cell, checker_colour(i));
        }
    }

    fn draw_year_band(&self, canvas: &mut RgbaImage) {
        let band = Area::new(0.0, 0.0, BAND_WIDTH, TOP_HEIGHT);
        self.fill_gradient(canvas, band, 180.0, &[(0.0, PURPLE_LIGHT), (1.0, PURPLE_DARK)]);

        if let Some(font) = self.fonts.bold() {
            let scale = self.font_scale(YEAR_SIZE);
            let width = measure_text_width(font, YEAR_LABEL, scale).ceil().max(1.0) as u32;
            let height = (self.px(YEAR_SIZE) as u32).max(1);

            // Drawn upright on a transparent strip, then turned a quarter
            // anticlockwise so it reads bottom to top.
            let mut label = RgbaImage::from_pixel(width, height, Rgba([0xff, 0xff, 0xff, 0x00]));
            draw_text_mut(&mut label, WHITE, 0, 0, scale, font, YEAR_LABEL);
            let rotated = imageops::rotate270(&label);

            let x = self.px(YEAR_CENTRE_X) - rotated.width() as i32 / 2;
            let y = self.px(TOP_HEIGHT / 2.0) - rotated.height() as i32 / 2;
            imageops::overlay(canvas, &rotated, x as i64, y as i64);
        }

        self.draw_squiggle(canvas, band);
    }

    // A cubic path over a 100x200 box stretched to fill the band.
    fn draw_squiggle(&self, canvas: &mut RgbaImage, band: Area) {
        const SEGMENTS: [[(f32, f32); 4]; 3] = [
            [(5.0, 20.0), (30.0, 40.0), (50.0, 10.0), (90.0, 40.0)],
            [(90.0, 40.0), (130.0, 70.0), (70.0, 120.0), (90.0, 150.0)],
            [(90.0, 150.0), (110.0, 180.0), (60.0, 180.0), (10.0, 190.0)],
        ];
        const STEPS: usize = 96;
        const STROKE: f32 = 4.0;

        let sx = band.w / 100.0;
        let sy = band.h / 200.0;
        let radius = (STROKE * sx / 2.0) * self.scale;
        let limit = (band.x + band.w) * self.scale - radius;

        for [p0, p1, p2, p3] in SEGMENTS {
            for step in 0..=STEPS {
                let t = step as f32 / STEPS as f32;
                let (vx, vy) = cubic_point(p0, p1, p2, p3, t);
                let x = (band.x + vx * sx) * self.scale;
                let y = (band.y + vy * sy) * self.scale;
                if x > limit {
                    continue;
                }
                draw_filled_circle_mut(
                    canvas,
                    (x.round() as i32, y.round() as i32),
                    radius.round().max(1.0) as i32,
                    SQUIGGLE,
                );
            }
        }
    }

    fn draw_photo_panel(&self, canvas: &mut RgbaImage, photo: &PhotoSlot) {
        let zone = Area::new(
            BAND_WIDTH,
            PANEL_INSET,
            CARD_WIDTH as f32 - BAND_WIDTH - PANEL_INSET,
            TOP_HEIGHT - 2.0 * PANEL_INSET,
        );
        self.fill_gradient(
            canvas,
            zone,
            145.0,
            &[(0.0, PURPLE_LIGHT), (0.4, PURPLE_MID), (1.0, PURPLE_DARK)],
        );

        let frame = zone.centred(zone.w * FRAME_WIDTH_RATIO, zone.h * FRAME_HEIGHT_RATIO);
        self.fill(canvas, frame, BLACK);

        let inner = frame.inset(FRAME_BORDER);
        self.fill(canvas, inner, CARD_BG);

        match photo {
            PhotoSlot::Photo(photo) => self.draw_cover(canvas, inner, photo.image()),
            PhotoSlot::Prompt(text) => self.draw_prompt(canvas, inner, text),
        }
    }

    /// Scales the image to cover `area` completely, cropping the overflow.
    fn draw_cover(&self, canvas: &mut RgbaImage, area: Area, image: &DynamicImage) {
        let (x0, y0, x1, y1) = self.bounds(area);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let fitted = image
            .resize_to_fill((x1 - x0) as u32, (y1 - y0) as u32, FilterType::Lanczos3)
            .to_rgba8();
        imageops::overlay(canvas, &fitted, x0 as i64, y0 as i64);
    }

    fn draw_prompt(&self, canvas: &mut RgbaImage, area: Area, text: &str) {
        let Some(font) = self.fonts.regular() else {
            return;
        };

        let scale = self.font_scale(PROMPT_SIZE);
        let max_width = (area.w - 2.0 * PROMPT_PADDING) * self.scale;
        let lines = wrap_text(font, text, scale, max_width);

        let block_height = PROMPT_LINE_HEIGHT * lines.len() as f32;
        let mut y = area.y + (area.h - block_height) / 2.0;
        for line in &lines {
            let width = measure_text_width(font, line, scale) / self.scale;
            let x = area.x + (area.w - width) / 2.0;
            self.draw_line(canvas, font, line, x, y, PROMPT_SIZE, PROMPT_LINE_HEIGHT, INK);
            y += PROMPT_LINE_HEIGHT;
        }
    }

    /// Draws the dark lower half and returns where the footer starts.
    fn draw_stats(&self, canvas: &mut RgbaImage, view: &CardView) -> f32 {
        let bottom = Area::new(
            0.0,
            TOP_HEIGHT,
            CARD_WIDTH as f32,
            CARD_HEIGHT as f32 - TOP_HEIGHT,
        );
        self.fill(canvas, bottom, INK);

        let left = BOTTOM_PAD_X;
        let right = BOTTOM_PAD_X + COLUMN_WIDTH + COLUMN_GAP;
        let top = TOP_HEIGHT + BOTTOM_PAD_TOP;

        self.draw_ranked_list(canvas, left, top, TOP_ARTISTS_LABEL, view.ranked_artists());
        self.draw_ranked_list(canvas, right, top, TOP_SONGS_LABEL, view.ranked_songs());

        let list_height = ITEM_PITCH * view.artists.len() as f32;
        let stats_y = top + LABEL_LINE_HEIGHT + LABEL_GAP + list_height + STATS_GAP;
        let value_y = stats_y + LABEL_LINE_HEIGHT + VALUE_GAP;

        self.draw_caption(canvas, left, stats_y, MINUTES_LABEL);
        self.draw_value(canvas, left, value_y, MINUTES_SIZE, &view.minutes);

        // Genre sits on the same baseline as the larger minutes figure
        let genre_offset = MINUTES_SIZE - GENRE_SIZE;
        self.draw_caption(canvas, right, stats_y + genre_offset, GENRE_LABEL);
        self.draw_value(canvas, right, value_y + genre_offset, GENRE_SIZE, view.genre);

        value_y + MINUTES_SIZE + FOOTER_GAP
    }

    fn draw_ranked_list<'v>(
        &self,
        canvas: &mut RgbaImage,
        x: f32,
        y: f32,
        caption: &str,
        items: impl Iterator<Item = (usize, &'v str)>,
    ) {
        self.draw_caption(canvas, x, y, caption);

        let (Some(bold), Some(regular)) = (self.fonts.bold(), self.fonts.regular()) else {
            return;
        };

        let scale = self.font_scale(ITEM_SIZE);
        let label_x = x + RANK_WIDTH + RANK_GAP;
        let label_width = (COLUMN_WIDTH - RANK_WIDTH - RANK_GAP) * self.scale;

        let mut item_y = y + LABEL_LINE_HEIGHT + LABEL_GAP;
        for (rank, label) in items {
            let rank = rank.to_string();
            self.draw_line(canvas, bold, &rank, x, item_y, ITEM_SIZE, ITEM_PITCH, LIGHT_TEXT);

            let label = truncate_to_width(regular, label, scale, label_width);
            self.draw_line(canvas, regular, &label, label_x, item_y, ITEM_SIZE, ITEM_PITCH, LIGHT_TEXT);

            item_y += ITEM_PITCH;
        }
    }

    /// Small uppercase, letter-spaced heading.
    fn draw_caption(&self, canvas: &mut RgbaImage, x: f32, y: f32, text: &str) {
        let Some(font) = self.fonts.regular() else {
            return;
        };

        let scale = self.font_scale(LABEL_SIZE);
        let scaled = font.as_scaled(scale);
        let tracking = LABEL_TRACKING * LABEL_SIZE * self.scale;
        let top = self.px(y + (LABEL_LINE_HEIGHT - LABEL_SIZE) / 2.0);

        let mut pen = x * self.scale;
        let mut buf = [0u8; 4];
        for ch in text.to_uppercase().chars() {
            let glyph = ch.encode_utf8(&mut buf);
            draw_text_mut(canvas, MUTED, pen.round() as i32, top, scale, font, glyph);
            pen += scaled.h_advance(font.glyph_id(ch)) + tracking;
        }
    }

    fn draw_value(&self, canvas: &mut RgbaImage, x: f32, y: f32, size: f32, text: &str) {
        let Some(font) = self.fonts.bold() else {
            return;
        };

        let scale = self.font_scale(size);
        let text = truncate_to_width(font, text, scale, COLUMN_WIDTH * self.scale);
        self.draw_line(canvas, font, &text, x, y, size, size, LIGHT_TEXT);
    }

    fn draw_footer(&self, canvas: &mut RgbaImage, y: f32) {
        let radius = LOGO_SIZE / 2.0;
        let cx = BOTTOM_PAD_X + radius;
        let cy = y + radius;
        draw_filled_circle_mut(
            canvas,
            (self.px(cx), self.px(cy)),
            self.px(radius),
            CARD_BG,
        );

        // Three bottom-aligned bars, tallest first
        let bars_width = LOGO_BARS.len() as f32 * LOGO_BAR_WIDTH
            + (LOGO_BARS.len() - 1) as f32 * LOGO_BAR_GAP;
        let bars_bottom = cy + LOGO_BARS[0] / 2.0;
        let mut bar_x = cx - bars_width / 2.0;
        for height in LOGO_BARS {
            let bar = Area::new(bar_x, bars_bottom - height, LOGO_BAR_WIDTH, height);
            self.fill(canvas, bar, BRAND_GREEN);
            bar_x += LOGO_BAR_WIDTH + LOGO_BAR_GAP;
        }

        let Some(font) = self.fonts.regular() else {
            return;
        };

        let name_x = BOTTOM_PAD_X + LOGO_SIZE + 8.0;
        self.draw_line(canvas, font, BRAND_NAME, name_x, y, LABEL_SIZE, LOGO_SIZE, MUTED);

        let url_width = measure_text_width(font, BRAND_URL, self.font_scale(LABEL_SIZE)) / self.scale;
        let url_x = CARD_WIDTH as f32 - BOTTOM_PAD_X - url_width;
        self.draw_line(canvas, font, BRAND_URL, url_x, y, LABEL_SIZE, LOGO_SIZE, MUTED);
    }

    /// Clips the card to a rounded rectangle with a thin border, everything
    /// outside is painted with the page background.
    fn round_corners(&self, canvas: &mut RgbaImage) {
        let (width, height) = canvas.dimensions();
        let radius = CORNER_RADIUS * self.scale;
        let border = BORDER_WIDTH * self.scale;
        let (w, h) = (width as f32, height as f32);

        for y in 0..height {
            for x in 0..width {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;

                // Distance from the rectangle inset by the radius, a point is
                // on the card when it lies within one radius of it.
                let nx = fx.clamp(radius, w - radius);
                let ny = fy.clamp(radius, h - radius);
                let distance = ((fx - nx).powi(2) + (fy - ny).powi(2)).sqrt();

                if distance > radius {
                    canvas.put_pixel(x, y, CARD_BG);
                } else if distance > radius - border {
                    canvas.put_pixel(x, y, BORDER);
                }
            }
        }
    }

    /// Draws one line of text vertically centred in a line box whose top is
    /// at `y`.
    #[allow(clippy::too_many_arguments)]
    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        font: &FontVec,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        line_height: f32,
        colour: Rgba<u8>,
    ) {
        let top = y + (line_height - size) / 2.0;
        draw_text_mut(
            canvas,
            colour,
            self.px(x),
            self.px(top),
            self.font_scale(size),
            font,
            text,
        );
    }

    fn fill(&self, canvas: &mut RgbaImage, area: Area, colour: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.bounds(area);
        if x1 > x0 && y1 > y0 {
            let rect = Rect::at(x0, y0).of_size((x1 - x0) as u32, (y1 - y0) as u32);
            draw_filled_rect_mut(canvas, rect, colour);
        }
    }

    /// Fills `area` with a CSS-style linear gradient running at `angle`
    /// degrees (0 points up, 90 points right).
    fn fill_gradient(&self, canvas: &mut RgbaImage, area: Area, angle: f32, stops: &[(f32, Rgba<u8>)]) {
        let (x0, y0, x1, y1) = self.bounds(area);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let w = (x1 - x0) as f32;
        let h = (y1 - y0) as f32;
        let radians = angle.to_radians();
        let (dx, dy) = (radians.sin(), -radians.cos());
        let length = (w * dx).abs() + (h * dy).abs();
        let cx = x0 as f32 + w / 2.0;
        let cy = y0 as f32 + h / 2.0;

        for y in y0..y1 {
            for x in x0..x1 {
                let t = ((x as f32 + 0.5 - cx) * dx + (y as f32 + 0.5 - cy) * dy) / length + 0.5;
                canvas.put_pixel(x as u32, y as u32, sample_gradient(stops, t));
            }
        }
    }

    /// Converts a logical area to pixel edges clamped to the canvas.
    fn bounds(&self, area: Area) -> (i32, i32, i32, i32) {
        let (width, height) = self.canvas_size();
        let x0 = self.px(area.x).clamp(0, width as i32);
        let y0 = self.px(area.y).clamp(0, height as i32);
        let x1 = self.px(area.x + area.w).clamp(0, width as i32);
        let y1 = self.px(area.y + area.h).clamp(0, height as i32);
        (x0, y0, x1, y1)
    }

    fn px(&self, value: f32) -> i32 {
        (value * self.scale).round() as i32
    }

    fn font_scale(&self, size: f32) -> PxScale {
        PxScale::from(size * self.scale)
    }
}

fn checker_colour(index: usize) -> Rgba<u8> {
    if index % 2 == 0 { BLACK } else { WHITE }
}

fn cubic_point(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

fn sample_gradient(stops: &[(f32, Rgba<u8>)], t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);

    let Some(&(_, first)) = stops.first() else {
        return CARD_BG;
    };

    let mut previous = (0.0, first);
    for &(position, colour) in stops {
        if t <= position {
            let span = position - previous.0;
            let local = if span > 0.0 { (t - previous.0) / span } else { 1.0 };
            return lerp_colour(previous.1, colour, local);
        }
        previous = (position, colour);
    }

    previous.1
}

fn lerp_colour(from: Rgba<u8>, to: Rgba<u8>, t: f32) -> Rgba<u8> {
    let channel = |i: usize| (from.0[i] as f32 + (to.0[i] as f32 - from.0[i] as f32) * t).round() as u8;
    Rgba([channel(0), channel(1), channel(2), channel(3)])
}

/// Measures the advance width of text in pixels.
fn measure_text_width(font: &FontVec, text: &str, scale: PxScale) -> f32 {
    let scaled = font.as_scaled(scale);
    text.chars().map(|ch| scaled.h_advance(font.glyph_id(ch))).sum()
}

/// Shortens text to fit within `max_width` pixels, ending in an ellipsis.
fn truncate_to_width(font: &FontVec, text: &str, scale: PxScale, max_width: f32) -> String {
    if measure_text_width(font, text, scale) <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "…";
    let available = max_width - measure_text_width(font, ELLIPSIS, scale);

    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut truncated = String::new();
    for ch in text.chars() {
        width += scaled.h_advance(font.glyph_id(ch));
        if width > available {
            break;
        }
        truncated.push(ch);
    }

    format!("{}{}", truncated.trim_end(), ELLIPSIS)
}

/// Greedy word wrap. A single word wider than the line is kept whole.
fn wrap_text(font: &FontVec, text: &str, scale: PxScale, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || measure_text_width(font, &candidate, scale) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
