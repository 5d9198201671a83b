//! Overlay Composer: renders a generated grid and its word list onto a
//! background photo as a printable puzzle sheet.
//!
//! This layer is deliberately thin over `image`/`imageproc`; the puzzle core
//! hands it a finished grid and placement map and treats the background
//! opaquely.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use hashbrown::HashSet;
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::grid::Grid;
use crate::placer::PlacementMap;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Bold fonts probed when the caller does not supply one.
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Fraction of the image width the grid spans.
    pub grid_width_frac: f32,
    /// Alpha applied to the background photo before compositing over white.
    pub backdrop_alpha: u8,
    /// Padding between word-list rows, in pixels.
    pub list_padding: u32,
    /// Words per word-list column.
    pub words_per_column: usize,
    /// Explicit TTF path; [`FALLBACK_FONTS`] are probed when None.
    pub font_path: Option<PathBuf>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            grid_width_frac: 0.75,
            backdrop_alpha: 100,
            list_padding: 10,
            words_per_column: 6,
            font_path: None,
        }
    }
}

fn load_font(explicit: Option<&Path>) -> Result<FontVec, String> {
    if let Some(path) = explicit {
        let bytes = fs::read(path)
            .map_err(|e| format!("failed to read font {}: {e}", path.display()))?;
        return FontVec::try_from_vec(bytes)
            .map_err(|e| format!("failed to parse font {}: {e}", path.display()));
    }
    for candidate in FALLBACK_FONTS {
        if let Ok(bytes) = fs::read(candidate) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                return Ok(font);
            }
        }
    }
    Err("no usable font found; pass an explicit TTF path".to_string())
}

/// Decode a background image and rotate it to portrait orientation when it
/// comes in landscape.
pub fn load_and_orient_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| format!("failed to open image {}: {e}", path.display()))?
        .to_rgba8();
    if img.width() > img.height() {
        Ok(imageops::rotate90(&img))
    } else {
        Ok(img)
    }
}

fn apply_backdrop_alpha(img: &mut RgbaImage, alpha: u8) {
    for pixel in img.pixels_mut() {
        pixel[3] = alpha;
    }
}

/// Transparent panel holding the word list in columns of `per_column` words,
/// rows spaced by font size + padding.
fn word_list_panel(
    words: &[String],
    font: &FontVec,
    font_px: f32,
    padding: u32,
    per_column: usize,
) -> RgbaImage {
    let scale = PxScale::from(font_px);
    let font_px_u = font_px as u32;
    let row_step = font_px_u + padding;

    let columns: Vec<&[String]> = words.chunks(per_column).collect();
    let longest = words.iter().map(String::len).max().unwrap_or(0) as u32;
    let column_spacing = (0.75 * (longest + 1) as f32 * font_px / 2.0) as u32;
    let column_widths: Vec<u32> = columns
        .iter()
        .map(|col| {
            let len = col.iter().map(String::len).max().unwrap_or(0) as u32;
            (len + 5) * font_px_u / 2
        })
        .collect();

    let width = column_widths.iter().sum::<u32>()
        + column_spacing * columns.len().saturating_sub(1) as u32;
    let height = per_column as u32 * row_step;

    let mut panel = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([255, 255, 255, 0]));
    let mut x_offset: u32 = 0;
    for (col_idx, col) in columns.iter().enumerate() {
        for (row_idx, word) in col.iter().enumerate() {
            let x = (x_offset + padding) as i32;
            let y = (padding + row_idx as u32 * row_step) as i32;
            draw_text_mut(&mut panel, BLACK, x, y, scale, font, word);
        }
        x_offset += column_widths[col_idx] + column_spacing;
    }
    panel
}

/// Composite the grid and word list over the background image and write the
/// result to `out_path` (format chosen by extension, PNG in practice).
///
/// Layout follows the printable-sheet convention: grid across 75% of the
/// width, centered horizontally, its center anchored to the top third of the
/// page and nudged down 10%; the word list sits midway between the grid and
/// the bottom edge. Letters covered by a placement render blue, fill letters
/// black.
pub fn compose_overlay(
    grid: &Grid,
    placements: &PlacementMap,
    words: &[String],
    image_path: &Path,
    out_path: &Path,
    cfg: &OverlayConfig,
) -> Result<(), String> {
    let font = load_font(cfg.font_path.as_deref())?;

    let background = load_and_orient_image(image_path)?;
    let (width, height) = background.dimensions();

    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);
    let mut backdrop = background;
    apply_backdrop_alpha(&mut backdrop, cfg.backdrop_alpha);
    imageops::overlay(&mut canvas, &backdrop, 0, 0);

    let side = grid.side() as u32;
    let target_width = (width as f32 * cfg.grid_width_frac) as u32;
    let cell = (target_width / side).max(1);
    let grid_px = cell * side;

    let font_px = (cell / 2 + 5) as f32;
    let scale = PxScale::from(font_px);

    let start_x = (i64::from(width) - i64::from(grid_px)) / 2;
    let mut start_y = i64::from(height) / 3 - i64::from(grid_px) / 2;
    start_y += (f64::from(height) * 0.10) as i64;

    let mut placed_cells: HashSet<(u8, u8)> = HashSet::new();
    for cells in placements.values() {
        for &(r, c) in cells {
            placed_cells.insert((r, c));
        }
    }

    for r in 0..grid.side() {
        for c in 0..grid.side() {
            let letter = grid.char_at(r, c).to_string();
            let color = if placed_cells.contains(&(r as u8, c as u8)) {
                BLUE
            } else {
                BLACK
            };
            let (tw, th) = text_size(scale, &font, &letter);
            let x = start_x + c as i64 * i64::from(cell) + (i64::from(cell) - i64::from(tw)) / 2;
            let y = start_y + r as i64 * i64::from(cell) + (i64::from(cell) - i64::from(th)) / 2;
            draw_text_mut(&mut canvas, color, x as i32, y as i32, scale, &font, &letter);
        }
    }

    if !words.is_empty() {
        let per_column = cfg.words_per_column.max(1);
        let panel = word_list_panel(words, &font, font_px, cfg.list_padding, per_column);
        let grid_bottom = start_y + i64::from(grid_px);
        let list_y = grid_bottom + (i64::from(height) - i64::from(grid_px) - start_y) / 2
            - i64::from(panel.height()) / 2;
        let list_x = (i64::from(width) - i64::from(panel.width())) / 2;
        imageops::overlay(&mut canvas, &panel, list_x, list_y);
    }

    canvas
        .save(out_path)
        .map_err(|e| format!("failed to write {}: {e}", out_path.display()))
}
