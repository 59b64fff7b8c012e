// SPDX-License-Identifier: MPL-2.0
//! Interpretation of filter transform descriptors.
//!
//! Descriptors use the CSS filter-function shorthand: a whitespace-separated
//! list such as `"grayscale(1) contrast(1.15)"`, or the keyword `none`.
//! Every supported function is a color-space affine map, so a whole
//! descriptor collapses into a single [`ColorMatrix`] and rendering is one
//! pass over the pixels. Alpha is never touched.
//!
//! Supported functions (matrices from the W3C Filter Effects definitions):
//!
//! | Function          | Argument                |
//! |-------------------|-------------------------|
//! | `grayscale(x)`    | clamped to `[0, 1]`     |
//! | `sepia(x)`        | clamped to `[0, 1]`     |
//! | `invert(x)`       | clamped to `[0, 1]`     |
//! | `saturate(x)`     | clamped to `x >= 0`     |
//! | `brightness(x)`   | clamped to `x >= 0`     |
//! | `contrast(x)`     | clamped to `x >= 0`     |
//! | `hue-rotate(Ndeg)`| any angle, `deg` suffix optional |

use crate::error::{Error, Result};
use crate::media::ImageData;
use image_rs::imageops::FilterType;

/// Longest edge of a preview rendition, in pixels.
///
/// Selection renders synchronously on the UI thread, so previews work on a
/// downscaled copy when the source is larger than this. Exports always use
/// the full resolution.
pub const PREVIEW_MAX_EDGE: u32 = 1280;

// Rec. 709 luma weights used by the grayscale/saturate matrices.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

// =============================================================================
// Color Matrix
// =============================================================================

/// Affine color map: a 3x3 linear part plus an offset column.
///
/// Rows act on `[r, g, b]` in normalized `0..=1` space; the fourth entry of
/// each row is the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f32; 4]; 3],
}

impl ColorMatrix {
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
    };

    /// Builds a matrix from a linear 3x3 part with zero offset.
    #[must_use]
    fn linear(m: [[f32; 3]; 3]) -> Self {
        Self {
            rows: [
                [m[0][0], m[0][1], m[0][2], 0.0],
                [m[1][0], m[1][1], m[1][2], 0.0],
                [m[2][0], m[2][1], m[2][2], 0.0],
            ],
        }
    }

    /// Builds a diagonal matrix with a uniform offset on every channel.
    #[must_use]
    fn scale_offset(scale: f32, offset: f32) -> Self {
        Self {
            rows: [
                [scale, 0.0, 0.0, offset],
                [0.0, scale, 0.0, offset],
                [0.0, 0.0, scale, offset],
            ],
        }
    }

    /// Returns the matrix applying `inner` first, then `self`.
    #[must_use]
    fn compose(&self, inner: &Self) -> Self {
        let mut rows = [[0.0f32; 4]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for j in 0..3 {
                row[j] = (0..3).map(|k| self.rows[i][k] * inner.rows[k][j]).sum();
            }
            row[3] = (0..3)
                .map(|k| self.rows[i][k] * inner.rows[k][3])
                .sum::<f32>()
                + self.rows[i][3];
        }
        Self { rows }
    }

    /// Whether applying this matrix would leave every pixel unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        const EPSILON: f32 = 1e-6;
        self.rows
            .iter()
            .zip(Self::IDENTITY.rows.iter())
            .all(|(row, id_row)| {
                row.iter()
                    .zip(id_row.iter())
                    .all(|(a, b)| (a - b).abs() < EPSILON)
            })
    }

    /// Maps one normalized RGB triple, clamping the result to `0..=1`.
    #[must_use]
    fn map(&self, r: f32, g: f32, b: f32) -> (f32, f32, f32) {
        let out = |row: &[f32; 4]| (row[0] * r + row[1] * g + row[2] * b + row[3]).clamp(0.0, 1.0);
        (out(&self.rows[0]), out(&self.rows[1]), out(&self.rows[2]))
    }
}

// =============================================================================
// Per-function matrices
// =============================================================================

/// `saturate(s)`; also covers `grayscale(a)` as `saturation(1 - a)`.
fn saturation_matrix(s: f32) -> ColorMatrix {
    ColorMatrix::linear([
        [
            LUMA_R + (1.0 - LUMA_R) * s,
            LUMA_G * (1.0 - s),
            LUMA_B * (1.0 - s),
        ],
        [
            LUMA_R * (1.0 - s),
            LUMA_G + (1.0 - LUMA_G) * s,
            LUMA_B * (1.0 - s),
        ],
        [
            LUMA_R * (1.0 - s),
            LUMA_G * (1.0 - s),
            LUMA_B + (1.0 - LUMA_B) * s,
        ],
    ])
}

/// `sepia(a)`: linear interpolation between identity and the full sepia map.
fn sepia_matrix(amount: f32) -> ColorMatrix {
    const SEPIA: [[f32; 3]; 3] = [
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ];
    let mut m = [[0.0f32; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let identity = if i == j { 1.0 } else { 0.0 };
            *cell = identity + (SEPIA[i][j] - identity) * amount;
        }
    }
    ColorMatrix::linear(m)
}

/// `hue-rotate(angle)`: the feColorMatrix hueRotate table.
fn hue_rotate_matrix(degrees: f32) -> ColorMatrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    ColorMatrix::linear([
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ])
}

/// `invert(a)`: `c' = a + c * (1 - 2a)`.
fn invert_matrix(amount: f32) -> ColorMatrix {
    ColorMatrix::scale_offset(1.0 - 2.0 * amount, amount)
}

/// `contrast(k)`: scale around the mid-point.
fn contrast_matrix(k: f32) -> ColorMatrix {
    ColorMatrix::scale_offset(k, 0.5 * (1.0 - k))
}

// =============================================================================
// Descriptor parsing
// =============================================================================

/// Parses a transform descriptor into a single color matrix.
///
/// Functions compose left to right, without intermediate clamping; the final
/// result is clamped per channel when applied to pixels.
///
/// # Errors
///
/// Returns [`Error::Filter`] for an empty descriptor, an unknown function,
/// or a malformed argument.
pub fn parse_transform(descriptor: &str) -> Result<ColorMatrix> {
    let descriptor = descriptor.trim();
    if descriptor.is_empty() {
        return Err(Error::Filter("empty transform descriptor".into()));
    }
    if descriptor == "none" {
        return Ok(ColorMatrix::IDENTITY);
    }

    let mut matrix = ColorMatrix::IDENTITY;
    for token in descriptor.split_whitespace() {
        let step = parse_function(token)?;
        matrix = step.compose(&matrix);
    }
    Ok(matrix)
}

/// Parses one `name(argument)` token.
fn parse_function(token: &str) -> Result<ColorMatrix> {
    let open = token
        .find('(')
        .ok_or_else(|| Error::Filter(format!("expected function call, got: {token}")))?;
    let body = token
        .strip_suffix(')')
        .ok_or_else(|| Error::Filter(format!("missing closing parenthesis: {token}")))?;
    let name = &token[..open];
    let argument = body[open + 1..].trim();

    match name {
        "grayscale" => Ok(saturation_matrix(1.0 - parse_fraction(name, argument)?)),
        "sepia" => Ok(sepia_matrix(parse_fraction(name, argument)?)),
        "invert" => Ok(invert_matrix(parse_fraction(name, argument)?)),
        "saturate" => Ok(saturation_matrix(parse_non_negative(name, argument)?)),
        "brightness" => Ok(ColorMatrix::scale_offset(
            parse_non_negative(name, argument)?,
            0.0,
        )),
        "contrast" => Ok(contrast_matrix(parse_non_negative(name, argument)?)),
        "hue-rotate" => Ok(hue_rotate_matrix(parse_angle(name, argument)?)),
        other => Err(Error::Filter(format!("unknown function: {other}"))),
    }
}

fn parse_number(name: &str, argument: &str) -> Result<f32> {
    argument
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::Filter(format!("invalid argument for {name}: {argument}")))
}

/// Amount in `[0, 1]`; out-of-range values are clamped, not rejected.
fn parse_fraction(name: &str, argument: &str) -> Result<f32> {
    Ok(parse_number(name, argument)?.clamp(0.0, 1.0))
}

fn parse_non_negative(name: &str, argument: &str) -> Result<f32> {
    Ok(parse_number(name, argument)?.max(0.0))
}

/// Angle in degrees; the `deg` suffix is optional, negatives allowed.
fn parse_angle(name: &str, argument: &str) -> Result<f32> {
    let raw = argument.strip_suffix("deg").unwrap_or(argument).trim();
    parse_number(name, raw)
}

// =============================================================================
// Pixel application
// =============================================================================

/// Applies the matrix to an RGBA buffer in place. Alpha bytes pass through.
pub fn apply_to_rgba(pixels: &mut [u8], matrix: &ColorMatrix) {
    if matrix.is_identity() {
        return;
    }
    for pixel in pixels.chunks_exact_mut(4) {
        let r = f32::from(pixel[0]) / 255.0;
        let g = f32::from(pixel[1]) / 255.0;
        let b = f32::from(pixel[2]) / 255.0;
        let (r, g, b) = matrix.map(r, g, b);
        // map() clamps to 0..=1, so the rounded values fit in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            pixel[0] = (r * 255.0).round() as u8;
            pixel[1] = (g * 255.0).round() as u8;
            pixel[2] = (b * 255.0).round() as u8;
        }
    }
}

/// Renders the descriptor for on-screen preview.
///
/// Works on a copy downscaled to [`PREVIEW_MAX_EDGE`] so that selection
/// stays responsive on large sources. The identity descriptor on a
/// small-enough image returns a cheap clone sharing the pixel buffer.
///
/// # Errors
///
/// Returns [`Error::Filter`] if the descriptor does not parse, or
/// [`Error::Image`] if the pixel buffer is inconsistent with the declared
/// dimensions.
pub fn render_preview(image: &ImageData, descriptor: &str) -> Result<ImageData> {
    let matrix = parse_transform(descriptor)?;
    let longest_edge = image.width.max(image.height);

    if longest_edge <= PREVIEW_MAX_EDGE {
        if matrix.is_identity() {
            return Ok(image.clone());
        }
        let mut pixels = image.rgba_bytes().to_vec();
        apply_to_rgba(&mut pixels, &matrix);
        return Ok(ImageData::from_rgba(image.width, image.height, pixels));
    }

    let scale = PREVIEW_MAX_EDGE as f32 / longest_edge as f32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target_width = ((image.width as f32 * scale).round() as u32).max(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target_height = ((image.height as f32 * scale).round() as u32).max(1);

    let buffer =
        image_rs::RgbaImage::from_raw(image.width, image.height, image.rgba_bytes().to_vec())
            .ok_or_else(|| Error::Image("pixel buffer does not match dimensions".into()))?;
    let resized = image_rs::DynamicImage::ImageRgba8(buffer).resize_exact(
        target_width,
        target_height,
        FilterType::Triangle,
    );
    let mut pixels = resized.into_rgba8().into_vec();
    apply_to_rgba(&mut pixels, &matrix);
    Ok(ImageData::from_rgba(target_width, target_height, pixels))
}
