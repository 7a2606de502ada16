/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::images::YuvRow;
use crate::numerics::saturate_u8;
use crate::yuv_support::{BT601_FULL_RANGE, UV_BIAS};
use crate::PixelConverter;

/// Portable per-pixel converter.
///
/// Evaluates the BT.601 full range transform in `f32`, truncates every term toward zero
/// and saturates. Works for any width, height and stride; it is the oracle the vector
/// kernels are tested against.
#[derive(Debug, Default, Copy, Clone)]
pub struct ReferenceConverter;

#[inline(always)]
pub(crate) fn reference_pixel(y: u8, u: u8, v: u8) -> [u8; 3] {
    let transform = BT601_FULL_RANGE;
    let y = y as i32;
    let cb = (u as i32 - UV_BIAS) as f32;
    let cr = (v as i32 - UV_BIAS) as f32;

    let r = y + (transform.cr_coef * cr) as i32;
    let g = y - (transform.g_coeff_2 * cb) as i32 - (transform.g_coeff_1 * cr) as i32;
    let b = y + (transform.cb_coef * cb) as i32;

    [saturate_u8(r), saturate_u8(g), saturate_u8(b)]
}

/// Converts columns `start_cx..` of `row`; used on its own and as the tail of the
/// vector kernels.
#[inline]
pub(crate) fn reference_row(row: &YuvRow<'_>, rgb: &mut [u8], start_cx: usize) {
    let rgb = &mut rgb[start_cx * 3..row.width() * 3];
    for ((x, dst), &y_src) in (start_cx..)
        .zip(rgb.chunks_exact_mut(3))
        .zip(row.y_plane[start_cx..].iter())
    {
        let uv_index = (x >> 1) * row.uv_pixel_stride;
        let pixel = reference_pixel(y_src, row.u_plane[uv_index], row.v_plane[uv_index]);
        dst.copy_from_slice(&pixel);
    }
}

impl PixelConverter for ReferenceConverter {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn convert_row(&self, row: &YuvRow<'_>, rgb: &mut [u8]) {
        reference_row(row, rgb, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YuvPlanarImage;

    #[test]
    fn test_neutral_chroma_is_gray() {
        for y in 0..=255u8 {
            assert_eq!(reference_pixel(y, 128, 128), [y, y, y]);
        }
    }

    #[test]
    fn test_red_saturation() {
        // 128 + trunc(1.402 * 127) = 306
        let [r, g, b] = reference_pixel(128, 128, 255);
        assert_eq!(r, 255);
        assert_eq!(g, 128 - 90);
        assert_eq!(b, 128);
        // 128 + trunc(1.402 * -128) = -51
        let [r, _, _] = reference_pixel(128, 128, 0);
        assert_eq!(r, 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // cr = -1: 1.402 * -1 = -1.402 -> -1, 0.714136 * -1 -> 0
        assert_eq!(reference_pixel(100, 128, 127), [99, 100, 100]);
        // cb = 1: 0.344136 -> 0, 1.772 -> 1
        assert_eq!(reference_pixel(100, 129, 128), [100, 100, 101]);
    }

    #[test]
    fn test_row_uses_nearest_chroma() {
        let y = [10u8, 20, 30, 40, 50];
        let u = [128u8, 128, 128];
        let v = [128u8, 200, 128];
        let image = YuvPlanarImage::new_i420(&y, &u, &v, 5, 1);
        let row = image.row(0);
        let mut rgb = [0u8; 15];
        ReferenceConverter.convert_row(&row, &mut rgb);
        assert_eq!(&rgb[0..3], &[10, 10, 10]);
        assert_eq!(&rgb[3..6], &[20, 20, 20]);
        // columns 2 and 3 share v = 200
        assert_eq!(rgb[6], saturate_u8(30 + (1.402f32 * 72.) as i32));
        assert_eq!(rgb[9], saturate_u8(40 + (1.402f32 * 72.) as i32));
        assert_eq!(&rgb[12..15], &[50, 50, 50]);
    }

    #[test]
    fn test_row_tail_leaves_head_untouched() {
        let y = [90u8; 7];
        let uv = [128u8; 4];
        let image = YuvPlanarImage::new_i420(&y, &uv, &uv, 7, 1);
        let mut rgb = [0u8; 21];
        reference_row(&image.row(0), &mut rgb, 4);
        assert!(rgb[..12].iter().all(|&x| x == 0));
        assert!(rgb[12..].iter().all(|&x| x == 90));
    }
}
