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
use crate::internals::ProcessedOffset;
use crate::yuv_support::{expand_chroma_lanes, INTEGRAL_TRANSFORM, PRECISION, UV_BIAS};
use std::arch::aarch64::*;

/// Converts every complete group of 8 pixels of `row`; the caller finishes the remainder.
pub(crate) fn neon_yuv420_to_rgb_row(row: &YuvRow<'_>, rgb: &mut [u8]) -> ProcessedOffset {
    let width = row.width();
    assert!(rgb.len() >= width * 3);
    unsafe { neon_yuv420_to_rgb_row_impl(row, rgb, width) }
}

/// Division by `2^PRECISION` rounding toward zero.
#[inline(always)]
unsafe fn vtrunc_shrq_s32(v: int32x4_t, bias_mask: int32x4_t) -> int32x4_t {
    let bias = vandq_s32(vshrq_n_s32::<31>(v), bias_mask);
    vshrq_n_s32::<PRECISION>(vaddq_s32(v, bias))
}

#[inline(always)]
unsafe fn neon_ycbcr_to_rgb_x4(
    y: int16x4_t,
    cb: int16x4_t,
    cr: int16x4_t,
    bias_mask: int32x4_t,
) -> (int32x4_t, int32x4_t, int32x4_t) {
    let v_cr_coeff = vdup_n_s16(INTEGRAL_TRANSFORM.cr_coef as i16);
    let v_cb_coeff = vdup_n_s16(INTEGRAL_TRANSFORM.cb_coef as i16);
    let v_g_coeff_1 = vdup_n_s16(INTEGRAL_TRANSFORM.g_coeff_1 as i16);
    let v_g_coeff_2 = vdup_n_s16(INTEGRAL_TRANSFORM.g_coeff_2 as i16);

    let y = vmovl_s16(y);

    let r = vaddq_s32(y, vtrunc_shrq_s32(vmull_s16(cr, v_cr_coeff), bias_mask));
    let g = vsubq_s32(
        vsubq_s32(y, vtrunc_shrq_s32(vmull_s16(cb, v_g_coeff_2), bias_mask)),
        vtrunc_shrq_s32(vmull_s16(cr, v_g_coeff_1), bias_mask),
    );
    let b = vaddq_s32(y, vtrunc_shrq_s32(vmull_s16(cb, v_cb_coeff), bias_mask));
    (r, g, b)
}

#[inline(always)]
unsafe fn vqmovun_s32_x2(low: int32x4_t, high: int32x4_t) -> uint8x8_t {
    vqmovun_s16(vcombine_s16(vqmovn_s32(low), vqmovn_s32(high)))
}

#[target_feature(enable = "neon")]
unsafe fn neon_yuv420_to_rgb_row_impl(
    row: &YuvRow<'_>,
    rgb: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    let y_ptr = row.y_plane.as_ptr();
    let rgb_ptr = rgb.as_mut_ptr();
    let uv_pixel_stride = row.uv_pixel_stride;

    let uv_corr = vdupq_n_s16(UV_BIAS as i16);
    let bias_mask = vdupq_n_s32((1 << PRECISION) - 1);

    let mut cx = 0usize;

    while cx + 8 <= width {
        let y_values = vreinterpretq_s16_u16(vmovl_u8(vld1_u8(y_ptr.add(cx))));

        let uv_x = (cx >> 1) * uv_pixel_stride;
        let u_lanes = expand_chroma_lanes::<8>(row.u_plane, uv_x, uv_pixel_stride);
        let v_lanes = expand_chroma_lanes::<8>(row.v_plane, uv_x, uv_pixel_stride);

        let u_values = vsubq_s16(
            vreinterpretq_s16_u16(vmovl_u8(vld1_u8(u_lanes.as_ptr()))),
            uv_corr,
        );
        let v_values = vsubq_s16(
            vreinterpretq_s16_u16(vmovl_u8(vld1_u8(v_lanes.as_ptr()))),
            uv_corr,
        );

        let (r_low, g_low, b_low) = neon_ycbcr_to_rgb_x4(
            vget_low_s16(y_values),
            vget_low_s16(u_values),
            vget_low_s16(v_values),
            bias_mask,
        );
        let (r_high, g_high, b_high) = neon_ycbcr_to_rgb_x4(
            vget_high_s16(y_values),
            vget_high_s16(u_values),
            vget_high_s16(v_values),
            bias_mask,
        );

        let dst_pack: uint8x8x3_t = uint8x8x3_t(
            vqmovun_s32_x2(r_low, r_high),
            vqmovun_s32_x2(g_low, g_high),
            vqmovun_s32_x2(b_low, b_high),
        );
        vst3_u8(rgb_ptr.add(cx * 3), dst_pack);

        cx += 8;
    }

    ProcessedOffset { cx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_row;
    use crate::yuv_support::assert_kernel_matches_fixed_point;
    use crate::YuvPlanarImage;

    #[test]
    fn test_neon_row_matches_reference() {
        let width = 21usize;
        let y: Vec<u8> = (0..width).map(|x| (x * 12) as u8).collect();
        let u: Vec<u8> = (0..11).map(|x| (x * 25) as u8).collect();
        let v: Vec<u8> = (0..11).map(|x| 250 - (x * 23) as u8).collect();
        let image = YuvPlanarImage::new_i420(&y, &u, &v, width as u32, 1);
        let row = image.row(0);

        let mut simd = vec![0u8; width * 3];
        let processed = neon_yuv420_to_rgb_row(&row, &mut simd);
        assert_eq!(processed.cx, 16);
        let mut reference = vec![0u8; width * 3];
        reference_row(&row, &mut reference, 0);

        for (a, b) in simd[..48].iter().zip(reference.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
        assert!(simd[48..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_neon_row_matches_fixed_point_model() {
        assert_kernel_matches_fixed_point(neon_yuv420_to_rgb_row);
    }
}
