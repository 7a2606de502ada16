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
use crate::sse::sse_store_rgb_half_u8;
use crate::yuv_support::{expand_chroma_lanes, INTEGRAL_TRANSFORM, PRECISION, UV_BIAS};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Converts every complete group of 8 pixels of `row`; the caller finishes the remainder.
pub(crate) fn sse_yuv420_to_rgb_row(row: &YuvRow<'_>, rgb: &mut [u8]) -> ProcessedOffset {
    let width = row.width();
    assert!(rgb.len() >= width * 3);
    unsafe { sse_yuv420_to_rgb_row_impl(row, rgb, width) }
}

/// Division by `2^PRECISION` rounding toward zero.
#[inline(always)]
unsafe fn _mm_trunc_shr_epi32(v: __m128i, bias_mask: __m128i) -> __m128i {
    let bias = _mm_and_si128(_mm_srai_epi32::<31>(v), bias_mask);
    _mm_srai_epi32::<PRECISION>(_mm_add_epi32(v, bias))
}

#[inline(always)]
unsafe fn sse_ycbcr_to_rgb_x4(
    y: __m128i,
    cb: __m128i,
    cr: __m128i,
    bias_mask: __m128i,
) -> (__m128i, __m128i, __m128i) {
    let v_cr_coeff = _mm_set1_epi32(INTEGRAL_TRANSFORM.cr_coef);
    let v_cb_coeff = _mm_set1_epi32(INTEGRAL_TRANSFORM.cb_coef);
    let v_g_coeff_1 = _mm_set1_epi32(INTEGRAL_TRANSFORM.g_coeff_1);
    let v_g_coeff_2 = _mm_set1_epi32(INTEGRAL_TRANSFORM.g_coeff_2);

    let r = _mm_add_epi32(
        y,
        _mm_trunc_shr_epi32(_mm_mullo_epi32(cr, v_cr_coeff), bias_mask),
    );
    let g = _mm_sub_epi32(
        _mm_sub_epi32(
            y,
            _mm_trunc_shr_epi32(_mm_mullo_epi32(cb, v_g_coeff_2), bias_mask),
        ),
        _mm_trunc_shr_epi32(_mm_mullo_epi32(cr, v_g_coeff_1), bias_mask),
    );
    let b = _mm_add_epi32(
        y,
        _mm_trunc_shr_epi32(_mm_mullo_epi32(cb, v_cb_coeff), bias_mask),
    );
    (r, g, b)
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_yuv420_to_rgb_row_impl(
    row: &YuvRow<'_>,
    rgb: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    let y_ptr = row.y_plane.as_ptr();
    let rgb_ptr = rgb.as_mut_ptr();
    let uv_pixel_stride = row.uv_pixel_stride;

    let uv_corr = _mm_set1_epi32(UV_BIAS);
    let bias_mask = _mm_set1_epi32((1 << PRECISION) - 1);

    let mut cx = 0usize;

    while cx + 8 <= width {
        let y_values = _mm_loadl_epi64(y_ptr.add(cx) as *const __m128i);
        let y_low = _mm_cvtepu8_epi32(y_values);
        let y_high = _mm_cvtepu8_epi32(_mm_srli_si128::<4>(y_values));

        let uv_x = (cx >> 1) * uv_pixel_stride;
        let u_lanes = expand_chroma_lanes::<8>(row.u_plane, uv_x, uv_pixel_stride);
        let v_lanes = expand_chroma_lanes::<8>(row.v_plane, uv_x, uv_pixel_stride);
        let u_values = _mm_loadl_epi64(u_lanes.as_ptr() as *const __m128i);
        let v_values = _mm_loadl_epi64(v_lanes.as_ptr() as *const __m128i);

        let u_low = _mm_sub_epi32(_mm_cvtepu8_epi32(u_values), uv_corr);
        let u_high = _mm_sub_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(u_values)), uv_corr);
        let v_low = _mm_sub_epi32(_mm_cvtepu8_epi32(v_values), uv_corr);
        let v_high = _mm_sub_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(v_values)), uv_corr);

        let (r_low, g_low, b_low) = sse_ycbcr_to_rgb_x4(y_low, u_low, v_low, bias_mask);
        let (r_high, g_high, b_high) = sse_ycbcr_to_rgb_x4(y_high, u_high, v_high, bias_mask);

        let r_values = _mm_packs_epi32(r_low, r_high);
        let g_values = _mm_packs_epi32(g_low, g_high);
        let b_values = _mm_packs_epi32(b_low, b_high);

        sse_store_rgb_half_u8(
            rgb_ptr.add(cx * 3),
            _mm_packus_epi16(r_values, r_values),
            _mm_packus_epi16(g_values, g_values),
            _mm_packus_epi16(b_values, b_values),
        );

        cx += 8;
    }

    ProcessedOffset { cx }
}
