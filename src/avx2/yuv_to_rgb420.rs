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
use crate::sse::sse_store_rgb_u8;
use crate::yuv_support::{expand_chroma_lanes, INTEGRAL_TRANSFORM, PRECISION, UV_BIAS};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Converts every complete group of 16 pixels of `row`; the caller finishes the remainder.
pub(crate) fn avx2_yuv420_to_rgb_row(row: &YuvRow<'_>, rgb: &mut [u8]) -> ProcessedOffset {
    let width = row.width();
    assert!(rgb.len() >= width * 3);
    unsafe { avx2_yuv420_to_rgb_row_impl(row, rgb, width) }
}

#[inline(always)]
unsafe fn _mm256_trunc_shr_epi32(v: __m256i, bias_mask: __m256i) -> __m256i {
    let bias = _mm256_and_si256(_mm256_srai_epi32::<31>(v), bias_mask);
    _mm256_srai_epi32::<PRECISION>(_mm256_add_epi32(v, bias))
}

#[inline(always)]
unsafe fn avx2_ycbcr_to_rgb_x8(
    y: __m256i,
    cb: __m256i,
    cr: __m256i,
    bias_mask: __m256i,
) -> (__m256i, __m256i, __m256i) {
    let v_cr_coeff = _mm256_set1_epi32(INTEGRAL_TRANSFORM.cr_coef);
    let v_cb_coeff = _mm256_set1_epi32(INTEGRAL_TRANSFORM.cb_coef);
    let v_g_coeff_1 = _mm256_set1_epi32(INTEGRAL_TRANSFORM.g_coeff_1);
    let v_g_coeff_2 = _mm256_set1_epi32(INTEGRAL_TRANSFORM.g_coeff_2);

    let r = _mm256_add_epi32(
        y,
        _mm256_trunc_shr_epi32(_mm256_mullo_epi32(cr, v_cr_coeff), bias_mask),
    );
    let g = _mm256_sub_epi32(
        _mm256_sub_epi32(
            y,
            _mm256_trunc_shr_epi32(_mm256_mullo_epi32(cb, v_g_coeff_2), bias_mask),
        ),
        _mm256_trunc_shr_epi32(_mm256_mullo_epi32(cr, v_g_coeff_1), bias_mask),
    );
    let b = _mm256_add_epi32(
        y,
        _mm256_trunc_shr_epi32(_mm256_mullo_epi32(cb, v_cb_coeff), bias_mask),
    );
    (r, g, b)
}

/// Saturates 16 x i32 held in two registers down to 16 x u8 in pixel order.
#[inline(always)]
unsafe fn _mm256_packus_x2_epi32(low: __m256i, high: __m256i) -> __m128i {
    let low = _mm_packs_epi32(
        _mm256_castsi256_si128(low),
        _mm256_extracti128_si256::<1>(low),
    );
    let high = _mm_packs_epi32(
        _mm256_castsi256_si128(high),
        _mm256_extracti128_si256::<1>(high),
    );
    _mm_packus_epi16(low, high)
}

#[target_feature(enable = "avx2")]
unsafe fn avx2_yuv420_to_rgb_row_impl(
    row: &YuvRow<'_>,
    rgb: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    let y_ptr = row.y_plane.as_ptr();
    let rgb_ptr = rgb.as_mut_ptr();
    let uv_pixel_stride = row.uv_pixel_stride;

    let uv_corr = _mm256_set1_epi32(UV_BIAS);
    let bias_mask = _mm256_set1_epi32((1 << PRECISION) - 1);

    let mut cx = 0usize;

    while cx + 16 <= width {
        let y_values = _mm_loadu_si128(y_ptr.add(cx) as *const __m128i);
        let y_low = _mm256_cvtepu8_epi32(y_values);
        let y_high = _mm256_cvtepu8_epi32(_mm_srli_si128::<8>(y_values));

        let uv_x = (cx >> 1) * uv_pixel_stride;
        let u_lanes = expand_chroma_lanes::<16>(row.u_plane, uv_x, uv_pixel_stride);
        let v_lanes = expand_chroma_lanes::<16>(row.v_plane, uv_x, uv_pixel_stride);
        let u_values = _mm_loadu_si128(u_lanes.as_ptr() as *const __m128i);
        let v_values = _mm_loadu_si128(v_lanes.as_ptr() as *const __m128i);

        let u_low = _mm256_sub_epi32(_mm256_cvtepu8_epi32(u_values), uv_corr);
        let u_high = _mm256_sub_epi32(
            _mm256_cvtepu8_epi32(_mm_srli_si128::<8>(u_values)),
            uv_corr,
        );
        let v_low = _mm256_sub_epi32(_mm256_cvtepu8_epi32(v_values), uv_corr);
        let v_high = _mm256_sub_epi32(
            _mm256_cvtepu8_epi32(_mm_srli_si128::<8>(v_values)),
            uv_corr,
        );

        let (r_low, g_low, b_low) = avx2_ycbcr_to_rgb_x8(y_low, u_low, v_low, bias_mask);
        let (r_high, g_high, b_high) = avx2_ycbcr_to_rgb_x8(y_high, u_high, v_high, bias_mask);

        sse_store_rgb_u8(
            rgb_ptr.add(cx * 3),
            _mm256_packus_x2_epi32(r_low, r_high),
            _mm256_packus_x2_epi32(g_low, g_high),
            _mm256_packus_x2_epi32(b_low, b_high),
        );

        cx += 16;
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
    fn test_avx2_row_matches_reference() {
        if !std::arch::is_x86_feature_detected!("avx2") {
            return;
        }
        let width = 37usize;
        let y: Vec<u8> = (0..width).map(|x| (x * 7) as u8).collect();
        let u: Vec<u8> = (0..19).map(|x| (x * 13) as u8).collect();
        let v: Vec<u8> = (0..19).map(|x| 250 - (x * 11) as u8).collect();
        let image = YuvPlanarImage::new_i420(&y, &u, &v, width as u32, 1);
        let row = image.row(0);

        let mut simd = vec![0u8; width * 3];
        let processed = avx2_yuv420_to_rgb_row(&row, &mut simd);
        assert_eq!(processed.cx, 32);
        let mut reference = vec![0u8; width * 3];
        reference_row(&row, &mut reference, 0);

        for (a, b) in simd[..96].iter().zip(reference.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
        assert!(simd[96..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_avx2_row_matches_fixed_point_model() {
        if !std::arch::is_x86_feature_detected!("avx2") {
            return;
        }
        assert_kernel_matches_fixed_point(avx2_yuv420_to_rgb_row);
    }
}
