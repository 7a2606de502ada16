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

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Interleaves 16 lanes of each channel into 48 bytes of `R, G, B` triplets.
#[inline(always)]
pub(crate) unsafe fn sse_interleave_rgb(
    r: __m128i,
    g: __m128i,
    b: __m128i,
) -> (__m128i, __m128i, __m128i) {
    let sh_r = _mm_setr_epi8(0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15, 10, 5);
    let sh_g = _mm_setr_epi8(5, 0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15, 10);
    let sh_b = _mm_setr_epi8(10, 5, 0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15);
    let r0 = _mm_shuffle_epi8(r, sh_r);
    let g0 = _mm_shuffle_epi8(g, sh_g);
    let b0 = _mm_shuffle_epi8(b, sh_b);

    let m0 = _mm_setr_epi8(0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0);
    let m1 = _mm_setr_epi8(0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0);
    let v0 = _mm_blendv_epi8(_mm_blendv_epi8(r0, g0, m1), b0, m0);
    let v1 = _mm_blendv_epi8(_mm_blendv_epi8(g0, b0, m1), r0, m0);
    let v2 = _mm_blendv_epi8(_mm_blendv_epi8(b0, r0, m1), g0, m0);
    (v0, v1, v2)
}

/// Stores 16 pixels, 48 bytes.
#[inline(always)]
pub(crate) unsafe fn sse_store_rgb_u8(ptr: *mut u8, r: __m128i, g: __m128i, b: __m128i) {
    let (v0, v1, v2) = sse_interleave_rgb(r, g, b);
    _mm_storeu_si128(ptr as *mut __m128i, v0);
    _mm_storeu_si128(ptr.add(16) as *mut __m128i, v1);
    _mm_storeu_si128(ptr.add(32) as *mut __m128i, v2);
}

/// Stores the low 8 lanes only, 24 bytes.
#[inline(always)]
pub(crate) unsafe fn sse_store_rgb_half_u8(ptr: *mut u8, r: __m128i, g: __m128i, b: __m128i) {
    let (v0, v1, _) = sse_interleave_rgb(r, g, b);
    _mm_storeu_si128(ptr as *mut __m128i, v0);
    _mm_storel_epi64(ptr.add(16) as *mut __m128i, v1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_rgb_order() {
        if !std::arch::is_x86_feature_detected!("sse4.1") {
            return;
        }
        let r: [u8; 16] = std::array::from_fn(|i| i as u8);
        let g: [u8; 16] = std::array::from_fn(|i| 100 + i as u8);
        let b: [u8; 16] = std::array::from_fn(|i| 200 + i as u8);
        let mut full = [0u8; 48];
        let mut half = [0u8; 30];
        unsafe {
            let rv = _mm_loadu_si128(r.as_ptr() as *const __m128i);
            let gv = _mm_loadu_si128(g.as_ptr() as *const __m128i);
            let bv = _mm_loadu_si128(b.as_ptr() as *const __m128i);
            sse_store_rgb_u8(full.as_mut_ptr(), rv, gv, bv);
            sse_store_rgb_half_u8(half.as_mut_ptr(), rv, gv, bv);
        }
        for (i, px) in full.chunks_exact(3).enumerate() {
            assert_eq!(px, &[r[i], g[i], b[i]]);
        }
        assert_eq!(&half[..24], &full[..24]);
        assert!(half[24..].iter().all(|&x| x == 0));
    }
}
