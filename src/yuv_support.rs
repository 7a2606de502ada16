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

/// Coefficients of the inverse YCbCr transform, chroma terms only.
///
/// Luma passes through with unit gain, so for centred chroma `cb = U - 128`, `cr = V - 128`:
///
/// ```text
/// R = Y + cr_coef * cr
/// G = Y - g_coeff_1 * cr - g_coeff_2 * cb
/// B = Y + cb_coef * cb
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CbCrInverseTransform<T> {
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub const fn new(cr_coef: T, cb_coef: T, g_coeff_1: T, g_coeff_2: T) -> Self {
        CbCrInverseTransform {
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

impl CbCrInverseTransform<f32> {
    /// Scales every coefficient by `2^precision` and rounds to nearest.
    pub const fn to_integers(&self, precision: u32) -> CbCrInverseTransform<i32> {
        let scale = (1u32 << precision) as f32;
        CbCrInverseTransform {
            cr_coef: (self.cr_coef * scale + 0.5f32) as i32,
            cb_coef: (self.cb_coef * scale + 0.5f32) as i32,
            g_coeff_1: (self.g_coeff_1 * scale + 0.5f32) as i32,
            g_coeff_2: (self.g_coeff_2 * scale + 0.5f32) as i32,
        }
    }
}

/// Full range ITU-R BT.601, the matrix used by JPEG/JFIF and Android camera frames.
pub const BT601_FULL_RANGE: CbCrInverseTransform<f32> =
    CbCrInverseTransform::new(1.402f32, 1.772f32, 0.714136f32, 0.344136f32);

/// Centre of the chroma axis for 8-bit samples.
pub const UV_BIAS: i32 = 128;

/// Fractional bits used by the vectorized kernels.
///
/// Together with truncating shifts this keeps red within one unit of
/// [`crate::ReferenceConverter`] and green and blue exact. 8 bits with an arithmetic shift
/// exceeds the one unit tolerance on every channel.
pub(crate) const PRECISION: i32 = 12;

pub(crate) const INTEGRAL_TRANSFORM: CbCrInverseTransform<i32> =
    BT601_FULL_RANGE.to_integers(PRECISION as u32);

/// Scalar model of the vector kernels, lane for lane.
#[cfg(test)]
pub(crate) fn fixed_point_pixel(y: u8, u: u8, v: u8) -> [u8; 3] {
    use crate::numerics::{saturate_u8, trunc_shr};
    let t = INTEGRAL_TRANSFORM;
    let y = y as i32;
    let cb = u as i32 - UV_BIAS;
    let cr = v as i32 - UV_BIAS;

    let r = y + trunc_shr::<PRECISION>(cr * t.cr_coef);
    let g = y
        - trunc_shr::<PRECISION>(cb * t.g_coeff_2)
        - trunc_shr::<PRECISION>(cr * t.g_coeff_1);
    let b = y + trunc_shr::<PRECISION>(cb * t.cb_coef);

    [saturate_u8(r), saturate_u8(g), saturate_u8(b)]
}

/// Runs `kernel` over rows holding every U/V pair and checks each converted pixel against
/// [`fixed_point_pixel`] byte for byte.
#[cfg(test)]
pub(crate) fn assert_kernel_matches_fixed_point<F>(kernel: F)
where
    F: Fn(&crate::images::YuvRow<'_>, &mut [u8]) -> crate::internals::ProcessedOffset,
{
    use crate::images::YuvRow;

    const WIDTH: usize = 512;
    let v_plane: Vec<u8> = (0..=255u8).collect();
    let mut rgb = vec![0u8; WIDTH * 3];

    for u in 0..=255u8 {
        let y_plane: Vec<u8> = (0..WIDTH)
            .map(|x| (x * 37 + u as usize * 11) as u8)
            .collect();
        let u_plane = vec![u; WIDTH / 2];
        let row = YuvRow {
            y_plane: &y_plane,
            u_plane: &u_plane,
            v_plane: &v_plane,
            uv_pixel_stride: 1,
        };
        rgb.fill(0);
        let processed = kernel(&row, &mut rgb);
        assert_eq!(processed.cx, WIDTH);

        for (x, px) in rgb.chunks_exact(3).enumerate() {
            let v = v_plane[x / 2];
            assert_eq!(
                px,
                fixed_point_pixel(y_plane[x], u, v),
                "y {} u {} v {}",
                y_plane[x],
                u,
                v
            );
        }
    }
}

/// Reads `LANES / 2` chroma samples starting at `first_sample` and spreads each one over
/// the two luma columns it covers.
///
/// `pixel_stride` is the distance between consecutive samples, 1 for planar and 2 for
/// semi-planar (NV12/NV21) chroma.
#[inline(always)]
pub(crate) fn expand_chroma_lanes<const LANES: usize>(
    chroma_row: &[u8],
    first_sample: usize,
    pixel_stride: usize,
) -> [u8; LANES] {
    let mut lanes = [0u8; LANES];
    for (i, dst) in lanes.chunks_exact_mut(2).enumerate() {
        let sample = chroma_row[first_sample + i * pixel_stride];
        dst[0] = sample;
        dst[1] = sample;
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q8_coefficients() {
        let q8 = BT601_FULL_RANGE.to_integers(8);
        assert_eq!(q8.cr_coef, 359);
        assert_eq!(q8.g_coeff_2, 88);
        assert_eq!(q8.g_coeff_1, 183);
        assert_eq!(q8.cb_coef, 454);
    }

    #[test]
    fn test_integral_transform_fits_i16() {
        // NEON widens with 16x16 -> 32 multiplies
        let t = INTEGRAL_TRANSFORM;
        for c in [t.cr_coef, t.cb_coef, t.g_coeff_1, t.g_coeff_2] {
            assert!(c > 0 && c <= i16::MAX as i32);
        }
        assert_eq!(t.cr_coef, 5743);
        assert_eq!(t.cb_coef, 7258);
    }

    #[test]
    fn test_expand_planar_chroma() {
        let row = [10u8, 20, 30, 40, 50];
        let lanes = expand_chroma_lanes::<8>(&row, 1, 1);
        assert_eq!(lanes, [20, 20, 30, 30, 40, 40, 50, 50]);
    }

    #[test]
    fn test_expand_interleaved_chroma() {
        // V U V U ... as handed out by Android for NV21
        let row = [1u8, 101, 2, 102, 3, 103, 4, 104];
        assert_eq!(
            expand_chroma_lanes::<8>(&row, 0, 2),
            [1, 1, 2, 2, 3, 3, 4, 4]
        );
        assert_eq!(
            expand_chroma_lanes::<8>(&row[1..], 0, 2),
            [101, 101, 102, 102, 103, 103, 104, 104]
        );
        let wide = expand_chroma_lanes::<16>(&[7u8; 15], 0, 2);
        assert_eq!(wide, [7u8; 16]);
    }

    #[test]
    fn test_fixed_point_divergence_over_every_chroma_pair() {
        use crate::reference::reference_pixel;

        let mut max = [0u32; 3];
        for y in [0u8, 1, 37, 127, 128, 200, 254, 255] {
            for u in 0..=255u8 {
                for v in 0..=255u8 {
                    let fixed = fixed_point_pixel(y, u, v);
                    let reference = reference_pixel(y, u, v);
                    for c in 0..3 {
                        let diff = (fixed[c] as i32 - reference[c] as i32).unsigned_abs();
                        max[c] = max[c].max(diff);
                    }
                }
            }
        }
        assert_eq!(max, [1, 0, 0]);
    }

    #[test]
    fn test_q8_arithmetic_shift_exceeds_tolerance() {
        // 359/88/183/454 with a flooring shift
        let q8 = BT601_FULL_RANGE.to_integers(8);
        let mut max = [0u32; 3];
        for u in 0..=255u8 {
            for v in 0..=255u8 {
                let cb = u as i32 - UV_BIAS;
                let cr = v as i32 - UV_BIAS;
                let fixed = [
                    128 + ((cr * q8.cr_coef) >> 8),
                    128 - ((cb * q8.g_coeff_2) >> 8) - ((cr * q8.g_coeff_1) >> 8),
                    128 + ((cb * q8.cb_coef) >> 8),
                ];
                let reference = crate::reference::reference_pixel(128, u, v);
                for c in 0..3 {
                    let diff = (fixed[c].clamp(0, 255) - reference[c] as i32).unsigned_abs();
                    max[c] = max[c].max(diff);
                }
            }
        }
        assert!(max.iter().all(|&x| x > 1), "{:?}", max);
    }
}
