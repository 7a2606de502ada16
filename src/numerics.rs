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
#![forbid(unsafe_code)]

#[inline(always)]
/// Clamps an intermediate channel value into `[0, 255]`
pub fn saturate_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
#[inline(always)]
/// Arithmetic shift right that rounds toward zero, as a float to int cast does
pub(crate) const fn trunc_shr<const PRECISION: i32>(val: i32) -> i32 {
    let bias = (val >> 31) & ((1 << PRECISION) - 1);
    (val + bias) >> PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_bounds() {
        assert_eq!(saturate_u8(-1), 0);
        assert_eq!(saturate_u8(i32::MIN), 0);
        assert_eq!(saturate_u8(0), 0);
        assert_eq!(saturate_u8(128), 128);
        assert_eq!(saturate_u8(255), 255);
        assert_eq!(saturate_u8(256), 255);
        assert_eq!(saturate_u8(306), 255);
        assert_eq!(saturate_u8(i32::MAX), 255);
    }

    #[test]
    fn test_trunc_shr_matches_integer_division() {
        for v in -70_000..70_000 {
            assert_eq!(trunc_shr::<8>(v), v / 256, "value {}", v);
            assert_eq!(trunc_shr::<12>(v), v / 4096, "value {}", v);
        }
    }
}
