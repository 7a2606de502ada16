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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Identifies one of the buffers taking part in a conversion.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum YuvPlane {
    Y,
    /// Blue difference (Cb) plane
    U,
    /// Red difference (Cr) plane
    V,
}

impl Display for YuvPlane {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvPlane::Y => f.write_str("Y"),
            YuvPlane::U => f.write_str("U"),
            YuvPlane::V => f.write_str("V"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    /// Plane is not backed by any memory.
    InvalidBuffer(YuvPlane),
    ZeroBaseSize,
    PointerOverflow,
    ZeroPixelStride,
    LumaStrideTooSmall(MismatchedSize),
    ChromaStrideTooSmall(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(YuvPlane, MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::InvalidBuffer(plane) => {
                f.write_fmt(format_args!("{} plane does not reference any memory", plane))
            }
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroPixelStride => f.write_str("Chroma pixel stride must not be zero"),
            YuvError::LumaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Luma stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Chroma stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(plane, size) => f.write_fmt(format_args!(
                "{} plane have invalid size, it must be at least {}, but it was {}",
                plane, size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YuvError> {
    check_overflow_v2(check_overflow_v2(v0, v1)?, v2)
}

/// Smallest luma plane holding `height` rows, the last one allowed to be unpadded.
#[inline]
pub(crate) fn luma_plane_min_len(stride: u32, width: u32, height: u32) -> Result<usize, YuvError> {
    let padded_rows = check_overflow_v2(stride as usize, (height as usize).saturating_sub(1))?;
    padded_rows
        .checked_add(width as usize)
        .ok_or(YuvError::PointerOverflow)
}

/// Smallest chroma plane for a 4:2:0 image, the last chroma row allowed to be unpadded.
#[inline]
pub(crate) fn chroma_plane_min_len(
    stride: u32,
    pixel_stride: u32,
    width: u32,
    height: u32,
) -> Result<usize, YuvError> {
    let chroma_width = (width as usize).div_ceil(2);
    let chroma_height = (height as usize).div_ceil(2);
    let padded_rows = check_overflow_v2(stride as usize, chroma_height.saturating_sub(1))?;
    let last_row = check_overflow_v2(chroma_width.saturating_sub(1), pixel_stride as usize)?;
    padded_rows
        .checked_add(last_row)
        .and_then(|x| x.checked_add(1))
        .ok_or(YuvError::PointerOverflow)
}

/// Validates image geometry that does not depend on plane contents.
pub(crate) fn check_yuv420_geometry(
    width: u32,
    height: u32,
    y_stride: u32,
    uv_stride: u32,
    uv_pixel_stride: u32,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if uv_pixel_stride == 0 {
        return Err(YuvError::ZeroPixelStride);
    }
    if y_stride < width {
        return Err(YuvError::LumaStrideTooSmall(MismatchedSize {
            expected: width as usize,
            received: y_stride as usize,
        }));
    }
    let chroma_width = (width as usize).div_ceil(2);
    let min_uv_stride = check_overflow_v2(chroma_width - 1, uv_pixel_stride as usize)? + 1;
    if (uv_stride as usize) < min_uv_stride {
        return Err(YuvError::ChromaStrideTooSmall(MismatchedSize {
            expected: min_uv_stride,
            received: uv_stride as usize,
        }));
    }
    check_overflow_v3(width as usize, height as usize, 3)?;
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let expected = luma_plane_min_len(stride, width, height)?;
    if data.len() < expected {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_channel(
    plane: YuvPlane,
    data: &[u8],
    stride: u32,
    pixel_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let expected = chroma_plane_min_len(stride, pixel_stride, width, height)?;
    if data.len() < expected {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(
            plane,
            MismatchedSize {
                expected,
                received: data.len(),
            },
        ));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_rgb_destination(arr: &[u8], width: u32, height: u32) -> Result<(), YuvError> {
    let expected = check_overflow_v3(width as usize, height as usize, 3)?;
    if arr.len() != expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_min_len_allows_unpadded_last_row() {
        assert_eq!(luma_plane_min_len(16, 13, 3).unwrap(), 16 * 2 + 13);
        assert_eq!(luma_plane_min_len(13, 13, 1).unwrap(), 13);
    }

    #[test]
    fn test_chroma_min_len_interleaved_layout() {
        // NV21 style: V and U share a buffer, pixel stride 2
        assert_eq!(chroma_plane_min_len(16, 2, 16, 4).unwrap(), 16 + 7 * 2 + 1);
        // Odd sizes round the chroma grid up
        assert_eq!(chroma_plane_min_len(7, 1, 13, 3).unwrap(), 7 + 7);
    }

    #[test]
    fn test_geometry_rejects_bad_strides() {
        assert_eq!(
            check_yuv420_geometry(0, 4, 4, 2, 1),
            Err(YuvError::ZeroBaseSize)
        );
        assert_eq!(
            check_yuv420_geometry(4, 4, 4, 2, 0),
            Err(YuvError::ZeroPixelStride)
        );
        assert_eq!(
            check_yuv420_geometry(8, 2, 7, 4, 1),
            Err(YuvError::LumaStrideTooSmall(MismatchedSize {
                expected: 8,
                received: 7
            }))
        );
        assert_eq!(
            check_yuv420_geometry(8, 2, 8, 6, 2),
            Err(YuvError::ChromaStrideTooSmall(MismatchedSize {
                expected: 7,
                received: 6
            }))
        );
        assert!(check_yuv420_geometry(8, 2, 8, 7, 2).is_ok());
    }

    #[test]
    fn test_geometry_overflow() {
        assert_eq!(
            check_yuv420_geometry(u32::MAX, u32::MAX, u32::MAX, u32::MAX, 1),
            Err(YuvError::PointerOverflow)
        );
    }

    #[test]
    fn test_destination_must_match_exactly() {
        let dst = vec![0u8; 8 * 2 * 3 + 1];
        assert_eq!(
            check_rgb_destination(&dst, 8, 2),
            Err(YuvError::DestinationSizeMismatch(MismatchedSize {
                expected: 48,
                received: 49
            }))
        );
        assert!(check_rgb_destination(&dst[..48], 8, 2).is_ok());
    }
}
