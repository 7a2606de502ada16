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
//! C ABI for callers that hand over raw plane pointers, such as JNI glue around camera
//! frames.
use crate::yuv_error::{chroma_plane_min_len, check_yuv420_geometry, luma_plane_min_len};
use crate::{is_vectorized_path_available, yuv420_to_rgb, YuvError, YuvPlanarImage};
use std::slice;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvStatus {
    Ok = 0,
    /// A plane or the destination pointer is null.
    InvalidBuffer = 1,
    /// Dimensions or strides are inconsistent.
    InvalidArguments = 2,
}

impl From<YuvError> for YuvStatus {
    fn from(value: YuvError) -> Self {
        match value {
            YuvError::InvalidBuffer(_) => YuvStatus::InvalidBuffer,
            _ => YuvStatus::InvalidArguments,
        }
    }
}

/// Converts a YUV 4:2:0 frame into `width * height * 3` bytes of packed RGB.
///
/// Null pointers are reported as [`YuvStatus::InvalidBuffer`] before anything is read or
/// written.
///
/// # Safety
///
/// Non-null planes must be readable for the extent implied by the strides, that is
/// `(height - 1) * y_stride + width` luma bytes and
/// `(ceil(height / 2) - 1) * uv_stride + (ceil(width / 2) - 1) * uv_pixel_stride + 1` bytes
/// for each chroma plane. `rgb` must be writable for `width * height * 3` bytes and must not
/// overlap any plane.
#[no_mangle]
pub unsafe extern "C" fn yuv420_to_rgb24(
    y_plane: *const u8,
    u_plane: *const u8,
    v_plane: *const u8,
    rgb: *mut u8,
    width: u32,
    height: u32,
    y_stride: u32,
    uv_stride: u32,
    uv_pixel_stride: u32,
) -> YuvStatus {
    if y_plane.is_null() || u_plane.is_null() || v_plane.is_null() || rgb.is_null() {
        log::error!("yuv420_to_rgb24: invalid buffers");
        return YuvStatus::InvalidBuffer;
    }

    let lengths = check_yuv420_geometry(width, height, y_stride, uv_stride, uv_pixel_stride)
        .and_then(|_| {
            Ok((
                luma_plane_min_len(y_stride, width, height)?,
                chroma_plane_min_len(uv_stride, uv_pixel_stride, width, height)?,
            ))
        });
    let (y_len, uv_len) = match lengths {
        Ok(lengths) => lengths,
        Err(err) => {
            log::error!("yuv420_to_rgb24: {}", err);
            return err.into();
        }
    };
    let rgb_len = width as usize * height as usize * 3;

    let image = YuvPlanarImage {
        y_plane: slice::from_raw_parts(y_plane, y_len),
        y_stride,
        u_plane: slice::from_raw_parts(u_plane, uv_len),
        v_plane: slice::from_raw_parts(v_plane, uv_len),
        uv_stride,
        uv_pixel_stride,
        width,
        height,
    };
    let rgb = slice::from_raw_parts_mut(rgb, rgb_len);

    match yuv420_to_rgb(&image, rgb) {
        Ok(()) => YuvStatus::Ok,
        Err(err) => {
            log::error!("yuv420_to_rgb24: {}", err);
            err.into()
        }
    }
}

/// Reports whether [`yuv420_to_rgb24`] runs on a vector unit.
#[no_mangle]
pub extern "C" fn yuv420_rgb_vectorized_available() -> bool {
    is_vectorized_path_available()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_null_planes() {
        let y = [50u8; 4];
        let uv = [128u8; 1];
        let mut rgb = [7u8; 12];
        let status = unsafe {
            yuv420_to_rgb24(
                y.as_ptr(),
                ptr::null(),
                uv.as_ptr(),
                rgb.as_mut_ptr(),
                2,
                2,
                2,
                1,
                1,
            )
        };
        assert_eq!(status, YuvStatus::InvalidBuffer);
        assert!(rgb.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_bad_geometry() {
        let y = [50u8; 4];
        let uv = [128u8; 1];
        let mut rgb = [7u8; 12];
        let status = unsafe {
            yuv420_to_rgb24(
                y.as_ptr(),
                uv.as_ptr(),
                uv.as_ptr(),
                rgb.as_mut_ptr(),
                2,
                2,
                1,
                1,
                1,
            )
        };
        assert_eq!(status, YuvStatus::InvalidArguments);
        assert!(rgb.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_nv21_frame() {
        // 4x2 luma, V/U interleaved chroma row
        let y = [60u8, 60, 200, 200, 60, 60, 200, 200];
        let vu = [128u8, 128, 128, 128];
        let mut rgb = [0u8; 24];
        let status = unsafe {
            yuv420_to_rgb24(
                y.as_ptr(),
                vu.as_ptr().add(1),
                vu.as_ptr(),
                rgb.as_mut_ptr(),
                4,
                2,
                4,
                4,
                2,
            )
        };
        assert_eq!(status, YuvStatus::Ok);
        for (px, &luma) in rgb.chunks_exact(3).zip(y.iter()) {
            assert_eq!(px, [luma, luma, luma]);
        }
        assert_eq!(
            yuv420_rgb_vectorized_available(),
            is_vectorized_path_available()
        );
    }
}
