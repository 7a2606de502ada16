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
use crate::yuv_error::{
    check_chroma_channel, check_y8_channel, check_yuv420_geometry, YuvError, YuvPlane,
};

#[derive(Debug, Copy, Clone)]
/// Non-mutable representation of a 4:2:0 YUV frame as delivered by camera pipelines.
///
/// One chroma pair covers a 2x2 block of luma pixels. `u_plane` and `v_plane` may be two
/// separate planes (I420, `uv_pixel_stride == 1`) or two views into one interleaved buffer
/// (NV12/NV21, `uv_pixel_stride == 2`); both share `uv_stride` and `uv_pixel_stride`.
pub struct YuvPlanarImage<'a> {
    pub y_plane: &'a [u8],
    /// Bytes per luma row.
    pub y_stride: u32,
    /// Blue difference (Cb) samples.
    pub u_plane: &'a [u8],
    /// Red difference (Cr) samples.
    pub v_plane: &'a [u8],
    /// Bytes per chroma row.
    pub uv_stride: u32,
    /// Bytes between two consecutive chroma samples within a row.
    pub uv_pixel_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a> YuvPlanarImage<'a> {
    /// Tightly packed I420 frame: no row padding, separate chroma planes.
    pub fn new_i420(
        y_plane: &'a [u8],
        u_plane: &'a [u8],
        v_plane: &'a [u8],
        width: u32,
        height: u32,
    ) -> Self {
        YuvPlanarImage {
            y_plane,
            y_stride: width,
            u_plane,
            v_plane,
            uv_stride: width.div_ceil(2),
            uv_pixel_stride: 1,
            width,
            height,
        }
    }

    /// Checks that no plane is empty.
    pub fn check_buffers(&self) -> Result<(), YuvError> {
        if self.y_plane.is_empty() {
            return Err(YuvError::InvalidBuffer(YuvPlane::Y));
        }
        if self.u_plane.is_empty() {
            return Err(YuvError::InvalidBuffer(YuvPlane::U));
        }
        if self.v_plane.is_empty() {
            return Err(YuvError::InvalidBuffer(YuvPlane::V));
        }
        Ok(())
    }

    /// Checks buffers, strides and plane sizes. After this every row handed out by
    /// [`YuvPlanarImage::row`] is in bounds.
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        self.check_buffers()?;
        check_yuv420_geometry(
            self.width,
            self.height,
            self.y_stride,
            self.uv_stride,
            self.uv_pixel_stride,
        )?;
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_channel(
            YuvPlane::U,
            self.u_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        check_chroma_channel(
            YuvPlane::V,
            self.v_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }

    /// Borrows luma row `y` together with the chroma row covering it.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> YuvRow<'a> {
        let y_offset = y * self.y_stride as usize;
        let uv_offset = (y >> 1) * self.uv_stride as usize;
        YuvRow {
            y_plane: &self.y_plane[y_offset..y_offset + self.width as usize],
            u_plane: &self.u_plane[uv_offset..],
            v_plane: &self.v_plane[uv_offset..],
            uv_pixel_stride: self.uv_pixel_stride as usize,
        }
    }
}

/// One luma row and the chroma samples it needs.
///
/// `u_plane` and `v_plane` start at the first sample of the chroma row and may extend
/// past it; sample `n` lives at `n * uv_pixel_stride`.
#[derive(Debug, Copy, Clone)]
pub struct YuvRow<'a> {
    pub y_plane: &'a [u8],
    pub u_plane: &'a [u8],
    pub v_plane: &'a [u8],
    pub uv_pixel_stride: usize,
}

impl YuvRow<'_> {
    #[inline]
    pub fn width(&self) -> usize {
        self.y_plane.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_error::MismatchedSize;

    #[test]
    fn test_empty_planes_are_invalid_buffers() {
        let y = [0u8; 4];
        let uv = [0u8; 1];
        let mut image = YuvPlanarImage::new_i420(&y, &uv, &uv, 2, 2);
        assert!(image.check_constraints().is_ok());

        image.u_plane = &[];
        assert_eq!(
            image.check_constraints(),
            Err(YuvError::InvalidBuffer(YuvPlane::U))
        );
        image.y_plane = &[];
        assert_eq!(
            image.check_constraints(),
            Err(YuvError::InvalidBuffer(YuvPlane::Y))
        );
    }

    #[test]
    fn test_short_chroma_plane() {
        let y = [0u8; 16];
        let u = [0u8; 4];
        let v = [0u8; 3];
        let image = YuvPlanarImage::new_i420(&y, &u, &v, 4, 4);
        assert_eq!(
            image.check_constraints(),
            Err(YuvError::ChromaPlaneMinimumSizeMismatch(
                YuvPlane::V,
                MismatchedSize {
                    expected: 4,
                    received: 3
                }
            ))
        );
    }

    #[test]
    fn test_rows_share_chroma_line() {
        let y: Vec<u8> = (0..24).collect();
        let uv: Vec<u8> = (100..112).collect();
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 6,
            u_plane: &uv,
            v_plane: &uv[1..],
            uv_stride: 6,
            uv_pixel_stride: 2,
            width: 5,
            height: 4,
        };
        image.check_constraints().unwrap();
        let row2 = image.row(2);
        let row3 = image.row(3);
        assert_eq!(row2.y_plane, &[12, 13, 14, 15, 16]);
        assert_eq!(row3.width(), 5);
        assert_eq!(row2.u_plane[0], 106);
        assert_eq!(row3.v_plane[0], 107);
        assert_eq!(row3.v_plane[2 * row3.uv_pixel_stride], 111);
    }
}
