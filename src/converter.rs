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
use crate::images::{YuvPlanarImage, YuvRow};
use crate::yuv_error::{check_rgb_destination, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// A strategy converting 4:2:0 YUV into interleaved `R, G, B` triplets.
pub trait PixelConverter: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Converts a single luma row. `rgb` holds exactly `row.width() * 3` bytes.
    fn convert_row(&self, row: &YuvRow<'_>, rgb: &mut [u8]);

    /// Converts a whole frame into `rgb`, which must be exactly `width * height * 3` bytes,
    /// rows packed without padding.
    ///
    /// Every constraint is checked before the first byte is written, on error `rgb` is
    /// left untouched.
    fn convert(&self, image: &YuvPlanarImage<'_>, rgb: &mut [u8]) -> Result<(), YuvError> {
        image.check_constraints()?;
        check_rgb_destination(rgb, image.width, image.height)?;

        let rgb_stride = image.width as usize * 3;

        let iter;
        #[cfg(feature = "rayon")]
        {
            iter = rgb.par_chunks_exact_mut(rgb_stride);
        }
        #[cfg(not(feature = "rayon"))]
        {
            iter = rgb.chunks_exact_mut(rgb_stride);
        }

        iter.enumerate().for_each(|(y, rgb)| {
            self.convert_row(&image.row(y), rgb);
        });

        Ok(())
    }
}
