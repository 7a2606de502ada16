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
use crate::images::YuvPlanarImage;
use crate::vectorized::{SimdBackend, VectorizedConverter};
use crate::yuv_error::{check_overflow_v3, YuvError};
use crate::{PixelConverter, ReferenceConverter};
use std::sync::OnceLock;

/// Capability detected once per process.
struct Context {
    vectorized: Option<VectorizedConverter>,
}

impl Context {
    fn global() -> &'static Context {
        static INSTANCE: OnceLock<Context> = OnceLock::new();
        INSTANCE.get_or_init(Context::new)
    }

    fn new() -> Self {
        let vectorized = VectorizedConverter::new();
        match vectorized {
            Some(converter) => log::debug!(
                "yuv420 -> rgb uses {} vector path, {} lanes",
                converter.backend(),
                converter.backend().lanes()
            ),
            None => log::debug!("yuv420 -> rgb uses reference path, no vector unit available"),
        }
        Context { vectorized }
    }

    fn converter(&self) -> &dyn PixelConverter {
        match &self.vectorized {
            Some(converter) => converter,
            None => &ReferenceConverter,
        }
    }
}

/// Converts a YUV 4:2:0 frame into packed `R, G, B` triplets, BT.601 full range.
///
/// Uses the vector path when the CPU has one, otherwise the reference path; the two agree
/// within one unit per channel.
///
/// # Arguments
///
/// * `planar_image` - Source frame, see [`YuvPlanarImage`] for the layout rules.
/// * `rgb` - Destination of exactly `width * height * 3` bytes, rows without padding.
///
/// # Errors
///
/// [`YuvError::InvalidBuffer`] if any plane is empty, or another [`YuvError`] if strides or
/// sizes are inconsistent. Nothing is written to `rgb` on error.
///
pub fn yuv420_to_rgb(planar_image: &YuvPlanarImage<'_>, rgb: &mut [u8]) -> Result<(), YuvError> {
    Context::global().converter().convert(planar_image, rgb)
}

/// Same as [`yuv420_to_rgb`] but allocates the destination.
pub fn yuv420_to_rgb_vec(planar_image: &YuvPlanarImage<'_>) -> Result<Vec<u8>, YuvError> {
    planar_image.check_buffers()?;
    let len = check_overflow_v3(
        planar_image.width as usize,
        planar_image.height as usize,
        3,
    )?;
    let mut rgb = vec![0u8; len];
    yuv420_to_rgb(planar_image, &mut rgb)?;
    Ok(rgb)
}

/// Reports whether [`yuv420_to_rgb`] runs on the vector path. No side effects.
pub fn is_vectorized_path_available() -> bool {
    Context::global().vectorized.is_some()
}

/// Backend selected by the dispatcher, if any.
pub fn vectorized_backend() -> Option<SimdBackend> {
    Context::global().vectorized.map(|x| x.backend())
}

/// Describes the selected path, for diagnostics.
///
/// # Examples
/// ```
/// println!("{}", yuv420_rgb::describe_acceleration());
/// // => {path:vectorized,backend:avx2,lanes:16}
/// ```
pub fn describe_acceleration() -> String {
    match vectorized_backend() {
        Some(backend) => format!(
            "{{path:vectorized,backend:{},lanes:{}}}",
            backend,
            backend.lanes()
        ),
        None => "{path:reference}".to_string(),
    }
}
