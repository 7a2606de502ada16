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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]
//! Conversion of 4:2:0 YUV camera frames into packed RGB24.
//!
//! Frames may come as three separate planes (I420) or as a luma plane plus interleaved
//! chroma (NV12/NV21), with arbitrary row padding. The BT.601 full range matrix is used.
//!
//! [`yuv420_to_rgb`] picks a vector implementation (NEON, SSE 4.1 or AVX2) when the running
//! CPU supports one and falls back to [`ReferenceConverter`] otherwise.
//!
//! ```
//! use yuv420_rgb::{yuv420_to_rgb, YuvPlanarImage};
//!
//! let y = vec![128u8; 16 * 2];
//! let u = vec![128u8; 8];
//! let v = vec![128u8; 8];
//! let image = YuvPlanarImage::new_i420(&y, &u, &v, 16, 2);
//! let mut rgb = vec![0u8; 16 * 2 * 3];
//! yuv420_to_rgb(&image, &mut rgb).unwrap();
//! assert!(rgb.iter().all(|&x| x == 128));
//! ```
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod avx2;
mod converter;
mod dispatch;
#[cfg(feature = "capi")]
pub mod ffi;
mod images;
mod internals;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod numerics;
mod reference;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod sse;
mod vectorized;
mod yuv_error;
mod yuv_support;

pub use converter::PixelConverter;
pub use dispatch::{
    describe_acceleration, is_vectorized_path_available, vectorized_backend, yuv420_to_rgb,
    yuv420_to_rgb_vec,
};
pub use images::{YuvPlanarImage, YuvRow};
pub use numerics::saturate_u8;
pub use reference::ReferenceConverter;
pub use vectorized::{SimdBackend, VectorizedConverter};
pub use yuv_error::{MismatchedSize, YuvError, YuvPlane};
pub use yuv_support::{CbCrInverseTransform, BT601_FULL_RANGE, UV_BIAS};
