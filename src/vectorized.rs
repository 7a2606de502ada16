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
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::avx2::avx2_yuv420_to_rgb_row;
use crate::images::YuvRow;
use crate::internals::ProcessedOffset;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_yuv420_to_rgb_row;
use crate::reference::reference_row;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::sse::sse_yuv420_to_rgb_row;
use crate::PixelConverter;
use std::fmt::{Display, Formatter};

/// Instruction set driving a [`VectorizedConverter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SimdBackend {
    /// ARM NEON, 8 pixels per group
    Neon,
    /// SSE 4.1, 8 pixels per group
    Sse41,
    /// AVX2, 16 pixels per group
    Avx2,
}

impl SimdBackend {
    /// Pixels converted per vector group.
    pub const fn lanes(&self) -> usize {
        match self {
            SimdBackend::Neon | SimdBackend::Sse41 => 8,
            SimdBackend::Avx2 => 16,
        }
    }

    /// Whether this backend can run on the current CPU with the enabled crate features.
    pub fn is_supported(&self) -> bool {
        match self {
            SimdBackend::Neon => cfg!(all(target_arch = "aarch64", target_feature = "neon")),
            SimdBackend::Sse41 => sse41_detected(),
            SimdBackend::Avx2 => avx2_detected(),
        }
    }

    /// Every supported backend, widest first.
    pub fn available() -> Vec<SimdBackend> {
        [SimdBackend::Avx2, SimdBackend::Sse41, SimdBackend::Neon]
            .into_iter()
            .filter(|x| x.is_supported())
            .collect()
    }
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
fn sse41_detected() -> bool {
    std::arch::is_x86_feature_detected!("sse4.1")
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse")))]
fn sse41_detected() -> bool {
    false
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
fn avx2_detected() -> bool {
    std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx")))]
fn avx2_detected() -> bool {
    false
}

impl Display for SimdBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdBackend::Neon => f.write_str("neon"),
            SimdBackend::Sse41 => f.write_str("sse4.1"),
            SimdBackend::Avx2 => f.write_str("avx2"),
        }
    }
}

/// Lane parallel converter.
///
/// Each row is processed in groups of [`SimdBackend::lanes`] pixels with fixed-point
/// arithmetic; the columns left over are finished with the reference formula. Output
/// differs from [`crate::ReferenceConverter`] by at most one unit per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VectorizedConverter {
    backend: SimdBackend,
}

impl VectorizedConverter {
    /// Picks the widest backend available, `None` if there is none.
    pub fn new() -> Option<Self> {
        SimdBackend::available()
            .first()
            .map(|&backend| VectorizedConverter { backend })
    }

    /// Uses `backend`, `None` if it is not supported here.
    pub fn with_backend(backend: SimdBackend) -> Option<Self> {
        if backend.is_supported() {
            Some(VectorizedConverter { backend })
        } else {
            None
        }
    }

    pub fn backend(&self) -> SimdBackend {
        self.backend
    }
}

impl PixelConverter for VectorizedConverter {
    fn name(&self) -> &'static str {
        match self.backend {
            SimdBackend::Neon => "neon",
            SimdBackend::Sse41 => "sse4.1",
            SimdBackend::Avx2 => "avx2",
        }
    }

    fn convert_row(&self, row: &YuvRow<'_>, rgb: &mut [u8]) {
        let processed = match self.backend {
            #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
            SimdBackend::Neon => neon_yuv420_to_rgb_row(row, rgb),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            SimdBackend::Sse41 => sse_yuv420_to_rgb_row(row, rgb),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            SimdBackend::Avx2 => avx2_yuv420_to_rgb_row(row, rgb),
            #[allow(unreachable_patterns)]
            _ => ProcessedOffset::default(),
        };

        if processed.cx < row.width() {
            reference_row(row, rgb, processed.cx);
        }
    }
}
