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
use yuv420_rgb::{
    PixelConverter, ReferenceConverter, SimdBackend, VectorizedConverter, YuvPlanarImage,
};

fn channel_divergence(a: &[u8], b: &[u8]) -> (u32, u32, u32) {
    let mut m_r = u32::MIN;
    let mut m_g = u32::MIN;
    let mut m_b = u32::MIN;
    for (src, dst) in a.chunks_exact(3).zip(b.chunks_exact(3)) {
        m_r = m_r.max((src[0] as i32 - dst[0] as i32).unsigned_abs());
        m_g = m_g.max((src[1] as i32 - dst[1] as i32).unsigned_abs());
        m_b = m_b.max((src[2] as i32 - dst[2] as i32).unsigned_abs());
    }
    (m_r, m_g, m_b)
}

/// Largest per channel difference between the dispatcher and the reference on `image`.
pub(crate) fn frame_divergence(image: &YuvPlanarImage) -> (u32, u32, u32) {
    let len = image.width as usize * image.height as usize * 3;
    let mut reference = vec![0u8; len];
    let mut dispatched = vec![0u8; len];
    ReferenceConverter.convert(image, &mut reference).unwrap();
    yuv420_rgb::yuv420_to_rgb(image, &mut dispatched).unwrap();
    channel_divergence(&reference, &dispatched)
}

/// Walks every (Y, U, V) triple through `backend` and the reference.
///
/// Each luma value gets one 512x512 frame whose 256x256 chroma grid holds every U/V pair.
pub(crate) fn search_for_max_divergences(backend: SimdBackend) -> (u32, u32, u32) {
    let converter = match VectorizedConverter::with_backend(backend) {
        Some(converter) => converter,
        None => return (0, 0, 0),
    };

    const SIDE: usize = 512;
    const CHROMA_SIDE: usize = SIDE / 2;

    let mut u_plane = vec![0u8; CHROMA_SIDE * CHROMA_SIDE];
    let mut v_plane = vec![0u8; CHROMA_SIDE * CHROMA_SIDE];
    for (i, (u, v)) in u_plane.iter_mut().zip(v_plane.iter_mut()).enumerate() {
        *u = (i % CHROMA_SIDE) as u8;
        *v = (i / CHROMA_SIDE) as u8;
    }

    let mut reference = vec![0u8; SIDE * SIDE * 3];
    let mut vectorized = vec![0u8; SIDE * SIDE * 3];

    let mut m_r = u32::MIN;
    let mut m_g = u32::MIN;
    let mut m_b = u32::MIN;

    for y in 0..=255u8 {
        let y_plane = vec![y; SIDE * SIDE];
        let image =
            YuvPlanarImage::new_i420(&y_plane, &u_plane, &v_plane, SIDE as u32, SIDE as u32);
        ReferenceConverter.convert(&image, &mut reference).unwrap();
        converter.convert(&image, &mut vectorized).unwrap();
        let (n_r, n_g, n_b) = channel_divergence(&reference, &vectorized);
        m_r = n_r.max(m_r);
        m_g = n_g.max(m_g);
        m_b = n_b.max(m_b);
    }
    (m_r, m_g, m_b)
}
