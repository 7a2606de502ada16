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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yuv420_rgb::{yuv420_to_rgb, PixelConverter, ReferenceConverter, YuvPlanarImage};

#[derive(Arbitrary, Debug)]
struct Frame {
    width: u8,
    height: u8,
    y_padding: u8,
    interleaved: bool,
    seed: Vec<u8>,
}

fn fill(dst: &mut [u8], seed: &[u8], salt: u8) {
    if seed.is_empty() {
        dst.fill(salt);
        return;
    }
    for (i, v) in dst.iter_mut().enumerate() {
        *v = seed[i % seed.len()].wrapping_add((i / seed.len()) as u8 ^ salt);
    }
}

fuzz_target!(|frame: Frame| {
    if frame.width == 0 || frame.height == 0 {
        return;
    }
    let width = frame.width as u32;
    let height = frame.height as u32;
    let y_stride = width + frame.y_padding as u32;
    let chroma_width = width.div_ceil(2);
    let chroma_height = height.div_ceil(2) as usize;
    let pixel_stride = if frame.interleaved { 2 } else { 1 };
    let uv_stride = chroma_width * pixel_stride;

    let mut y_plane = vec![0u8; y_stride as usize * height as usize];
    let mut uv_plane = vec![0u8; uv_stride as usize * chroma_height + 1];
    let mut u_plane = vec![0u8; uv_stride as usize * chroma_height];
    fill(&mut y_plane, &frame.seed, 0);
    fill(&mut uv_plane, &frame.seed, 0x5a);
    fill(&mut u_plane, &frame.seed, 0xa5);

    let image = if frame.interleaved {
        YuvPlanarImage {
            y_plane: &y_plane,
            y_stride,
            u_plane: &uv_plane[1..],
            v_plane: &uv_plane,
            uv_stride,
            uv_pixel_stride: pixel_stride,
            width,
            height,
        }
    } else {
        YuvPlanarImage {
            y_plane: &y_plane,
            y_stride,
            u_plane: &u_plane,
            v_plane: &uv_plane,
            uv_stride,
            uv_pixel_stride: pixel_stride,
            width,
            height,
        }
    };

    let mut reference = vec![0u8; width as usize * height as usize * 3];
    let mut dispatched = vec![0u8; width as usize * height as usize * 3];

    ReferenceConverter.convert(&image, &mut reference).unwrap();
    yuv420_to_rgb(&image, &mut dispatched).unwrap();

    for (i, (&a, &b)) in reference.iter().zip(dispatched.iter()).enumerate() {
        assert!(
            (a as i32 - b as i32).abs() <= 1,
            "byte {} differs, reference {} dispatched {}",
            i,
            a,
            b
        );
    }
});
