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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv420_rgb::{
    yuv420_to_rgb, PixelConverter, ReferenceConverter, SimdBackend, VectorizedConverter,
    YuvPlanarImage,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let mut rng = rand::rng();
    let mut y_plane = vec![0u8; width as usize * height as usize];
    let mut u_plane = vec![0u8; chroma_width * chroma_height];
    let mut v_plane = vec![0u8; chroma_width * chroma_height];
    rng.fill(&mut y_plane[..]);
    rng.fill(&mut u_plane[..]);
    rng.fill(&mut v_plane[..]);

    let mut vu_plane = vec![0u8; chroma_width * 2 * chroma_height];
    rng.fill(&mut vu_plane[..]);

    let i420 = YuvPlanarImage::new_i420(&y_plane, &u_plane, &v_plane, width, height);
    let nv21 = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &vu_plane[1..],
        v_plane: &vu_plane,
        uv_stride: chroma_width as u32 * 2,
        uv_pixel_stride: 2,
        width,
        height,
    };

    let mut rgb = vec![0u8; width as usize * height as usize * 3];

    c.bench_function("reference I420 -> RGB", |b| {
        b.iter(|| {
            ReferenceConverter.convert(&i420, &mut rgb).unwrap();
        })
    });

    c.bench_function("dispatch I420 -> RGB", |b| {
        b.iter(|| {
            yuv420_to_rgb(&i420, &mut rgb).unwrap();
        })
    });

    c.bench_function("reference NV21 -> RGB", |b| {
        b.iter(|| {
            ReferenceConverter.convert(&nv21, &mut rgb).unwrap();
        })
    });

    c.bench_function("dispatch NV21 -> RGB", |b| {
        b.iter(|| {
            yuv420_to_rgb(&nv21, &mut rgb).unwrap();
        })
    });

    for backend in SimdBackend::available() {
        if let Some(converter) = VectorizedConverter::with_backend(backend) {
            c.bench_function(&format!("{} NV21 -> RGB", backend), |b| {
                b.iter(|| {
                    converter.convert(&nv21, &mut rgb).unwrap();
                })
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
