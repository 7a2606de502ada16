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
mod max_divergence;

use flexi_logger::{Duplicate, Logger};
use rand::Rng;
use std::time::Instant;
use yuv420_rgb::{
    describe_acceleration, yuv420_to_rgb, PixelConverter, ReferenceConverter, SimdBackend,
    VectorizedConverter, YuvPlanarImage,
};

fn setup_logging(base_level: &str) {
    let _ = Logger::try_with_str(base_level)
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
        .log_to_stdout()
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));
}

/// Camera style NV21 frame: rows padded to 64 bytes, V and U interleaved.
struct Nv21Frame {
    width: u32,
    height: u32,
    stride: u32,
    y_plane: Vec<u8>,
    vu_plane: Vec<u8>,
}

impl Nv21Frame {
    fn random(width: u32, height: u32) -> Self {
        let stride = width.div_ceil(64) * 64;
        let chroma_rows = height.div_ceil(2) as usize;
        let mut rng = rand::rng();
        let mut y_plane = vec![0u8; stride as usize * height as usize];
        let mut vu_plane = vec![0u8; stride as usize * chroma_rows];
        rng.fill(&mut y_plane[..]);
        rng.fill(&mut vu_plane[..]);
        Nv21Frame {
            width,
            height,
            stride,
            y_plane,
            vu_plane,
        }
    }

    fn image(&self) -> YuvPlanarImage<'_> {
        YuvPlanarImage {
            y_plane: &self.y_plane,
            y_stride: self.stride,
            u_plane: &self.vu_plane[1..],
            v_plane: &self.vu_plane,
            uv_stride: self.stride,
            uv_pixel_stride: 2,
            width: self.width,
            height: self.height,
        }
    }
}

fn time_converter(name: &str, converter: &dyn PixelConverter, frame: &Nv21Frame) {
    let image = frame.image();
    let mut rgb = vec![0u8; frame.width as usize * frame.height as usize * 3];
    const RUNS: u32 = 50;
    let start_time = Instant::now();
    for _ in 0..RUNS {
        converter.convert(&image, &mut rgb).unwrap();
    }
    println!(
        "{} {}x{}: {:?} per frame",
        name,
        frame.width,
        frame.height,
        start_time.elapsed() / RUNS
    );
}

fn main() {
    setup_logging("debug");

    println!("Acceleration {}", describe_acceleration());

    let frame = Nv21Frame::random(1920, 1080);

    time_converter("reference", &ReferenceConverter, &frame);
    for backend in SimdBackend::available() {
        if let Some(converter) = VectorizedConverter::with_backend(backend) {
            time_converter(converter.name(), &converter, &frame);
        }
    }

    let mut rgb = vec![0u8; frame.width as usize * frame.height as usize * 3];
    let start_time = Instant::now();
    yuv420_to_rgb(&frame.image(), &mut rgb).unwrap();
    println!("dispatch: {:?}", start_time.elapsed());

    // Odd sized frame exercises the tail columns and the unpadded last chroma row
    let odd = Nv21Frame::random(1917, 1077);
    let (r, g, b) = max_divergence::frame_divergence(&odd.image());
    println!("Max divergence on {}x{} frame: R {} G {} B {}", odd.width, odd.height, r, g, b);

    for backend in SimdBackend::available() {
        let (r, g, b) = max_divergence::search_for_max_divergences(backend);
        println!("Max divergence {} over all YUV triples: R {} G {} B {}", backend, r, g, b);
    }
}
