/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Columns of a row already written by a vector kernel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProcessedOffset {
    pub(crate) cx: usize,
}
