use std::collections::BTreeMap;

use ndarray::Array3;

use crate::data::ImageId;

/// Decoded image as `(height, width, channels)`, pixel values mapped from
/// `[0, 255]` to `[-0.5, 0.5]`.
pub type ImageTensor = Array3<f32>;

/// Decoded images keyed by id. Ordered so the "first" image is well defined.
pub type ImageSet = BTreeMap<ImageId, ImageTensor>;
