use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ndarray::{Array3, Array4, Axis};

use super::config::{ColorMode, ImageLoadConfig};
use super::data::{ImageSet, ImageTensor};
use crate::data::{ImageId, ImageShape, Split};
use crate::error::{PrepareError, Result};

/// Decode the image at `path` and shift its pixels from `[0, 255]` to `[-0.5, 0.5]`.
pub fn load_image(path: impl AsRef<Path>, config: &ImageLoadConfig) -> Result<ImageTensor> {
    let path = path.as_ref();
    let decode_error = |source| PrepareError::Decode {
        path: path.to_path_buf(),
        source,
    };
    // format comes from the file contents, not the extension
    let decoded = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_error(image::ImageError::IoError(err)))?
        .decode()
        .map_err(decode_error)?;

    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let channels = config.color_mode.channels();
    let raw = match config.color_mode {
        ColorMode::Rgb => decoded.to_rgb8().into_raw(),
        ColorMode::Rgba => decoded.to_rgba8().into_raw(),
        ColorMode::Grayscale => decoded.to_luma8().into_raw(),
    };

    // Buffers are row-major with interleaved channels.
    let image = Array3::from_shape_fn((height, width, channels), |(y, x, c)| {
        raw[(y * width + x) * channels + c] as f32 / 255.0 - 0.5
    });
    Ok(image)
}

/// Decode every image in `paths`, one after another. The key set is preserved.
pub fn load_image_set(paths: &BTreeMap<ImageId, PathBuf>, config: &ImageLoadConfig) -> Result<ImageSet> {
    let mut images = ImageSet::new();
    for (&image_id, path) in paths.iter() {
        images.insert(image_id, load_image(path, config)?);
    }
    Ok(images)
}

/// Shape of the image with the lowest id, which every other image must share.
pub fn canonical_shape(images: &ImageSet, split: Split) -> Result<ImageShape> {
    images
        .values()
        .next()
        .map(ImageShape::of)
        .ok_or(PrepareError::EmptySplit { split })
}

/// Gather the image of every question, in question order, into one
/// `(questions, height, width, channels)` array.
pub fn stack_images(
    image_ids: &[ImageId],
    images: &ImageSet,
    shape: ImageShape,
    split: Split,
) -> Result<Array4<f32>> {
    let ordered = image_ids
        .iter()
        .map(|&image_id| {
            images
                .get(&image_id)
                .map(|image| (image_id, image))
                .ok_or(PrepareError::MissingImage { split, image_id })
        })
        .collect::<Result<Vec<_>>>()?;

    let (height, width, channels) = shape.dim();
    let mut stacked = Array4::zeros((ordered.len(), height, width, channels));
    for (mut row, (image_id, image)) in stacked.axis_iter_mut(Axis(0)).zip(ordered) {
        let found = ImageShape::of(image);
        if found != shape {
            return Err(PrepareError::ShapeMismatch {
                split,
                image_id,
                expected: shape,
                found,
            });
        }
        row.assign(image);
    }
    Ok(stacked)
}
