//! Image XObject creation
//!
//! Rendered pages are stored as Flate-compressed 8-bit DeviceRGB images and
//! placed on the sheet with a `cm` transform, so the raster keeps its full
//! resolution no matter how small it is drawn.

use crate::types::Result;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Add `image` to `output` as an image XObject and return its object id.
pub fn create_image_xobject(output: &mut Document, image: &RgbImage) -> Result<ObjectId> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(image.width())));
    dict.set("Height", Object::Integer(i64::from(image.height())));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));

    let mut stream = Stream::new(dict, image.as_raw().clone());
    stream.compress()?;

    Ok(output.add_object(stream))
}
