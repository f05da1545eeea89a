#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use astromask_image as image;

#[doc(inline)]
pub use astromask_imgproc as imgproc;
