#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// no-data border masking module.
pub mod border_mask;

/// image cropping module.
pub mod crop;

/// image padding module.
pub mod padding;

/// validity/no-data transition detection module.
pub mod transition;

/// pixel validity masks.
pub mod validity;
