pub(crate) mod encoder;
pub(crate) mod records;
pub(crate) mod rle;
