
#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    U8,
    F32,
    // Binary 0.0 / 1.0 values
    Mask
}

impl ImageEncoding {
    pub fn is_binary(&self) -> bool {
        *self == ImageEncoding::Mask
    }
}
