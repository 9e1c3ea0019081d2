use crate::EncodeError;

/// Cursor over a caller-owned output buffer.
///
/// A writer created with [`Writer::sizing`] has no backing storage: every
/// write succeeds and only advances the position, so running an encoder
/// against it reports the number of bytes the encoding needs.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: Option<&'a mut [u8]>,
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf: Some(buf),
            pos: 0,
        }
    }

    /// Writer that counts bytes without storing them.
    pub const fn sizing() -> Self {
        Self { buf: None, pos: 0 }
    }

    pub const fn is_sizing(&self) -> bool {
        self.buf.is_none()
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        match &self.buf {
            Some(buf) => buf.len().saturating_sub(self.pos),
            None => usize::MAX - self.pos,
        }
    }

    pub fn as_written(&self) -> &[u8] {
        match &self.buf {
            Some(buf) => &buf[..self.pos],
            None => &[],
        }
    }

    /// Fails unless `len` more bytes fit.
    pub fn reserve(&self, len: usize) -> Result<(), EncodeError> {
        if self.remaining() < len {
            return Err(EncodeError::BufferTooSmall);
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.write_all(&[value])
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        self.reserve(data.len())?;
        let end = self.pos + data.len();
        if let Some(buf) = self.buf.as_deref_mut() {
            buf[self.pos..end].copy_from_slice(data);
        }
        self.pos = end;
        Ok(())
    }

    pub fn write_be_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    pub fn write_be_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    pub fn write_be_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::EncodeError;

    #[test]
    fn writer_writes_values() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        w.write_u8(1).unwrap();
        w.write_all(&[2, 3]).unwrap();
        assert_eq!(w.as_written(), &[1, 2, 3]);
        assert_eq!(w.remaining(), 1);
    }

    #[test]
    fn writer_bounds() {
        let mut buf = [0u8; 1];
        let mut w = Writer::new(&mut buf);
        w.write_u8(1).unwrap();
        assert_eq!(w.write_u8(2).unwrap_err(), EncodeError::BufferTooSmall);
        assert_eq!(w.position(), 1);
    }

    #[test]
    fn short_write_leaves_buffer_untouched() {
        let mut buf = [0xAAu8; 3];
        let mut w = Writer::new(&mut buf);
        assert_eq!(
            w.write_be_u32(0x0102_0304).unwrap_err(),
            EncodeError::BufferTooSmall
        );
        assert_eq!(w.position(), 0);
        assert_eq!(buf, [0xAA; 3]);
    }

    #[test]
    fn sizing_writer_counts_only() {
        let mut w = Writer::sizing();
        assert!(w.is_sizing());
        w.write_u8(1).unwrap();
        w.write_be_u64(7).unwrap();
        assert_eq!(w.position(), 9);
        assert!(w.as_written().is_empty());
    }
}
