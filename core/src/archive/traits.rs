//! archive/traits.rs
//!
//! The only surface an object-traversal framework needs: one call per
//! primitive field, in the order fixed by the aggregate's shape.

use crate::types::Result;

pub trait OutputArchive {
    fn write_i8(&mut self, v: i8) -> Result<()>;
    fn write_i16(&mut self, v: i16) -> Result<()>;
    fn write_i32(&mut self, v: i32) -> Result<()>;
    fn write_i64(&mut self, v: i64) -> Result<()>;
    fn write_isize(&mut self, v: isize) -> Result<()>;
    fn write_u8(&mut self, v: u8) -> Result<()>;
    fn write_u16(&mut self, v: u16) -> Result<()>;
    fn write_u32(&mut self, v: u32) -> Result<()>;
    fn write_u64(&mut self, v: u64) -> Result<()>;
    fn write_usize(&mut self, v: usize) -> Result<()>;
    fn write_f32(&mut self, v: f32) -> Result<()>;
    fn write_f64(&mut self, v: f64) -> Result<()>;

    /// Length-prefixed raw bytes.
    fn write_bytes(&mut self, v: &[u8]) -> Result<()>;

    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(v as u8)
    }

    fn write_char(&mut self, v: char) -> Result<()> {
        self.write_u32(v as u32)
    }

    fn write_str(&mut self, v: &str) -> Result<()> {
        self.write_bytes(v.as_bytes())
    }

    /// Element count followed by each element.
    fn write_seq<T: Primitive>(&mut self, items: &[T]) -> Result<()>
    where
        Self: Sized,
    {
        self.write_u64(items.len() as u64)?;
        for item in items {
            item.save(self)?;
        }
        Ok(())
    }
}

pub trait InputArchive {
    fn read_i8(&mut self) -> Result<i8>;
    fn read_i16(&mut self) -> Result<i16>;
    fn read_i32(&mut self) -> Result<i32>;
    fn read_i64(&mut self) -> Result<i64>;
    fn read_isize(&mut self) -> Result<isize>;
    fn read_u8(&mut self) -> Result<u8>;
    fn read_u16(&mut self) -> Result<u16>;
    fn read_u32(&mut self) -> Result<u32>;
    fn read_u64(&mut self) -> Result<u64>;
    fn read_usize(&mut self) -> Result<usize>;
    fn read_f32(&mut self) -> Result<f32>;
    fn read_f64(&mut self) -> Result<f64>;
    fn read_bool(&mut self) -> Result<bool>;
    fn read_char(&mut self) -> Result<char>;
    fn read_bytes(&mut self) -> Result<Vec<u8>>;
    fn read_string(&mut self) -> Result<String>;

    /// Read an element count, enforcing the session's length limit.
    fn read_len(&mut self) -> Result<usize>;

    fn read_seq<T: Primitive>(&mut self) -> Result<Vec<T>>
    where
        Self: Sized,
    {
        let len = self.read_len()?;
        // Capacity is capped; a lying count must not drive allocation.
        let mut out = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            out.push(T::load(self)?);
        }
        Ok(out)
    }
}

/// Type-directed dispatch onto the per-primitive operations.
pub trait Primitive: Sized {
    fn save<A: OutputArchive + ?Sized>(&self, ar: &mut A) -> Result<()>;
    fn load<A: InputArchive + ?Sized>(ar: &mut A) -> Result<Self>;
}

macro_rules! impl_primitive {
    ($($t:ty => $write:ident, $read:ident);* $(;)?) => {$(
        impl Primitive for $t {
            #[inline]
            fn save<A: OutputArchive + ?Sized>(&self, ar: &mut A) -> Result<()> {
                ar.$write(*self)
            }

            #[inline]
            fn load<A: InputArchive + ?Sized>(ar: &mut A) -> Result<Self> {
                ar.$read()
            }
        }
    )*};
}

impl_primitive! {
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    isize => write_isize, read_isize;
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    usize => write_usize, read_usize;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
    bool => write_bool, read_bool;
    char => write_char, read_char;
}

impl Primitive for String {
    fn save<A: OutputArchive + ?Sized>(&self, ar: &mut A) -> Result<()> {
        ar.write_str(self)
    }

    fn load<A: InputArchive + ?Sized>(ar: &mut A) -> Result<Self> {
        ar.read_string()
    }
}
