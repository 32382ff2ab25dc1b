use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// A binary value: a BSON-style subtype byte plus the raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Binary {
	pub subtype: u8,
	pub bytes: Vec<u8>,
}

impl Binary {
	pub fn new(subtype: u8, bytes: Vec<u8>) -> Self {
		Self {
			subtype,
			bytes,
		}
	}

	/// Tests bit `position` (little-endian, bit `position % 8` within byte
	/// `position / 8`). Positions past the buffer length are zero.
	pub fn bit(&self, position: u32) -> bool {
		let byte_idx = (position / 8) as usize;
		match self.bytes.get(byte_idx) {
			Some(b) => b & (1 << (position % 8)) != 0,
			None => false,
		}
	}
}

impl Deref for Binary {
	type Target = [u8];
	fn deref(&self) -> &Self::Target {
		&self.bytes
	}
}

impl Display for Binary {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "b\"")?;
		for b in &self.bytes {
			write!(f, "{b:02x}")?;
		}
		write!(f, "\"")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bit_reads_little_endian_within_byte() {
		let b = Binary::new(0, vec![0b1000_0001]);
		assert!(b.bit(0));
		assert!(b.bit(7));
		assert!(!b.bit(1));
	}

	#[test]
	fn bit_past_buffer_is_zero() {
		let b = Binary::new(0, vec![0xff]);
		assert!(!b.bit(8));
		assert!(!b.bit(1000));
	}
}
