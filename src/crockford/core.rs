use tracing::trace;

use crate::alphabet::CROCKFORD;

/// Pad character, only emitted when padding is enabled. While decoding it
/// ends the stream.
pub const PAD: u8 = b'=';

const BITS_PER_SYMBOL: u32 = 5;
const MASK_5BITS: u64 = 0x1F;
const MASK_8BITS: u64 = 0xFF;
const BYTES_PER_BLOCK: usize = 5;
const SYMBOLS_PER_BLOCK: usize = 8;

/// Initial buffer reservation.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Final encode flush, indexed by leftover byte count:
/// (symbols emitted, left shift that aligns the last group to 5 bits).
const ENCODE_FLUSH: [(usize, u32); BYTES_PER_BLOCK] = [(0, 0), (2, 2), (4, 4), (5, 1), (7, 3)];

/// Final decode flush, indexed by leftover symbol count:
/// (bytes emitted, trailing bits dropped). 0 and 1 symbols hold no full byte.
const DECODE_FLUSH: [(usize, u32); SYMBOLS_PER_BLOCK] = [
    (0, 0),
    (0, 0),
    (1, 2),
    (1, 7),
    (2, 4),
    (3, 1),
    (3, 6),
    (4, 3),
];

/// Incremental Crockford Base32 encoder/decoder.
///
/// Feed input in chunks of any size through [`encode`](Self::encode) or
/// [`decode`](Self::decode), pass `is_final = true` exactly once to flush the
/// partial block, then drain the output with
/// [`read_results`](Self::read_results). The output does not depend on how
/// the input was split into chunks.
///
/// A stream is owned by a single caller. Once the end of input has been seen
/// further calls are ignored until [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct CrockfordStream {
    /// Output written so far; its length is the write cursor.
    buffer: Vec<u8>,
    /// Bit accumulator; only the low 40 bits are meaningful.
    bit_work_area: u64,
    /// Bytes (encode) or symbols (decode) folded into the current block.
    modulus: usize,
    eof: bool,
    padding: bool,
}

impl CrockfordStream {
    /// Create a stream. `padding` pads the final encoded block to 8 symbols.
    pub fn new(padding: bool) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }

    /// Encode a chunk of bytes, flushing the partial block if `is_final`.
    pub fn encode(&mut self, chunk: &[u8], is_final: bool) {
        if self.eof {
            return;
        }
        let blocks = chunk.len() / BYTES_PER_BLOCK + 1;
        self.ensure_buffer_size(blocks * SYMBOLS_PER_BLOCK);

        for &b in chunk {
            self.modulus = (self.modulus + 1) % BYTES_PER_BLOCK;
            self.bit_work_area = (self.bit_work_area << 8) | u64::from(b);
            if self.modulus == 0 {
                self.push_symbols(self.bit_work_area, SYMBOLS_PER_BLOCK);
            }
        }

        if is_final {
            trace!(modulus = self.modulus, "final encode block");
            self.eof = true;
            self.flush_encode();
        }
    }

    /// Decode a chunk of symbols, flushing the partial block if `is_final`.
    ///
    /// Whitespace and bytes outside the alphabet are skipped. The pad
    /// character ends the stream at once: the rest of the chunk and any later
    /// input is ignored.
    pub fn decode(&mut self, chunk: &[u8], is_final: bool) {
        if self.eof {
            return;
        }
        let blocks = chunk.len() / SYMBOLS_PER_BLOCK + 1;
        self.ensure_buffer_size(blocks * BYTES_PER_BLOCK);

        for (i, &b) in chunk.iter().enumerate() {
            if b == PAD {
                trace!(position = i, modulus = self.modulus, "pad character ends stream");
                self.eof = true;
                break;
            }
            let Some(value) = CROCKFORD.decode(b) else {
                continue;
            };
            self.modulus = (self.modulus + 1) % SYMBOLS_PER_BLOCK;
            self.bit_work_area = (self.bit_work_area << BITS_PER_SYMBOL) | u64::from(value);
            if self.modulus == 0 {
                self.push_bytes(self.bit_work_area, BYTES_PER_BLOCK);
            }
        }

        if is_final && !self.eof {
            trace!(modulus = self.modulus, "final decode block");
            self.eof = true;
        }
        if self.eof {
            self.flush_decode();
        }
    }

    /// Number of output bytes waiting in the buffer.
    #[inline]
    pub fn available(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Whether the end of input has been seen.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Take everything buffered so far, leaving the buffer empty.
    pub fn read_results(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    /// Return to the freshly constructed state, keeping the padding setting.
    pub fn reset(&mut self) {
        trace!(pending = self.buffer.len(), "resetting stream");
        self.buffer.clear();
        self.bit_work_area = 0;
        self.modulus = 0;
        self.eof = false;
    }

    fn ensure_buffer_size(&mut self, size: usize) {
        if self.buffer.capacity() == 0 {
            self.buffer.reserve(size.max(DEFAULT_BUFFER_SIZE));
        } else {
            self.buffer.reserve(size);
        }
    }

    /// Emit the low `count` 5-bit groups of `bits`, most significant first.
    fn push_symbols(&mut self, bits: u64, count: usize) {
        for k in (0..count as u32).rev() {
            let value = (bits >> (k * BITS_PER_SYMBOL)) & MASK_5BITS;
            self.buffer.push(CROCKFORD.encode(value as u8));
        }
    }

    /// Emit the low `count` bytes of `bits`, most significant first.
    fn push_bytes(&mut self, bits: u64, count: usize) {
        for k in (0..count as u32).rev() {
            self.buffer.push(((bits >> (k * 8)) & MASK_8BITS) as u8);
        }
    }

    fn flush_encode(&mut self) {
        if self.modulus == 0 {
            return;
        }
        let (symbols, shift) = ENCODE_FLUSH[self.modulus];
        self.push_symbols(self.bit_work_area << shift, symbols);
        if self.padding {
            let padded = self.buffer.len() + SYMBOLS_PER_BLOCK - symbols;
            self.buffer.resize(padded, PAD);
        }
    }

    fn flush_decode(&mut self) {
        let (bytes, dropped) = DECODE_FLUSH[self.modulus];
        if bytes == 0 {
            if self.modulus == 1 {
                trace!("discarding a lone trailing symbol");
            }
            return;
        }
        self.push_bytes(self.bit_work_area >> dropped, bytes);
    }
}
