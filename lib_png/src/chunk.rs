use crate::constants::{
    LENGTH_OF_CRC_FIELD, LENGTH_OF_FRAMING, LENGTH_OF_LENGTH_FIELD, LENGTH_OF_TYPE_FIELD,
};
use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Chunk payload of {0} bytes exceeds the 2^31-1 limit")]
    PayloadTooLarge(usize),
    #[error("Truncated chunk at offset {offset}")]
    TruncatedChunk { offset: usize },
    #[error("CRC mismatch in {chunk_type} chunk: stored {stored:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        chunk_type: String,
        stored: u32,
        computed: u32,
    },
}

/// One length-prefixed, CRC-terminated block of a PNG stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub chunk_type: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    pub const MAX_LENGTH: usize = (1 << 31) - 1;

    pub fn new(chunk_type: [u8; 4], data: Vec<u8>) -> Self {
        Self { chunk_type, data }
    }

    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(&self.chunk_type).into_owned()
    }

    /// CRC-32 over the type tag followed by the payload.
    pub fn crc(&self) -> u32 {
        crc32(&self.chunk_type, &self.data)
    }

    /// Appends length, type, payload and CRC to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), ChunkError> {
        if self.data.len() > Self::MAX_LENGTH {
            error!(
                "{} payload of {} bytes is too large",
                self.type_name(),
                self.data.len()
            );
            return Err(ChunkError::PayloadTooLarge(self.data.len()));
        }

        let crc = self.crc();
        out.reserve(LENGTH_OF_FRAMING + self.data.len());
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.chunk_type);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&crc.to_be_bytes());
        debug!(
            "{} chunk written: {} bytes, crc {:#010x}",
            self.type_name(),
            self.data.len(),
            crc
        );

        Ok(())
    }

    /// Splits everything after the signature into chunks, checking each CRC.
    pub fn read_all(data: &[u8]) -> Result<Vec<Chunk>, ChunkError> {
        let mut chunks = Vec::new();
        let mut cursor = 0;

        while cursor < data.len() {
            let (chunk, next) = Self::read_at(data, cursor)?;
            chunks.push(chunk);
            cursor = next;
        }

        Ok(chunks)
    }

    fn read_at(data: &[u8], offset: usize) -> Result<(Chunk, usize), ChunkError> {
        let truncated = || {
            error!("Chunk at offset {} runs past the end of the stream", offset);
            ChunkError::TruncatedChunk { offset }
        };

        let header_end = offset + LENGTH_OF_LENGTH_FIELD + LENGTH_OF_TYPE_FIELD;
        let header = data.get(offset..header_end).ok_or_else(truncated)?;
        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let chunk_type = [header[4], header[5], header[6], header[7]];

        let data_end = header_end.checked_add(length).ok_or_else(truncated)?;
        let crc_end = data_end + LENGTH_OF_CRC_FIELD;
        let payload = data.get(header_end..data_end).ok_or_else(truncated)?;
        let stored = data.get(data_end..crc_end).ok_or_else(truncated)?;
        let stored = u32::from_be_bytes([stored[0], stored[1], stored[2], stored[3]]);

        let chunk = Chunk::new(chunk_type, payload.to_vec());
        let computed = chunk.crc();
        if stored != computed {
            error!(
                "CRC mismatch in {} chunk at offset {}",
                chunk.type_name(),
                offset
            );
            return Err(ChunkError::CrcMismatch {
                chunk_type: chunk.type_name(),
                stored,
                computed,
            });
        }
        debug!("Read {} chunk: {} bytes", chunk.type_name(), length);

        Ok((chunk, crc_end))
    }
}

pub fn crc32(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}
