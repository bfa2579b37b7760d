//! Filler Body
//!
//! `/long/body/{number}` 的响应体：`number` 个填充字符，按固定大小分块产出

/// 填充字符
pub const FILLER_BYTE: u8 = b'x';

/// 单个分块大小
pub const CHUNK_SIZE: usize = 16 * 1024;

static FILLER_CHUNK: [u8; CHUNK_SIZE] = [FILLER_BYTE; CHUNK_SIZE];

/// 填充分块迭代器
///
/// 所有分块都借用同一块静态内存，长度再大也不会整体分配。
#[derive(Debug, Clone)]
pub struct FillerChunks {
    remaining: u64,
}

impl FillerChunks {
    pub fn new(len: u64) -> Self {
        Self { remaining: len }
    }
}

impl Iterator for FillerChunks {
    type Item = &'static [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let take = self.remaining.min(CHUNK_SIZE as u64) as usize;
        self.remaining -= take as u64;
        Some(&FILLER_CHUNK[..take])
    }
}
