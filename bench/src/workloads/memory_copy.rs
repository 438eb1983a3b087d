use crate::runner::workload::Workload;
use derive_more::Display;
use std::hint::black_box;

/// Competing ways of copying one buffer into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CopyStrategy {
    #[display("copy_from_slice")]
    CopyFromSlice,
    #[display("byte_loop")]
    ByteLoop,
    #[display("iter_zip")]
    IterZip,
    #[display("vec_clone")]
    VecClone,
}

impl CopyStrategy {
    pub const ALL: [CopyStrategy; 4] = [
        CopyStrategy::CopyFromSlice,
        CopyStrategy::ByteLoop,
        CopyStrategy::IterZip,
        CopyStrategy::VecClone,
    ];
}

/// Copies a fixed-size source buffer once per trial and checks the copy.
pub struct MemoryCopy {
    strategy: CopyStrategy,
    source: Vec<u8>,
    destination: Vec<u8>,
}

impl MemoryCopy {
    pub fn new(strategy: CopyStrategy, buffer_size: usize) -> Self {
        let source = (0..buffer_size).map(|i| (i % 251) as u8).collect();
        Self {
            strategy,
            source,
            destination: vec![0; buffer_size],
        }
    }

    pub fn name(&self) -> String {
        self.strategy.to_string()
    }

    #[allow(clippy::needless_range_loop)]
    fn copy(&mut self) {
        match self.strategy {
            CopyStrategy::CopyFromSlice => {
                self.destination.copy_from_slice(black_box(&self.source));
            }
            CopyStrategy::ByteLoop => {
                let source = black_box(&self.source);
                for i in 0..source.len() {
                    self.destination[i] = source[i];
                }
            }
            CopyStrategy::IterZip => {
                for (dst, src) in self.destination.iter_mut().zip(black_box(&self.source)) {
                    *dst = *src;
                }
            }
            CopyStrategy::VecClone => {
                self.destination = black_box(&self.source).clone();
            }
        }
        black_box(&mut self.destination);
    }

    fn verify(&self) -> bool {
        self.destination.len() == self.source.len()
            && self.destination.first() == self.source.first()
            && self.destination.last() == self.source.last()
    }
}

impl Workload for MemoryCopy {
    fn run_trial(&mut self, bytes_processed: &mut u64) -> bool {
        self.copy();
        *bytes_processed = self.source.len() as u64;
        self.verify()
    }
}
