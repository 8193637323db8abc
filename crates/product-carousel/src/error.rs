use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,

    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
