use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("the item '{0}' is declared more than once")]
    DuplicateItem(String),
    #[error("the item '{name}' has size {size}, but sizes must be positive")]
    NonPositiveSize { name: String, size: u32 },
}
