use alloc::string::String;

/// Reasons [`crate::Carousel::create`] refuses to build a carousel.
///
/// None of these are fatal to the host page: the caller is expected to log them and carry on
/// without a carousel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateError {
    #[error("carousel container `{id}` was not found")]
    ContainerMissing { id: String },

    #[error("duplicate carousel item id `{id}`")]
    DuplicateItemId { id: String },

    #[error("carousel item `{id}` has an empty title")]
    EmptyTitle { id: String },

    #[error("carousel item `{id}` has an empty image")]
    EmptyImage { id: String },

    #[error("scroll speed must be a positive, finite multiplier")]
    InvalidScrollSpeed,
}

/// Returned by the host-driven entry points once the carousel's container is gone.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("carousel container `{id}` was removed from the page")]
pub struct Detached {
    pub id: String,
}
