pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the weight value {weight} is not in the [0., 1.] range")]
    InvalidArgument { weight: f64 },

    #[error("vertex {vertex} is out of range for a topology with {num_vertices} vertices")]
    OutOfRange { vertex: usize, num_vertices: usize },

    #[error("a ring of {num_vertices} vertices exceeds the maximum of {max}")]
    TooManyVertices { num_vertices: usize, max: usize },

    #[error("invalid serialized topology: {0}")]
    Serialization(#[from] serde_json::Error),
}
