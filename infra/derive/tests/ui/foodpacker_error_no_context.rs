use foodpacker_derive::foodpacker_error;

#[foodpacker_error]
pub enum CartError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
