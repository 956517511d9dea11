use foodpacker_derive::foodpacker_error;

#[foodpacker_error]
pub enum CartError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
