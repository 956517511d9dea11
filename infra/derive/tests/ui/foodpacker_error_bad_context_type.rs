use foodpacker_derive::foodpacker_error;

#[foodpacker_error]
pub enum BadgeError {
    #[error("Badge overflow: {count}")]
    Overflow { count: u32, context: Option<String> },
}

fn main() {}
