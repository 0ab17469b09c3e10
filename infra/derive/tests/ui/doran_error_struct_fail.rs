use doran_derive::doran_error;

#[doran_error]
pub struct DemoError {
    message: String,
}

fn main() {}
