use doran_derive::doran_error;

#[doran_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
