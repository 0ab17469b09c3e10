use doran_derive::doran_error;

#[doran_error]
pub enum DemoError {
    Io {
        #[source]
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
