#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }
}
