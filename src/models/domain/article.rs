/// Article text as fetched from the content source. Request-scoped:
/// built once per generation request and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub source_url: String,
}

impl Article {
    pub fn new(title: &str, content: &str, source_url: &str) -> Self {
        Article {
            title: title.to_string(),
            content: content.to_string(),
            source_url: source_url.to_string(),
        }
    }
}
