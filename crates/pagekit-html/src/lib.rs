//! Pagekit HTML Parser
//!
//! Turns server-rendered markup into a `pagekit_dom::Document` using
//! html5ever's WHATWG tree builder.

mod parser;

pub use pagekit_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a document at `about:blank`
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Parse an HTML string into a document at `url`
pub fn parse_with_url(html: &str, url: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse_with_url(html, url)
}

/// HTML parsing errors
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build document: {0}")]
    Tree(#[from] pagekit_dom::DomError),
}
