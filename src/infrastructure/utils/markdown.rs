use pulldown_cmark::{html, Event, Options, Parser};
use ammonia::{Builder, UrlRelative};

const WORDS_PER_MINUTE: usize = 200;

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Removes unsafe HTML. Relative links are kept since post bodies link to other site pages.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time_minutes(markdown: &str) -> usize {
    let words: usize = Parser::new_ext(markdown, Options::all())
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(text.split_whitespace().count()),
            _ => None,
        })
        .sum();

    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
