use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Wraps a body fragment in the site layout. `title` is escaped, `body` is not.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        encode_text(title)
    ))
}

/// `<ul>` of links, one per `(href, label)`
pub fn link_list<'a>(links: impl IntoIterator<Item = (String, &'a str)>) -> String {
    let mut list = String::from("<ul>\n");
    for (href, label) in links {
        let _ = writeln!(
            list,
            "<li><a href=\"{}\">{}</a></li>",
            encode_double_quoted_attribute(&href),
            encode_text(label)
        );
    }
    list.push_str("</ul>");
    list
}
